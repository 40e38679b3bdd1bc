mod clock;
mod email;
mod hashing;

pub use self::clock::{ClockTrait, DynClock};
pub use self::email::{DynEmailService, EmailServiceTrait};
pub use self::hashing::{DynHashing, HashingTrait};
