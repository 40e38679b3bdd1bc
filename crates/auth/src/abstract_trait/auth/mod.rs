pub mod password_reset;

pub use self::password_reset::{DynPasswordResetService, PasswordResetServiceTrait};
