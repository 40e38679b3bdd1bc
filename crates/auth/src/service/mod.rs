mod password_reset;
mod token;

pub use self::password_reset::{PasswordResetService, PasswordResetServiceDeps};
pub use self::token::{GeneratedToken, ParsedToken, generate_token, parse_token};
