pub mod audit;
pub mod password_reset;
pub mod reset_token;
