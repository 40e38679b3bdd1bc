pub mod audit;
pub mod auth;
pub mod reset_token;
pub mod user;
