mod audit;
mod reset_token;
mod user;

pub use self::audit::AuditLogRepository;
pub use self::reset_token::ResetTokenRepository;
pub use self::user::UserQueryRepository;
