mod clock;
mod database;
mod hashing;
mod myconfig;

pub use self::clock::SystemClock;
pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::hashing::Hashing;
pub use self::myconfig::{
    DEFAULT_EMAIL_FROM, DEFAULT_OTEL_ENDPOINT, EmailConfig, otel_endpoint, parse_port,
};
