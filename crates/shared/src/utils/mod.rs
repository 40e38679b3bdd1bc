mod calendar;
mod logs;
mod metrics;
mod otel;
mod random_secret;
mod shutdown;
mod template;

pub use self::calendar::{WEEKDAY_LABELS, month_matrix, parse_iso_date, to_iso_date_string};
pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status, SystemMetrics, run_metrics_collector};
pub use self::otel::{Telemetry, TracingContext};
pub use self::random_secret::generate_secret_hex;
pub use self::shutdown::shutdown_signal;
pub use self::template::{PASSWORD_RESET_SUBJECT, PasswordResetEmailData, password_reset_email};
