use chrono::{DateTime, Utc};
use std::sync::Arc;

pub type DynClock = Arc<dyn ClockTrait + Send + Sync>;

pub trait ClockTrait {
    fn now(&self) -> DateTime<Utc>;
}
