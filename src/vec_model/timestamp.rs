use chrono::{DateTime, Utc};
use std::time::SystemTime;

/// wall clock time in milliseconds since unix epoch
pub fn now_millis() -> f64 {
    let now = SystemTime::now();
    let utc: DateTime<Utc> = now.into();
    utc.timestamp_millis() as f64
}
