//! A collection of utility functions
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use crate::Timestamp;

/// Formats a `SystemTime` into a RFC 3339 - Z format.
/// For example "2018-01-26T18:30:09.453Z"
pub fn format_system_time(time: SystemTime) -> String {
    let datetime: DateTime<Utc> = time.into();
    datetime.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Converts a `SystemTime` into whole seconds since the unix epoch.
/// Times before the epoch yield negative values.
pub fn unix_seconds(time: SystemTime) -> Timestamp {
    let datetime: DateTime<Utc> = time.into();
    datetime.timestamp()
}
