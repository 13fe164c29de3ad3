use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

/// e.g. "January 5, 2024, 3:45 PM"
const TIMESTAMP_FORMAT: &str = "%B %-d, %Y, %-I:%M %p";

/// A source of "now", in local wall-clock time.
pub(crate) type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

#[inline]
pub(crate) fn system_clock() -> Clock {
    Arc::new(|| Local::now().naive_local())
}

/// Formats a wall-clock time the way transcript entries show it, for
/// example `January 5, 2024, 3:45 PM`.
pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}
