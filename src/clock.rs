//! Wall-clock formatting for display.

use std::fmt::Display;
use std::time::SystemTime;

use chrono::{DateTime, Local, TimeZone, Utc};

/// Formats the time of day of `at` in the local timezone as `HH:MM`.
pub fn clock_time(at: SystemTime) -> String {
    clock_time_in(at, &Local)
}

/// Formats the time of day of `at` in `tz` as `HH:MM`.
pub fn clock_time_in<Tz>(at: SystemTime, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateTime::<Utc>::from(at)
        .with_timezone(tz)
        .format("%H:%M")
        .to_string()
}
