//! Display formatting for timestamps.

use chrono::{DateTime, Local, TimeZone};

/// `3:07 pm` style clock time.
pub fn clock<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%-I:%M %P").to_string()
}

/// `31/12/2024` style date.
pub fn date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%d/%m/%Y").to_string()
}

/// Clock time in the viewer's timezone.
pub fn local_clock<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    clock(&at.with_timezone(&Local))
}

/// Date in the viewer's timezone.
pub fn local_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    date(&at.with_timezone(&Local))
}
