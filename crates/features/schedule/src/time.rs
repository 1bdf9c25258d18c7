use chrono::{NaiveTime, Timelike};

/// Parses `"HH:MM"` into minutes since midnight.
///
/// Surrounding whitespace is ignored. Single-digit hours (`"9:30"`) are
/// accepted; anything chrono rejects for `%H:%M` yields `None`.
#[must_use]
pub fn parse_minutes(raw: &str) -> Option<u32> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok().map(|t| t.hour() * 60 + t.minute())
}
