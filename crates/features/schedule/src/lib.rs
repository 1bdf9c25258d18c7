//! Schedule feature slice: is a venue open at a given instant?
//!
//! Evaluation works on wall-clock fields only (weekday, hour, minute) of the
//! `now` handed in; callers decide the time zone. No ambient clock is read.

mod diagnostics;
mod time;

pub use diagnostics::{ScheduleIssue, diagnose};
pub use time::parse_minutes;

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use encontra_kernel::domain::schedule::{DayOfWeek, TimeRange, WeeklySchedule};
use encontra_kernel::domain::venue::Venue;
use serde::Serialize;
use tracing::trace;

/// Where an [`OpenStatus`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenSource {
    /// No schedule configured; the venue's manual flag was used.
    Manual,
    Schedule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpenStatus {
    pub open: bool,
    pub source: OpenSource,
}

/// Open/closed status together with its source.
pub fn evaluate<Tz: TimeZone>(venue: &Venue, now: &DateTime<Tz>) -> OpenStatus {
    let Some(schedule) = &venue.schedule else {
        return OpenStatus { open: venue.manual_open, source: OpenSource::Manual };
    };
    let open = is_open_at(schedule, now);
    trace!(venue = %venue.slug, open, "Schedule evaluated");
    OpenStatus { open, source: OpenSource::Schedule }
}

/// `true` when the venue is open at `now`.
pub fn is_open_now<Tz: TimeZone>(venue: &Venue, now: &DateTime<Tz>) -> bool {
    evaluate(venue, now).open
}

/// Evaluates a bare schedule. Missing days count as closed.
pub fn is_open_at<Tz: TimeZone>(schedule: &WeeklySchedule, now: &DateTime<Tz>) -> bool {
    let Some(day) = DayOfWeek::from_index(now.weekday().num_days_from_sunday()) else {
        return false;
    };
    let Some(hours) = schedule.day(day).filter(|d| d.is_open) else {
        return false;
    };
    let current = now.hour() * 60 + now.minute();
    hours.ranges.iter().any(|range| range_contains(range, current))
}

/// Inclusive on both ends. `end < start` wraps past midnight.
/// Unparseable bounds never match.
#[must_use]
pub fn range_contains(range: &TimeRange, minute_of_day: u32) -> bool {
    let (Some(start), Some(end)) = (parse_minutes(&range.start), parse_minutes(&range.end)) else {
        return false;
    };
    if end >= start {
        (start..=end).contains(&minute_of_day)
    } else {
        minute_of_day >= start || minute_of_day <= end
    }
}
