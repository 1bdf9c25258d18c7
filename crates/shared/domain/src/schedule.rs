//! Recurring weekly opening hours.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Day of the week with a fixed numbering: 0 = Sunday … 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Maps 0..=6 (Sunday-based) to a day; anything else is `None`.
    #[must_use]
    pub const fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::Sunday),
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            _ => None,
        }
    }

    #[must_use]
    pub const fn index(self) -> u32 {
        self as u32
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `"HH:MM"` span. `end < start` denotes an overnight span.
///
/// The strings are kept as entered; parsing happens where they are evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self { start: start.into(), end: end.into() }
    }
}

/// Hours for a single day. Ranges may overlap and carry no ordering semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub is_open: bool,
    #[serde(default)]
    pub ranges: Vec<TimeRange>,
}

impl DaySchedule {
    #[must_use]
    pub const fn closed() -> Self {
        Self { is_open: false, ranges: Vec::new() }
    }

    #[must_use]
    pub const fn open(ranges: Vec<TimeRange>) -> Self {
        Self { is_open: true, ranges }
    }
}

/// Day name → hours. Days without an entry are closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule(BTreeMap<DayOfWeek, DaySchedule>);

impl WeeklySchedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_day(mut self, day: DayOfWeek, schedule: DaySchedule) -> Self {
        self.0.insert(day, schedule);
        self
    }

    /// Same hours on every day of the week.
    #[must_use]
    pub fn every_day(schedule: &DaySchedule) -> Self {
        Self(DayOfWeek::ALL.iter().map(|day| (*day, schedule.clone())).collect())
    }

    #[must_use]
    pub fn day(&self, day: DayOfWeek) -> Option<&DaySchedule> {
        self.0.get(&day)
    }

    pub fn days(&self) -> impl Iterator<Item = (DayOfWeek, &DaySchedule)> {
        self.0.iter().map(|(day, schedule)| (*day, schedule))
    }
}
