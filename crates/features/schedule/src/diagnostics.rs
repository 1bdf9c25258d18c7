use crate::time::parse_minutes;
use encontra_kernel::domain::schedule::{DayOfWeek, TimeRange, WeeklySchedule};
use serde::Serialize;
use std::fmt;

/// Data-quality finding in a weekly schedule.
///
/// Diagnostics are informational. Evaluation does not consult them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ScheduleIssue {
    /// A bound that is not `HH:MM`; the range never matches.
    MalformedTime { day: DayOfWeek, index: usize, value: String },
    /// Two ranges of the same day share at least one minute.
    Overlap { day: DayOfWeek, first: usize, second: usize },
}

impl fmt::Display for ScheduleIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTime { day, index, value } => {
                write!(f, "{day}: range #{index} has malformed time {value:?}")
            },
            Self::Overlap { day, first, second } => {
                write!(f, "{day}: ranges #{first} and #{second} overlap")
            },
        }
    }
}

/// Lists every issue of `schedule`, in day then range order.
///
/// Closed days are skipped.
#[must_use]
pub fn diagnose(schedule: &WeeklySchedule) -> Vec<ScheduleIssue> {
    let mut issues = Vec::new();
    for (day, hours) in schedule.days().filter(|(_, d)| d.is_open) {
        let mut spans = Vec::with_capacity(hours.ranges.len());
        for (index, range) in hours.ranges.iter().enumerate() {
            match bounds(range) {
                Ok(span) => spans.push((index, span)),
                Err(value) => issues.push(ScheduleIssue::MalformedTime { day, index, value }),
            }
        }
        for (i, (first, a)) in spans.iter().enumerate() {
            for (second, b) in &spans[i + 1..] {
                if overlaps(*a, *b) {
                    issues.push(ScheduleIssue::Overlap { day, first: *first, second: *second });
                }
            }
        }
    }
    issues
}

fn bounds(range: &TimeRange) -> Result<(u32, u32), String> {
    let start = parse_minutes(&range.start).ok_or_else(|| range.start.clone())?;
    let end = parse_minutes(&range.end).ok_or_else(|| range.end.clone())?;
    Ok((start, end))
}

/// Splits an overnight span into its two same-day pieces.
fn segments((start, end): (u32, u32)) -> [(u32, u32); 2] {
    if end >= start { [(start, end), (start, end)] } else { [(start, 24 * 60 - 1), (0, end)] }
}

fn overlaps(a: (u32, u32), b: (u32, u32)) -> bool {
    segments(a)
        .iter()
        .any(|(s1, e1)| segments(b).iter().any(|(s2, e2)| s1 <= e2 && s2 <= e1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overnight_pieces() {
        assert_eq!(segments((1320, 120)), [(1320, 1439), (0, 120)]);
        assert!(overlaps((1320, 120), (60, 180)));
        assert!(!overlaps((1320, 120), (600, 1080)));
        assert!(overlaps((540, 720), (720, 900)));
    }
}
