//! Time sources.
//!
//! Decision functions never read the wall clock themselves; callers obtain
//! `now` from a [`Clock`] and pass it in explicitly.

use chrono::{DateTime, FixedOffset, Utc};
use std::borrow::Cow;

#[encontra_derive::encontra_error]
pub enum ClockError {
    #[error("Invalid UTC offset{}: {message}", format_context(.context))]
    Offset { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid timestamp{}: {source}", format_context(.context))]
    Parse { source: chrono::ParseError, context: Option<Cow<'static, str>> },
}

/// Source of the current instant in venue-local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Builds a fixed offset from minutes east of UTC (`-180` for Argentina).
///
/// # Errors
/// Returns [`ClockError::Offset`] when the offset is outside ±24h.
pub fn offset_from_minutes(minutes: i32) -> Result<FixedOffset, ClockError> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| ClockError::Offset {
            message: format!("{minutes} minutes").into(),
            context: None,
        })
}

/// Wall clock shifted into a fixed local offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    #[must_use]
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// # Errors
    /// See [`offset_from_minutes`].
    pub fn from_offset_minutes(minutes: i32) -> Result<Self, ClockError> {
        offset_from_minutes(minutes).map(Self::new)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}

/// Always returns the same instant. Used by tests and by the probe's `--at`.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    #[must_use]
    pub const fn new(at: DateTime<FixedOffset>) -> Self {
        Self(at)
    }

    /// Parses an RFC 3339 timestamp, keeping its offset.
    ///
    /// # Errors
    /// Returns [`ClockError::Parse`] for malformed input.
    pub fn parse(rfc3339: &str) -> Result<Self, ClockError> {
        DateTime::parse_from_rfc3339(rfc3339).map(Self).context("Expected RFC 3339")
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
