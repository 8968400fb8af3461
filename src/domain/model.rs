use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::error::{Result, SpanError};

pub const SECONDS_PER_DAY: i64 = 86_400;

/// An immutable point in time in one of four representations.
///
/// When two points of differing representations are differenced, the second
/// point is projected onto the first point's timeline: a `Date` lands on a
/// date-time timeline at midnight, a date-time lands on a `Date` timeline
/// at its calendar date, and `Utc`/`DateTime` interconvert through their
/// UTC reading. A bare `Time` carries no date and a `Date` carries no
/// time-of-day, so those pairs can not be projected onto each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimePoint {
    Utc(DateTime<Utc>),
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
}

impl TimePoint {
    pub fn kind(&self) -> &'static str {
        match self {
            TimePoint::Utc(_) => "Utc",
            TimePoint::DateTime(_) => "DateTime",
            TimePoint::Date(_) => "Date",
            TimePoint::Time(_) => "Time",
        }
    }

    /// Signed span from `self` to `end`, with `end` projected onto
    /// `self`'s timeline first.
    pub fn signed_span_to(&self, end: &TimePoint) -> Result<TimeSpan> {
        let delta = match self {
            TimePoint::Utc(start) => end.project_utc()?.signed_duration_since(*start),
            TimePoint::DateTime(start) => end.project_date_time()?.signed_duration_since(*start),
            TimePoint::Date(start) => end.project_date()?.signed_duration_since(*start),
            TimePoint::Time(start) => end.project_time()?.signed_duration_since(*start),
        };
        Ok(TimeSpan::from_delta(delta))
    }

    fn project_utc(&self) -> Result<DateTime<Utc>> {
        match self {
            TimePoint::Utc(at) => Ok(*at),
            TimePoint::DateTime(at) => Ok(at.and_utc()),
            TimePoint::Date(at) => Ok(at.and_time(NaiveTime::MIN).and_utc()),
            TimePoint::Time(_) => Err(self.incompatible_with("Utc")),
        }
    }

    fn project_date_time(&self) -> Result<NaiveDateTime> {
        match self {
            TimePoint::Utc(at) => Ok(at.naive_utc()),
            TimePoint::DateTime(at) => Ok(*at),
            TimePoint::Date(at) => Ok(at.and_time(NaiveTime::MIN)),
            TimePoint::Time(_) => Err(self.incompatible_with("DateTime")),
        }
    }

    // A Date timeline has whole-day resolution, so finer points land on
    // their calendar date.
    fn project_date(&self) -> Result<NaiveDate> {
        match self {
            TimePoint::Utc(at) => Ok(at.date_naive()),
            TimePoint::DateTime(at) => Ok(at.date()),
            TimePoint::Date(at) => Ok(*at),
            TimePoint::Time(_) => Err(self.incompatible_with("Date")),
        }
    }

    fn project_time(&self) -> Result<NaiveTime> {
        match self {
            TimePoint::Utc(at) => Ok(at.time()),
            TimePoint::DateTime(at) => Ok(at.time()),
            TimePoint::Date(_) => Err(self.incompatible_with("Time")),
            TimePoint::Time(at) => Ok(*at),
        }
    }

    fn incompatible_with(&self, onto: &'static str) -> SpanError {
        SpanError::IncompatibleRepresentations {
            from: self.kind(),
            onto,
        }
    }
}

impl From<DateTime<Utc>> for TimePoint {
    fn from(at: DateTime<Utc>) -> Self {
        TimePoint::Utc(at)
    }
}

impl From<NaiveDateTime> for TimePoint {
    fn from(at: NaiveDateTime) -> Self {
        TimePoint::DateTime(at)
    }
}

impl From<NaiveDate> for TimePoint {
    fn from(at: NaiveDate) -> Self {
        TimePoint::Date(at)
    }
}

impl From<NaiveTime> for TimePoint {
    fn from(at: NaiveTime) -> Self {
        TimePoint::Time(at)
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimePoint::Utc(at) => write!(f, "{}", at),
            TimePoint::DateTime(at) => write!(f, "{}", at),
            TimePoint::Date(at) => write!(f, "{}", at),
            TimePoint::Time(at) => write!(f, "{}", at),
        }
    }
}

/// An immutable signed duration, held as whole seconds.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimeSpan {
    secs: i64,
}

impl TimeSpan {
    pub fn from_seconds(secs: i64) -> Self {
        Self { secs }
    }

    /// Sub-second parts are discarded toward zero.
    pub fn from_delta(delta: TimeDelta) -> Self {
        Self {
            secs: delta.num_seconds(),
        }
    }

    pub fn abs(&self) -> Result<TimeSpan> {
        let secs = self.secs.checked_abs().ok_or(SpanError::SpanOverflow)?;
        Ok(Self { secs })
    }

    pub fn whole_seconds(&self) -> i64 {
        self.secs
    }

    /// Whole 86 400-second units, truncating toward zero.
    pub fn whole_days(&self) -> i64 {
        self.secs / SECONDS_PER_DAY
    }
}
