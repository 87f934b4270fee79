//! Calendar day value.
//!
//! # Responsibility
//! - Represent a date without time component for calendar selection.
//! - Convert between ISO `yyyy-mm-dd`, RFC 3339 instants and short labels.
//!
//! # Invariants
//! - Ordering is calendar order (year, month, day).
//! - Serialized form is always the ISO date string.

use crate::locale::Locale;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date picked by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDay(NaiveDate);

/// Two-slot display label (`DD`, `MMM`) for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLabel {
    /// Zero-padded day of month.
    pub day: String,
    /// Locale month abbreviation.
    pub month: String,
}

impl CalendarDay {
    /// Builds a day from numeric parts.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DayParseError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DayParseError::OutOfRange { year, month, day })
    }

    /// Parses an ISO `yyyy-mm-dd` date string.
    pub fn parse_iso(value: &str) -> Result<Self, DayParseError> {
        let trimmed = value.trim();
        NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
            .map(Self)
            .map_err(|_| DayParseError::InvalidIso(trimmed.to_string()))
    }

    /// Parses the date part of an RFC 3339 instant, keeping its own offset.
    ///
    /// `2024-03-10T21:00:00-03:00` yields 2024-03-10.
    pub fn parse_instant(value: &str) -> Result<Self, DayParseError> {
        let trimmed = value.trim();
        DateTime::parse_from_rfc3339(trimmed)
            .map(|instant| Self(instant.date_naive()))
            .map_err(|_| DayParseError::InvalidInstant(trimmed.to_string()))
    }

    /// ISO `yyyy-mm-dd` form, used as the calendar mark key.
    pub fn to_iso(self) -> String {
        self.0.format(ISO_DATE_FORMAT).to_string()
    }

    /// Widens the day to an instant at UTC midnight.
    pub fn to_instant(self) -> String {
        self.0
            .and_time(NaiveTime::MIN)
            .and_utc()
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Next calendar day, `None` at the end of the supported range.
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(self, other: Self) -> i64 {
        (other.0 - self.0).num_days()
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Whether both days fall into the same month of the same year.
    pub fn same_month_as(self, other: Self) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    /// Short label with zero-padded day and locale month abbreviation.
    pub fn short_label(self, locale: Locale) -> ShortLabel {
        ShortLabel {
            day: format!("{:02}", self.day()),
            month: locale.month_abbrev(self.month()).to_string(),
        }
    }
}

impl Display for CalendarDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE_FORMAT))
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl From<CalendarDay> for NaiveDate {
    fn from(value: CalendarDay) -> Self {
        value.0
    }
}

impl TryFrom<String> for CalendarDay {
    type Error = DayParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_iso(value.as_str())
    }
}

impl From<CalendarDay> for String {
    fn from(value: CalendarDay) -> Self {
        value.to_iso()
    }
}

/// Calendar day conversion errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayParseError {
    InvalidIso(String),
    InvalidInstant(String),
    OutOfRange { year: i32, month: u32, day: u32 },
}

impl Display for DayParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIso(value) => {
                write!(f, "invalid calendar day `{value}` (expected yyyy-mm-dd)")
            }
            Self::InvalidInstant(value) => {
                write!(f, "invalid instant `{value}` (expected RFC 3339)")
            }
            Self::OutOfRange { year, month, day } => {
                write!(f, "calendar day out of range: {year}-{month}-{day}")
            }
        }
    }
}

impl Error for DayParseError {}

#[cfg(test)]
mod tests {
    use super::{CalendarDay, DayParseError};
    use crate::locale::Locale;

    fn day(value: &str) -> CalendarDay {
        CalendarDay::parse_iso(value).expect("valid iso day")
    }

    #[test]
    fn orders_by_calendar_position() {
        assert!(day("2024-02-29") < day("2024-03-01"));
        assert!(day("2023-12-31") < day("2024-01-01"));
    }

    #[test]
    fn rejects_malformed_iso() {
        let err = CalendarDay::parse_iso("10/03/2024").unwrap_err();
        assert_eq!(err, DayParseError::InvalidIso("10/03/2024".to_string()));
        assert!(CalendarDay::parse_iso("2023-02-29").is_err());
    }

    #[test]
    fn instant_round_trip_keeps_day() {
        let parsed = CalendarDay::parse_instant("2024-03-10T21:00:00-03:00").unwrap();
        assert_eq!(parsed, day("2024-03-10"));
        assert_eq!(parsed.to_instant(), "2024-03-10T00:00:00Z");
    }

    #[test]
    fn short_label_pads_day() {
        let label = day("2024-03-05").short_label(Locale::PtBr);
        assert_eq!(label.day, "05");
        assert_eq!(label.month, "mar");
    }

    #[test]
    fn succ_crosses_year_boundary() {
        assert_eq!(day("2024-12-31").succ(), Some(day("2025-01-01")));
        assert_eq!(day("2024-01-01").days_until(day("2024-03-01")), 60);
    }
}
