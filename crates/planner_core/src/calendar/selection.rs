//! Date range selection state machine for the calendar picker.
//!
//! # Invariants
//! - When both endpoints are set, `starts_at <= ends_at`.
//! - `ends_at` is never set without `starts_at`.
//! - Tapping a day on a completed range starts a new range.

use crate::model::day::CalendarDay;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possibly partial two-endpoint date range chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRangeSelection {
    starts_at: Option<CalendarDay>,
    ends_at: Option<CalendarDay>,
}

impl DateRangeSelection {
    /// Nothing selected yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rebuilds a selection from stored endpoints.
    ///
    /// # Errors
    /// - `EndWithoutStart` when only `ends_at` is given.
    /// - `Reversed` when `ends_at < starts_at`.
    pub fn from_parts(
        starts_at: Option<CalendarDay>,
        ends_at: Option<CalendarDay>,
    ) -> Result<Self, SelectionError> {
        match (starts_at, ends_at) {
            (None, Some(end)) => Err(SelectionError::EndWithoutStart(end)),
            (Some(start), Some(end)) if end < start => {
                Err(SelectionError::Reversed { start, end })
            }
            _ => Ok(Self { starts_at, ends_at }),
        }
    }

    pub fn starts_at(&self) -> Option<CalendarDay> {
        self.starts_at
    }

    pub fn ends_at(&self) -> Option<CalendarDay> {
        self.ends_at
    }

    /// Both endpoints, when the range is complete.
    pub fn bounds(&self) -> Option<(CalendarDay, CalendarDay)> {
        self.starts_at.zip(self.ends_at)
    }

    pub fn is_empty(&self) -> bool {
        self.starts_at.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.bounds().is_some()
    }

    /// Inclusive number of days covered; 1 for a start-only selection.
    pub fn day_span(&self) -> usize {
        match (self.starts_at, self.ends_at) {
            (None, _) => 0,
            (Some(_), None) => 1,
            (Some(start), Some(end)) => start.days_until(end).unsigned_abs() as usize + 1,
        }
    }

    /// Returns the selection after the user taps `picked`.
    ///
    /// - Empty or complete selection: `picked` starts a new range.
    /// - Start only: `picked` before the start swaps the endpoints, otherwise
    ///   it becomes the end (same day allowed).
    pub fn select_day(&self, picked: CalendarDay) -> Self {
        match (self.starts_at, self.ends_at) {
            (Some(start), None) if picked < start => Self {
                starts_at: Some(picked),
                ends_at: Some(start),
            },
            (Some(start), None) => Self {
                starts_at: Some(start),
                ends_at: Some(picked),
            },
            _ => Self {
                starts_at: Some(picked),
                ends_at: None,
            },
        }
    }
}

/// Invalid stored selection endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    EndWithoutStart(CalendarDay),
    Reversed { start: CalendarDay, end: CalendarDay },
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndWithoutStart(end) => write!(f, "ends_at ({end}) set without starts_at"),
            Self::Reversed { start, end } => {
                write!(f, "ends_at ({end}) must be >= starts_at ({start})")
            }
        }
    }
}

impl Error for SelectionError {}

#[cfg(test)]
mod tests {
    use super::{DateRangeSelection, SelectionError};
    use crate::model::day::CalendarDay;

    fn day(value: &str) -> CalendarDay {
        CalendarDay::parse_iso(value).expect("valid iso day")
    }

    #[test]
    fn first_pick_sets_start_only() {
        let next = DateRangeSelection::empty().select_day(day("2024-03-10"));
        assert_eq!(next.starts_at(), Some(day("2024-03-10")));
        assert_eq!(next.ends_at(), None);
        assert_eq!(next.day_span(), 1);
    }

    #[test]
    fn earlier_second_pick_swaps() {
        let next = DateRangeSelection::empty()
            .select_day(day("2024-03-15"))
            .select_day(day("2024-03-10"));
        assert_eq!(next.bounds(), Some((day("2024-03-10"), day("2024-03-15"))));
    }

    #[test]
    fn same_day_twice_is_one_day_trip() {
        let next = DateRangeSelection::empty()
            .select_day(day("2024-03-10"))
            .select_day(day("2024-03-10"));
        assert_eq!(next.bounds(), Some((day("2024-03-10"), day("2024-03-10"))));
        assert_eq!(next.day_span(), 1);
    }

    #[test]
    fn from_parts_rejects_invalid_shapes() {
        assert_eq!(
            DateRangeSelection::from_parts(None, Some(day("2024-03-10"))).unwrap_err(),
            SelectionError::EndWithoutStart(day("2024-03-10"))
        );
        let err = DateRangeSelection::from_parts(Some(day("2024-03-15")), Some(day("2024-03-10")))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "ends_at (2024-03-10) must be >= starts_at (2024-03-15)"
        );
    }
}
