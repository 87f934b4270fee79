//! Calendar marks derived from a selection.
//!
//! Marks are recomputed on demand and never stored next to the selection.

use crate::calendar::selection::DateRangeSelection;
use crate::model::day::CalendarDay;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Position of one day inside the selected range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkStyle {
    Single,
    RangeStart,
    RangeMiddle,
    RangeEnd,
}

impl MarkStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::RangeStart => "range_start",
            Self::RangeMiddle => "range_middle",
            Self::RangeEnd => "range_end",
        }
    }
}

/// Marks keyed by ISO date; `BTreeMap` keeps keys in calendar order.
pub type MarkedDates = BTreeMap<String, MarkStyle>;

/// Builds the calendar marks for `selection`.
///
/// - Empty selection: no marks.
/// - Start only, or one-day range: one `Single` mark.
/// - Range: every day from start to end inclusive.
pub fn marked_dates(selection: &DateRangeSelection) -> MarkedDates {
    let mut marks = MarkedDates::new();
    let Some(start) = selection.starts_at() else {
        return marks;
    };
    let end = selection.ends_at().unwrap_or(start);
    // Why: a start-only selection and a one-day range both render as one
    // highlighted day, never as a range start without an end.
    if end <= start {
        marks.insert(start.to_iso(), MarkStyle::Single);
        return marks;
    }

    let mut cursor: Option<CalendarDay> = Some(start);
    while let Some(current) = cursor.filter(|day| *day <= end) {
        let style = if current == start {
            MarkStyle::RangeStart
        } else if current == end {
            MarkStyle::RangeEnd
        } else {
            MarkStyle::RangeMiddle
        };
        marks.insert(current.to_iso(), style);
        cursor = current.succ();
    }
    marks
}
