//! Display text for selected ranges and trip headers.

use crate::calendar::selection::DateRangeSelection;
use crate::locale::Locale;
use crate::model::day::CalendarDay;

/// Destination characters kept in the trip header before `...` is appended.
pub const SUMMARY_DESTINATION_MAX_CHARS: usize = 14;

/// Formats the selection for the "when" field.
///
/// - Nothing selected: empty string.
/// - Start only: `10 de mar`.
/// - Same month: `10 - 15 de mar` (month taken from the end date).
/// - Different months: `28 de fev - 02 de mar`.
pub fn format_range(selection: &DateRangeSelection, locale: Locale) -> String {
    let Some(start) = selection.starts_at() else {
        return String::new();
    };
    let start_label = start.short_label(locale);
    let Some(end) = selection.ends_at() else {
        return locale.day_with_month(&start_label.day, &start_label.month);
    };

    let end_label = end.short_label(locale);
    let end_text = locale.day_with_month(&end_label.day, &end_label.month);
    if start.same_month_as(end) {
        format!("{} - {end_text}", start_label.day)
    } else {
        // Why: sharing the end month would show `28 - 02 de mar` for a
        // February start, pairing the earlier day with the wrong month.
        let start_text = locale.day_with_month(&start_label.day, &start_label.month);
        format!("{start_text} - {end_text}")
    }
}

/// Header line for an existing trip, e.g. `Florianópolis - de 10 a 15 de mar.`
///
/// Destinations longer than `SUMMARY_DESTINATION_MAX_CHARS` are shortened
/// with a trailing `...`.
pub fn trip_summary(
    destination: &str,
    starts_at: CalendarDay,
    ends_at: CalendarDay,
    locale: Locale,
) -> String {
    let trimmed = destination.trim();
    let shown = if trimmed.chars().count() > SUMMARY_DESTINATION_MAX_CHARS {
        let mut short: String = trimmed.chars().take(SUMMARY_DESTINATION_MAX_CHARS).collect();
        short.push_str("...");
        short
    } else {
        trimmed.to_string()
    };
    let start_label = starts_at.short_label(locale);
    let end_label = ends_at.short_label(locale);
    // Header keeps one month (the end date's) even across months; the "when"
    // field uses `format_range` for the unambiguous form.
    locale.trip_summary(&shown, &start_label.day, &end_label.day, &end_label.month)
}
