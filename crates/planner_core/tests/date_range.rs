use planner_core::{format_range, marked_dates, CalendarDay, DateRangeSelection, Locale, MarkStyle};

fn day(value: &str) -> CalendarDay {
    CalendarDay::parse_iso(value).unwrap()
}

fn pick_all(days: &[CalendarDay]) -> DateRangeSelection {
    days.iter()
        .fold(DateRangeSelection::empty(), |selection, picked| {
            selection.select_day(*picked)
        })
}

fn sample_days() -> Vec<CalendarDay> {
    [
        "2023-12-30",
        "2023-12-31",
        "2024-01-01",
        "2024-02-28",
        "2024-02-29",
        "2024-03-01",
        "2024-03-10",
    ]
    .iter()
    .map(|value| day(value))
    .collect()
}

#[test]
fn endpoints_stay_ordered_for_every_pick_sequence() {
    let days = sample_days();
    for a in &days {
        for b in &days {
            for c in &days {
                for d in &days {
                    let mut selection = DateRangeSelection::empty();
                    for picked in [*a, *b, *c, *d] {
                        selection = selection.select_day(picked);
                        if let Some((start, end)) = selection.bounds() {
                            assert!(start <= end, "{start} > {end} after {a},{b},{c},{d}");
                        }
                        assert!(selection.ends_at().is_none() || selection.starts_at().is_some());
                    }
                }
            }
        }
    }
}

#[test]
fn final_pair_is_order_independent() {
    let days = sample_days();
    for a in &days {
        for b in &days {
            if a == b {
                continue;
            }
            assert_eq!(pick_all(&[*a, *b]), pick_all(&[*b, *a]));
        }
    }
}

#[test]
fn mark_count_matches_inclusive_span() {
    let days = sample_days();
    for a in &days {
        assert_eq!(marked_dates(&pick_all(&[*a])).len(), 1);
        for b in &days {
            let selection = pick_all(&[*a, *b]);
            let (start, end) = selection.bounds().unwrap();
            let expected = start.days_until(end) as usize + 1;
            assert_eq!(marked_dates(&selection).len(), expected);
            assert_eq!(selection.day_span(), expected);
        }
    }
}

#[test]
fn completed_range_resets_on_next_pick() {
    let first = DateRangeSelection::empty().select_day(day("2024-03-10"));
    assert_eq!(first.starts_at(), Some(day("2024-03-10")));
    assert_eq!(first.ends_at(), None);

    let complete = first.select_day(day("2024-03-12"));
    assert!(complete.is_complete());

    let reset = complete.select_day(day("2024-03-20"));
    assert_eq!(reset.starts_at(), Some(day("2024-03-20")));
    assert_eq!(reset.ends_at(), None);

    let reset_earlier = complete.select_day(day("2024-03-01"));
    assert_eq!(reset_earlier.starts_at(), Some(day("2024-03-01")));
    assert_eq!(reset_earlier.ends_at(), None);
}

#[test]
fn one_day_range_is_marked_single() {
    let selection = pick_all(&[day("2024-03-10"), day("2024-03-10")]);
    let marks = marked_dates(&selection);
    assert_eq!(marks.len(), 1);
    assert_eq!(marks["2024-03-10"], MarkStyle::Single);
}

#[test]
fn two_day_range_has_start_and_end_only() {
    let selection = pick_all(&[day("2023-12-31"), day("2024-01-01")]);
    let marks = marked_dates(&selection);
    assert_eq!(marks["2023-12-31"], MarkStyle::RangeStart);
    assert_eq!(marks["2024-01-01"], MarkStyle::RangeEnd);
    assert_eq!(marks.len(), 2);
}

#[test]
fn picking_tenth_then_fifteenth_marks_six_days_and_formats_label() {
    let selection = pick_all(&[day("2024-03-10"), day("2024-03-15")]);
    assert_eq!(
        selection.bounds(),
        Some((day("2024-03-10"), day("2024-03-15")))
    );

    let marks = marked_dates(&selection);
    assert_eq!(marks.len(), 6);
    assert_eq!(marks["2024-03-10"], MarkStyle::RangeStart);
    for middle in ["2024-03-11", "2024-03-12", "2024-03-13", "2024-03-14"] {
        assert_eq!(marks[middle], MarkStyle::RangeMiddle);
    }
    assert_eq!(marks["2024-03-15"], MarkStyle::RangeEnd);

    assert_eq!(format_range(&selection, Locale::PtBr), "10 - 15 de mar");
    assert_eq!(format_range(&selection, Locale::EnUs), "10 - 15 Mar");
}
