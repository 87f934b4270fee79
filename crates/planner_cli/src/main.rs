//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `planner_core` linkage.
//! - Print a sample calendar selection, deterministic for a given input.
//!
//! Usage: `planner_cli [start yyyy-mm-dd] [end yyyy-mm-dd]`

use planner_core::{format_range, marked_dates, CalendarDay, DateRangeSelection, Locale};

fn main() {
    println!("planner_core ping={}", planner_core::ping());
    println!("planner_core version={}", planner_core::core_version());

    let args: Vec<String> = std::env::args().skip(1).take(2).collect();
    let mut selection = DateRangeSelection::empty();
    for raw in &args {
        match CalendarDay::parse_iso(raw) {
            Ok(day) => selection = selection.select_day(day),
            Err(err) => {
                eprintln!("planner_cli: {err}");
                std::process::exit(2);
            }
        }
    }
    if selection.is_empty() {
        return;
    }

    println!("range text={}", format_range(&selection, Locale::default()));
    for (date, style) in marked_dates(&selection) {
        println!("mark {date} {}", style.as_str());
    }
}
