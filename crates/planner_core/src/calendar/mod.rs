//! Calendar picker engine.
//!
//! # Responsibility
//! - Advance the date range selection on each tapped day.
//! - Derive calendar marks and display text from a selection.
//!
//! # Invariants
//! - Derived values are recomputed from the selection, never cached.

pub mod format;
pub mod marks;
pub mod selection;
