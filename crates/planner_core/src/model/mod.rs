//! Domain model for the trip creation and edit screens.
//!
//! # Responsibility
//! - Define the value types that screen state is built from.
//!
//! # Invariants
//! - Every value here is owned, cloneable and free of I/O handles.

pub mod day;
pub mod trip;
