//! Flow control for the trip creation wizard and the trip edit screen.
//!
//! # Responsibility
//! - Sequence wizard steps behind destination/date guards.
//! - Enforce a single active overlay.
//! - Define the submit in-flight flag contract.
//!
//! # See also
//! - `crate::service::trip_planner` for the submit orchestration.

pub mod controller;
pub mod submission;
