//! Core use-case services.
//!
//! # Responsibility
//! - Shape payloads for the remote trip service from guarded screen state.
//! - Keep UI/FFI layers decoupled from transport details.

pub mod gateway;
pub mod request;
pub mod trip_planner;
