//! Core state logic for the plann.er trip planning app.
//! This crate is the single source of truth for form and selection invariants.

pub mod calendar;
pub mod flow;
pub mod invite;
pub mod locale;
pub mod logging;
pub mod model;
pub mod service;
pub mod validation;

pub use calendar::format::{format_range, trip_summary};
pub use calendar::marks::{marked_dates, MarkStyle, MarkedDates};
pub use calendar::selection::{DateRangeSelection, SelectionError};
pub use flow::controller::{can_submit_update, FlowController, FlowError, FlowRules, StepOutcome};
pub use flow::submission::{track, AlreadyInFlight, Submission};
pub use invite::invite_set::{InviteRejection, InviteSet};
pub use locale::{Locale, LocaleError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::day::{CalendarDay, DayParseError, ShortLabel};
pub use model::trip::{ActiveOverlay, FlowMode, TripForm, TripStep};
pub use service::gateway::{GatewayError, GatewayResult, TripGateway};
pub use service::request::{
    ConfirmParticipantRequest, CreateLinkRequest, CreateTripRequest, ParticipantId, TripId,
    UpdateTripRequest,
};
pub use service::trip_planner::{PlannerError, TripPlanner};
pub use validation::forms::{LinkFormError, ParticipantError};
pub use validation::input::{is_valid_email, is_valid_url};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
