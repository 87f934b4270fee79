//! Step and overlay state machine for trip forms.
//!
//! # Responsibility
//! - Gate wizard progression on destination and date guards.
//! - Keep exactly one overlay active on both create and edit screens.
//!
//! # Invariants
//! - `step` is `Some` iff `mode == FlowMode::Create`.
//! - Opening an overlay replaces the previous one.
//! - Transitions return a new controller; the receiver never changes.

use crate::calendar::selection::DateRangeSelection;
use crate::model::trip::{ActiveOverlay, FlowMode, TripForm, TripStep};
use crate::validation::input::{check_destination, DEFAULT_MIN_DESTINATION_CHARS};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Tunable guard thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowRules {
    /// Minimum destination length (trimmed, in characters) for the wizard.
    pub min_destination_chars: usize,
}

impl Default for FlowRules {
    fn default() -> Self {
        Self {
            min_destination_chars: DEFAULT_MIN_DESTINATION_CHARS,
        }
    }
}

/// Guard failure for `advance` and update submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowError {
    /// Destination is blank or below the minimum length.
    EmptyOrShortDestination,
    /// Start or end date is missing.
    IncompleteDateRange,
}

impl FlowError {
    /// Stable machine-readable reason.
    pub fn code(self) -> &'static str {
        match self {
            Self::EmptyOrShortDestination => "empty_or_short_destination",
            Self::IncompleteDateRange => "incomplete_date_range",
        }
    }
}

impl Display for FlowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyOrShortDestination => write!(f, "destination is empty or too short"),
            Self::IncompleteDateRange => write!(f, "trip start and end dates are required"),
        }
    }
}

impl Error for FlowError {}

/// Result of a successful `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The wizard moved to another step.
    MovedTo(TripStep),
    /// All guards pass on the final step; the caller may confirm and submit.
    ReadyToSubmit,
}

/// Flow state owned by one create or edit screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowController {
    mode: FlowMode,
    step: Option<TripStep>,
    overlay: ActiveOverlay,
    rules: FlowRules,
}

impl FlowController {
    /// Creation wizard at `TripStep::Details` with no overlay.
    pub fn create() -> Self {
        Self {
            mode: FlowMode::Create,
            step: Some(TripStep::Details),
            overlay: ActiveOverlay::None,
            rules: FlowRules::default(),
        }
    }

    /// Edit screen with no overlay.
    pub fn edit() -> Self {
        Self {
            mode: FlowMode::Edit,
            step: None,
            overlay: ActiveOverlay::None,
            rules: FlowRules::default(),
        }
    }

    /// Controller for `mode` in its initial state.
    pub fn for_mode(mode: FlowMode) -> Self {
        match mode {
            FlowMode::Create => Self::create(),
            FlowMode::Edit => Self::edit(),
        }
    }

    /// Replaces guard thresholds.
    pub fn with_rules(self, rules: FlowRules) -> Self {
        Self { rules, ..self }
    }

    /// Creation wizard positioned at `step`, e.g. when restoring UI state.
    pub fn create_at(step: TripStep) -> Self {
        Self {
            step: Some(step),
            ..Self::create()
        }
    }

    pub fn mode(&self) -> FlowMode {
        self.mode
    }

    /// Current wizard step; `None` in edit mode.
    pub fn step(&self) -> Option<TripStep> {
        self.step
    }

    pub fn overlay(&self) -> ActiveOverlay {
        self.overlay
    }

    pub fn rules(&self) -> FlowRules {
        self.rules
    }

    /// Whether the destination and calendar fields accept input.
    pub fn dates_editable(&self) -> bool {
        match self.mode {
            FlowMode::Create => self.step == Some(TripStep::Details),
            FlowMode::Edit => true,
        }
    }

    /// Handles the continue/confirm action.
    ///
    /// - Create/Details: guards pass → `MovedTo(InviteGuests)`.
    /// - Create/InviteGuests: guards pass → `ReadyToSubmit`, step unchanged.
    /// - Edit: update guard passes → `ReadyToSubmit`.
    pub fn advance(&self, form: &TripForm) -> Result<(Self, StepOutcome), FlowError> {
        let guard = match self.mode {
            FlowMode::Create => check_trip_details(form, self.rules),
            FlowMode::Edit => check_update(form.destination.as_str(), &form.dates),
        };
        if let Err(err) = guard {
            debug!(
                "event=flow_advance module=flow status=rejected mode={:?} reason={}",
                self.mode,
                err.code()
            );
            return Err(err);
        }

        let (next, outcome) = match self.step {
            Some(TripStep::Details) => (
                Self {
                    step: Some(TripStep::InviteGuests),
                    ..*self
                },
                StepOutcome::MovedTo(TripStep::InviteGuests),
            ),
            Some(TripStep::InviteGuests) | None => (*self, StepOutcome::ReadyToSubmit),
        };
        debug!(
            "event=flow_advance module=flow status=ok mode={:?} outcome={:?}",
            self.mode, outcome
        );
        Ok((next, outcome))
    }

    /// Returns to `Details` so destination and dates can be changed.
    ///
    /// No-op in edit mode.
    pub fn back_to_details(&self) -> Self {
        match self.mode {
            FlowMode::Create => Self {
                step: Some(TripStep::Details),
                ..*self
            },
            FlowMode::Edit => *self,
        }
    }

    /// Shows `overlay`, closing whatever was open.
    pub fn open(&self, overlay: ActiveOverlay) -> Self {
        Self { overlay, ..*self }
    }

    /// Closes the active overlay.
    pub fn close(&self) -> Self {
        self.open(ActiveOverlay::None)
    }

    /// Update guard of the edit screen.
    pub fn can_submit_update(&self, destination: &str, selection: &DateRangeSelection) -> bool {
        can_submit_update(destination, selection)
    }
}

/// Wizard guard: destination long enough, then both dates present.
pub fn check_trip_details(form: &TripForm, rules: FlowRules) -> Result<(), FlowError> {
    check_destination(form.destination.as_str(), rules.min_destination_chars)
        .map_err(|_| FlowError::EmptyOrShortDestination)?;
    check_dates(&form.dates)
}

/// Update guard: destination not blank, then both dates present.
pub fn check_update(destination: &str, selection: &DateRangeSelection) -> Result<(), FlowError> {
    check_destination(destination, 0).map_err(|_| FlowError::EmptyOrShortDestination)?;
    check_dates(selection)
}

/// True iff the edit form may be submitted.
pub fn can_submit_update(destination: &str, selection: &DateRangeSelection) -> bool {
    check_update(destination, selection).is_ok()
}

fn check_dates(selection: &DateRangeSelection) -> Result<(), FlowError> {
    if selection.is_complete() {
        Ok(())
    } else {
        Err(FlowError::IncompleteDateRange)
    }
}
