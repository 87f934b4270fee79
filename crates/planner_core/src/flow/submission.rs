//! In-flight flag for caller-driven submissions.
//!
//! The flag is raised before the external call starts and lowered once the
//! call has completed, whether it succeeded or failed. A second submit while
//! one is in flight is rejected.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Loading state of one submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    InFlight,
}

/// A submit was requested while one is already running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyInFlight;

impl Display for AlreadyInFlight {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "a submission is already in flight")
    }
}

impl Error for AlreadyInFlight {}

impl Submission {
    /// `Idle -> InFlight`; call before starting the external request.
    pub fn begin(self) -> Result<Self, AlreadyInFlight> {
        match self {
            Self::Idle => Ok(Self::InFlight),
            Self::InFlight => Err(AlreadyInFlight),
        }
    }

    /// Back to `Idle`; call after the request completes with any outcome.
    pub fn finish(self) -> Self {
        Self::Idle
    }

    /// Drives the loading indicator.
    pub fn is_in_flight(self) -> bool {
        matches!(self, Self::InFlight)
    }
}

/// Runs `call` with the flag raised and lowers it afterwards.
///
/// `call` receives the in-flight state. The flag is `Idle` again when this
/// returns, for both `Ok` and `Err`.
pub fn track<T, E, F>(state: &mut Submission, call: F) -> Result<T, E>
where
    E: From<AlreadyInFlight>,
    F: FnOnce(Submission) -> Result<T, E>,
{
    *state = state.begin()?;
    let result = call(*state);
    *state = state.finish();
    result
}
