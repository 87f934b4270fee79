//! Trip submission use-cases.
//!
//! # Responsibility
//! - Run the matching guard, build the payload and forward it to the gateway.
//! - Keep network failures apart from validation failures.
//!
//! # Invariants
//! - Screen state is only borrowed immutably; a failed call cannot alter it.
//! - Logs carry counts and outcome codes, never emails or destinations.

use crate::flow::controller::{FlowController, FlowError, StepOutcome};
use crate::flow::submission::AlreadyInFlight;
use crate::invite::invite_set::InviteSet;
use crate::model::trip::{FlowMode, TripForm, TripStep};
use crate::service::gateway::{GatewayError, TripGateway};
use crate::service::request::{
    ConfirmParticipantRequest, CreateLinkRequest, CreateTripRequest, ParticipantId, TripId,
    UpdateTripRequest,
};
use crate::validation::forms::{LinkFormError, ParticipantError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Service error for trip submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    /// Destination/date guard failed.
    Flow(FlowError),
    /// Attendance form failed validation.
    Participant(ParticipantError),
    /// Link form failed validation.
    Link(LinkFormError),
    /// Controller belongs to the other screen.
    WrongMode(FlowMode),
    /// Wizard has not reached its final step.
    StepNotFinal(TripStep),
    /// Another submission is running.
    Busy(AlreadyInFlight),
    /// Remote service or transport failure.
    Network(GatewayError),
}

impl PlannerError {
    /// Whether the failure came from the remote service rather than input.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl Display for PlannerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flow(err) => write!(f, "{err}"),
            Self::Participant(err) => write!(f, "{err}"),
            Self::Link(err) => write!(f, "{err}"),
            Self::WrongMode(mode) => write!(f, "operation not available in {mode:?} mode"),
            Self::StepNotFinal(step) => {
                write!(f, "trip cannot be submitted from step `{}`", step.as_str())
            }
            Self::Busy(err) => write!(f, "{err}"),
            Self::Network(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PlannerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Flow(err) => Some(err),
            Self::Participant(err) => Some(err),
            Self::Link(err) => Some(err),
            Self::Busy(err) => Some(err),
            Self::Network(err) => Some(err),
            Self::WrongMode(_) | Self::StepNotFinal(_) => None,
        }
    }
}

impl From<FlowError> for PlannerError {
    fn from(value: FlowError) -> Self {
        Self::Flow(value)
    }
}

impl From<ParticipantError> for PlannerError {
    fn from(value: ParticipantError) -> Self {
        Self::Participant(value)
    }
}

impl From<LinkFormError> for PlannerError {
    fn from(value: LinkFormError) -> Self {
        Self::Link(value)
    }
}

impl From<AlreadyInFlight> for PlannerError {
    fn from(value: AlreadyInFlight) -> Self {
        Self::Busy(value)
    }
}

impl From<GatewayError> for PlannerError {
    fn from(value: GatewayError) -> Self {
        Self::Network(value)
    }
}

/// Submission facade over a gateway implementation.
///
/// Guard thresholds come from the submitting controller, so the planner
/// accepts exactly what the wizard accepted.
pub struct TripPlanner<G: TripGateway> {
    gateway: G,
}

impl<G: TripGateway> TripPlanner<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Creates the trip once the wizard is on its final step.
    ///
    /// # Contract
    /// - Controller must be in create mode at `TripStep::InviteGuests`.
    /// - Guards run again against `form`, with the controller's rules, before
    ///   anything is sent.
    pub fn submit_create(
        &self,
        controller: &FlowController,
        form: &TripForm,
        invites: &InviteSet,
    ) -> Result<TripId, PlannerError> {
        if controller.mode() != FlowMode::Create {
            return Err(PlannerError::WrongMode(controller.mode()));
        }
        match controller.advance(form)? {
            (_, StepOutcome::ReadyToSubmit) => {}
            (_, StepOutcome::MovedTo(_)) => {
                return Err(PlannerError::StepNotFinal(
                    controller.step().unwrap_or(TripStep::Details),
                ));
            }
        }

        let request = CreateTripRequest::from_form(form, invites, controller.rules())?;
        match self.gateway.create_trip(&request) {
            Ok(trip_id) => {
                info!(
                    "event=trip_create module=service status=ok invites={}",
                    request.emails_to_invite.len()
                );
                Ok(trip_id)
            }
            Err(err) => {
                warn!("event=trip_create module=service status=error category=network");
                Err(err.into())
            }
        }
    }

    /// Sends the edit-screen form for trip `id`.
    pub fn submit_update(&self, id: TripId, form: &TripForm) -> Result<(), PlannerError> {
        let request = UpdateTripRequest::from_form(id, form)?;
        self.gateway.update_trip(&request).map_err(|err| {
            warn!("event=trip_update module=service status=error category=network");
            PlannerError::from(err)
        })?;
        info!("event=trip_update module=service status=ok");
        Ok(())
    }

    /// Confirms attendance for an invited participant.
    pub fn confirm_attendance(
        &self,
        participant_id: ParticipantId,
        name: &str,
        email: &str,
    ) -> Result<(), PlannerError> {
        let request = ConfirmParticipantRequest::new(participant_id, name, email)?;
        self.gateway.confirm_participant(&request).map_err(|err| {
            warn!("event=participant_confirm module=service status=error category=network");
            PlannerError::from(err)
        })?;
        info!("event=participant_confirm module=service status=ok");
        Ok(())
    }

    /// Adds an important link to trip `trip_id`.
    pub fn add_link(&self, trip_id: TripId, title: &str, url: &str) -> Result<Uuid, PlannerError> {
        let request = CreateLinkRequest::new(trip_id, title, url)?;
        let link_id = self.gateway.create_link(&request).map_err(|err| {
            warn!("event=link_create module=service status=error category=network");
            PlannerError::from(err)
        })?;
        info!("event=link_create module=service status=ok");
        Ok(link_id)
    }
}
