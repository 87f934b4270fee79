//! Payloads sent to the external trip, participant and link service.
//!
//! # Invariants
//! - Payloads are only built from state that passed the matching guard.
//! - Dates are RFC 3339 instants at UTC midnight of the selected day.
//! - Field names match the remote API (`participantId`, `tripId`).

use crate::flow::controller::{check_trip_details, check_update, FlowError, FlowRules};
use crate::invite::invite_set::InviteSet;
use crate::model::trip::TripForm;
use crate::validation::forms::{
    validate_link_form, validate_participant_confirmation, LinkFormError, ParticipantError,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Remote trip identifier.
pub type TripId = Uuid;
/// Remote participant identifier.
pub type ParticipantId = Uuid;

/// `POST /trips` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTripRequest {
    pub destination: String,
    pub starts_at: String,
    pub ends_at: String,
    pub emails_to_invite: Vec<String>,
}

impl CreateTripRequest {
    /// Builds the body from wizard state after running the wizard guard.
    pub fn from_form(
        form: &TripForm,
        invites: &InviteSet,
        rules: FlowRules,
    ) -> Result<Self, FlowError> {
        check_trip_details(form, rules)?;
        let (starts_at, ends_at) = form.dates.bounds().ok_or(FlowError::IncompleteDateRange)?;
        Ok(Self {
            destination: form.destination.trim().to_string(),
            starts_at: starts_at.to_instant(),
            ends_at: ends_at.to_instant(),
            emails_to_invite: invites.to_vec(),
        })
    }
}

/// `PUT /trips/{id}` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTripRequest {
    pub id: TripId,
    pub destination: String,
    pub starts_at: String,
    pub ends_at: String,
}

impl UpdateTripRequest {
    /// Builds the body from edit-screen state after running the update guard.
    pub fn from_form(id: TripId, form: &TripForm) -> Result<Self, FlowError> {
        check_update(form.destination.as_str(), &form.dates)?;
        let (starts_at, ends_at) = form.dates.bounds().ok_or(FlowError::IncompleteDateRange)?;
        Ok(Self {
            id,
            destination: form.destination.trim().to_string(),
            starts_at: starts_at.to_instant(),
            ends_at: ends_at.to_instant(),
        })
    }
}

/// `PATCH /participants/{id}/confirm` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmParticipantRequest {
    #[serde(rename = "participantId")]
    pub participant_id: ParticipantId,
    pub name: String,
    pub email: String,
}

impl ConfirmParticipantRequest {
    pub fn new(
        participant_id: ParticipantId,
        name: &str,
        email: &str,
    ) -> Result<Self, ParticipantError> {
        let input = validate_participant_confirmation(name, email)?;
        Ok(Self {
            participant_id,
            name: input.name,
            email: input.email,
        })
    }
}

/// `POST /trips/{tripId}/links` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLinkRequest {
    #[serde(rename = "tripId")]
    pub trip_id: TripId,
    pub title: String,
    pub url: String,
}

impl CreateLinkRequest {
    pub fn new(trip_id: TripId, title: &str, url: &str) -> Result<Self, LinkFormError> {
        let input = validate_link_form(title, url)?;
        Ok(Self {
            trip_id,
            title: input.title,
            url: input.url,
        })
    }
}
