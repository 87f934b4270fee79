//! Contract for the remote trip service.
//!
//! # Responsibility
//! - Describe the calls core state is submitted through.
//! - Give network failures their own error category.
//!
//! # Invariants
//! - Implementations own transport and retry policy; core never retries.
//! - A gateway call never receives mutable access to screen state.

use crate::service::request::{
    ConfirmParticipantRequest, CreateLinkRequest, CreateTripRequest, TripId, UpdateTripRequest,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failure reported by the remote service or its transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Request did not complete (offline, timeout, TLS, ...).
    Transport(String),
    /// Service answered with a non-success status.
    Rejected { status: u16, message: String },
    /// Service answered with a body the caller could not read.
    InvalidResponse(String),
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "trip service unreachable: {message}"),
            Self::Rejected { status, message } => {
                write!(f, "trip service rejected request ({status}): {message}")
            }
            Self::InvalidResponse(message) => {
                write!(f, "trip service returned invalid response: {message}")
            }
        }
    }
}

impl Error for GatewayError {}

/// Remote trip/participant/link service.
pub trait TripGateway {
    fn create_trip(&self, request: &CreateTripRequest) -> GatewayResult<TripId>;
    fn update_trip(&self, request: &UpdateTripRequest) -> GatewayResult<()>;
    fn confirm_participant(&self, request: &ConfirmParticipantRequest) -> GatewayResult<()>;
    /// Returns the created link id.
    fn create_link(&self, request: &CreateLinkRequest) -> GatewayResult<Uuid>;
}
