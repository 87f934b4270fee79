//! Guards for the small forms on the trip details screen.
//!
//! # Invariants
//! - A guard returns normalized values only when every field passes.

use crate::validation::input::{is_valid_email, is_valid_url};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Link form values after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkInput {
    pub title: String,
    pub url: String,
}

/// Link form rejection (`InvalidUrlOrEmptyTitle` category).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkFormError {
    EmptyTitle,
    InvalidUrl(String),
}

impl Display for LinkFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "link title must not be empty"),
            Self::InvalidUrl(value) => write!(f, "link url is invalid: `{value}`"),
        }
    }
}

impl Error for LinkFormError {}

/// Validates the new-link form. Title is checked before the URL.
pub fn validate_link_form(title: &str, url: &str) -> Result<LinkInput, LinkFormError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(LinkFormError::EmptyTitle);
    }
    let url = url.trim();
    if !is_valid_url(url) {
        return Err(LinkFormError::InvalidUrl(url.to_string()));
    }
    Ok(LinkInput {
        title: title.to_string(),
        url: url.to_string(),
    })
}

/// Attendance confirmation values after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantInput {
    pub name: String,
    /// Trimmed and lower-cased.
    pub email: String,
}

/// Attendance confirmation rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantError {
    EmptyName,
    InvalidFormat(String),
}

impl Display for ParticipantError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "participant name must not be empty"),
            Self::InvalidFormat(value) => write!(f, "participant email is invalid: `{value}`"),
        }
    }
}

impl Error for ParticipantError {}

/// Validates the confirm-attendance form with the invite email check.
pub fn validate_participant_confirmation(
    name: &str,
    email: &str,
) -> Result<ParticipantInput, ParticipantError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ParticipantError::EmptyName);
    }
    let email = email.trim().to_lowercase();
    if !is_valid_email(email.as_str()) {
        return Err(ParticipantError::InvalidFormat(email));
    }
    Ok(ParticipantInput {
        name: name.to_string(),
        email,
    })
}
