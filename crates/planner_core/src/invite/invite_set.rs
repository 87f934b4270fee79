//! Ordered set of guest emails to invite.
//!
//! # Responsibility
//! - Normalize raw input into canonical email form.
//! - Reject malformed and duplicate addresses with distinct reasons.
//!
//! # Invariants
//! - Stored values are trimmed, lower-cased and pass `is_valid_email`.
//! - No two stored values are equal.
//! - Insertion order is display order.
//! - `add`/`remove` return a new set and never touch the receiver.

use crate::validation::input::is_valid_email;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validated, de-duplicated guest email list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct InviteSet {
    emails: Vec<String>,
}

/// Why an email was not added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InviteRejection {
    /// Normalized value failed the email shape check.
    InvalidFormat(String),
    /// Normalized value is already in the set.
    Duplicate(String),
}

impl Display for InviteRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(value) => write!(f, "invalid email: `{value}`"),
            Self::Duplicate(value) => write!(f, "email already invited: `{value}`"),
        }
    }
}

impl Error for InviteRejection {}

/// Canonical email form used for storage and comparison.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl InviteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a set from previously accepted emails, in order.
    ///
    /// Fails on the first value `add` would reject.
    pub fn try_from_emails<I, S>(emails: I) -> Result<Self, InviteRejection>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        emails
            .into_iter()
            .try_fold(Self::new(), |set, email| set.add(email.as_ref()))
    }

    /// Returns a new set with `raw` appended.
    ///
    /// # Errors
    /// - `InvalidFormat` when the normalized value is not an email.
    /// - `Duplicate` when the normalized value is already present.
    pub fn add(&self, raw: &str) -> Result<Self, InviteRejection> {
        let email = normalize_email(raw);
        if !is_valid_email(email.as_str()) {
            return Err(InviteRejection::InvalidFormat(email));
        }
        if self.emails.contains(&email) {
            return Err(InviteRejection::Duplicate(email));
        }
        let mut emails = self.emails.clone();
        emails.push(email);
        Ok(Self { emails })
    }

    /// Returns a new set without `email`; absent values are a no-op.
    pub fn remove(&self, email: &str) -> Self {
        let target = normalize_email(email);
        Self {
            emails: self
                .emails
                .iter()
                .filter(|value| **value != target)
                .cloned()
                .collect(),
        }
    }

    /// Case-insensitive membership check.
    pub fn contains(&self, email: &str) -> bool {
        let target = normalize_email(email);
        self.emails.iter().any(|value| *value == target)
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.emails.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.emails
    }

    /// Owned copy for request payloads.
    pub fn to_vec(&self) -> Vec<String> {
        self.emails.clone()
    }
}
