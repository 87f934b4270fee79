//! Format checks for single text inputs.
//!
//! # Invariants
//! - Checks are pure and never log the checked value.
//! - Callers normalize (trim/lowercase) before calling when they need to.

use once_cell::sync::Lazy;
use regex::Regex;

/// Default minimum destination length in characters.
pub const DEFAULT_MIN_DESTINATION_CHARS: usize = 4;

// One `@`, no whitespace, and a final non-empty domain label after a dot.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@.]+$").expect("valid email regex"));
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://[^\s/$.?#][^\s/?#]*(?:[/?#]\S*)?$").expect("valid url regex")
});

/// Checks the email shape used for guest invites and attendance confirmation.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Checks that `value` is an absolute `http`/`https` URL with a host.
pub fn is_valid_url(value: &str) -> bool {
    URL_RE.is_match(value)
}

/// Why a destination was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationIssue {
    Empty,
    TooShort { min_chars: usize, actual: usize },
}

/// Checks the destination after trimming.
///
/// Length is counted in characters, not bytes.
pub fn check_destination(value: &str, min_chars: usize) -> Result<(), DestinationIssue> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DestinationIssue::Empty);
    }
    let actual = trimmed.chars().count();
    if actual < min_chars {
        return Err(DestinationIssue::TooShort { min_chars, actual });
    }
    Ok(())
}
