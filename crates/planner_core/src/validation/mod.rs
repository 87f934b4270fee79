//! Input validation shared by flow guards, invites and detail forms.
//!
//! # Responsibility
//! - Provide the email, URL and destination format checks.
//! - Provide guards for the link and attendance confirmation forms.

pub mod forms;
pub mod input;
