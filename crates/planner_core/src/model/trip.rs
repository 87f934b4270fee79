//! Trip form state shared by the creation wizard and the edit screen.
//!
//! # Invariants
//! - Exactly one `ActiveOverlay` value is active at any time; `None` is a value.
//! - `TripStep` only has meaning in `FlowMode::Create`.

use crate::calendar::selection::DateRangeSelection;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Which screen drives the flow controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowMode {
    /// New trip wizard with a step machine.
    Create,
    /// Existing trip screen; overlays only.
    Edit,
}

/// Position in the trip creation wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStep {
    /// Destination and dates are editable.
    Details,
    /// Destination and dates are locked; guests can be invited.
    InviteGuests,
}

impl TripStep {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Details => "details",
            Self::InviteGuests => "invite_guests",
        }
    }

    pub fn parse(value: &str) -> Result<Self, UnknownVariant> {
        match value.trim() {
            "details" => Ok(Self::Details),
            "invite_guests" => Ok(Self::InviteGuests),
            other => Err(UnknownVariant {
                kind: "trip step",
                value: other.to_string(),
            }),
        }
    }
}

/// Modal or dialog currently shown on top of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveOverlay {
    #[default]
    None,
    CalendarPicker,
    GuestPicker,
    UpdateTripForm,
    ConfirmAttendance,
    NewLinkForm,
}

impl ActiveOverlay {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::CalendarPicker => "calendar_picker",
            Self::GuestPicker => "guest_picker",
            Self::UpdateTripForm => "update_trip_form",
            Self::ConfirmAttendance => "confirm_attendance",
            Self::NewLinkForm => "new_link_form",
        }
    }

    pub fn parse(value: &str) -> Result<Self, UnknownVariant> {
        match value.trim() {
            "none" => Ok(Self::None),
            "calendar_picker" => Ok(Self::CalendarPicker),
            "guest_picker" => Ok(Self::GuestPicker),
            "update_trip_form" => Ok(Self::UpdateTripForm),
            "confirm_attendance" => Ok(Self::ConfirmAttendance),
            "new_link_form" => Ok(Self::NewLinkForm),
            other => Err(UnknownVariant {
                kind: "overlay",
                value: other.to_string(),
            }),
        }
    }

    /// Whether any overlay is shown.
    pub fn is_open(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Snapshot of the editable trip fields at the moment the user taps continue.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TripForm {
    /// Raw destination text as typed.
    pub destination: String,
    /// Current calendar selection.
    pub dates: DateRangeSelection,
}

impl TripForm {
    pub fn new(destination: impl Into<String>, dates: DateRangeSelection) -> Self {
        Self {
            destination: destination.into(),
            dates,
        }
    }
}

/// Label that does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl Display for UnknownVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {}: `{}`", self.kind, self.value)
    }
}

impl Error for UnknownVariant {}
