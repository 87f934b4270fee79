//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose trip form transitions to Dart as plain strings and records.
//! - Keep error semantics simple: `ok` flag plus a message.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Dates cross the boundary as ISO `yyyy-mm-dd` strings.
//! - Every call is a pure transition; Dart owns the state between calls.

use log::debug;
use planner_core::validation::forms::{validate_link_form, validate_participant_confirmation};
use planner_core::{
    can_submit_update as can_submit_update_inner, core_version as core_version_inner,
    format_range, init_logging as init_logging_inner, marked_dates, ping as ping_inner,
    trip_summary, ActiveOverlay, CalendarDay, CreateLinkRequest, CreateTripRequest,
    DateRangeSelection, FlowController, FlowRules, InviteRejection, InviteSet, Locale, StepOutcome,
    TripForm, TripStep, UpdateTripRequest,
};
use std::sync::OnceLock;
use uuid::Uuid;

const LOCALE_ENV: &str = "PLANNER_LOCALE";
static ACTIVE_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One calendar mark for the Dart calendar widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMark {
    /// ISO date key.
    pub date: String,
    /// `single|range_start|range_middle|range_end`.
    pub style: String,
}

/// Calendar picker state after one tap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarResponse {
    pub ok: bool,
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
    /// Marks in calendar order.
    pub marks: Vec<CalendarMark>,
    /// Text for the "when" field.
    pub display_text: String,
    pub message: String,
}

/// Applies one calendar tap to the current selection.
///
/// # FFI contract
/// - On invalid input the current selection is echoed back with `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_select_day(
    starts_at: Option<String>,
    ends_at: Option<String>,
    picked: String,
) -> CalendarResponse {
    let current = match parse_selection(starts_at.as_deref(), ends_at.as_deref()) {
        Ok(selection) => selection,
        Err(message) => return calendar_failure(starts_at, ends_at, message),
    };
    let picked = match CalendarDay::parse_iso(picked.as_str()) {
        Ok(day) => day,
        Err(err) => {
            let message = format!("calendar_select_day failed: {err}");
            return calendar_failure(starts_at, ends_at, message);
        }
    };
    to_calendar_response(&current.select_day(picked))
}

/// Guest list response for invite add/remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteResponse {
    pub ok: bool,
    /// Emails after the operation; unchanged on failure.
    pub emails: Vec<String>,
    /// `invalid_format|duplicate` on rejection, empty otherwise.
    pub reason: String,
    pub message: String,
}

/// Adds `raw_email` to the guest list.
#[flutter_rust_bridge::frb(sync)]
pub fn invite_add(emails: Vec<String>, raw_email: String) -> InviteResponse {
    let current = match InviteSet::try_from_emails(&emails) {
        Ok(set) => set,
        Err(err) => {
            let message = format!("invite_add failed: {err}");
            return invite_failure(emails, "invalid_state", message);
        }
    };
    match current.add(raw_email.as_str()) {
        Ok(next) => InviteResponse {
            ok: true,
            message: format!("{} guest(s) invited.", next.len()),
            emails: next.to_vec(),
            reason: String::new(),
        },
        Err(err) => {
            let reason = match err {
                InviteRejection::InvalidFormat(_) => "invalid_format",
                InviteRejection::Duplicate(_) => "duplicate",
            };
            invite_failure(emails, reason, err.to_string())
        }
    }
}

/// Removes `email` from the guest list; missing values are not an error.
#[flutter_rust_bridge::frb(sync)]
pub fn invite_remove(emails: Vec<String>, email: String) -> InviteResponse {
    match InviteSet::try_from_emails(&emails) {
        Ok(set) => {
            let next = set.remove(email.as_str());
            InviteResponse {
                ok: true,
                message: format!("{} guest(s) invited.", next.len()),
                emails: next.to_vec(),
                reason: String::new(),
            }
        }
        Err(err) => {
            let message = format!("invite_remove failed: {err}");
            invite_failure(emails, "invalid_state", message)
        }
    }
}

/// Wizard state after the continue button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowResponse {
    pub ok: bool,
    /// `details|invite_guests`.
    pub step: String,
    pub ready_to_submit: bool,
    /// `empty_or_short_destination|incomplete_date_range` on rejection.
    pub reason: String,
    pub message: String,
}

/// Runs the creation wizard's continue action from `step`.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_advance(
    step: String,
    destination: String,
    starts_at: Option<String>,
    ends_at: Option<String>,
) -> FlowResponse {
    let failure = |reason: &str, message: String| FlowResponse {
        ok: false,
        step: step.clone(),
        ready_to_submit: false,
        reason: reason.to_string(),
        message,
    };

    let current = match TripStep::parse(step.as_str()) {
        Ok(current) => current,
        Err(err) => return failure("invalid_state", format!("flow_advance failed: {err}")),
    };
    let dates = match parse_selection(starts_at.as_deref(), ends_at.as_deref()) {
        Ok(dates) => dates,
        Err(message) => return failure("invalid_state", message),
    };

    let form = TripForm::new(destination, dates);
    match FlowController::create_at(current).advance(&form) {
        Ok((next, outcome)) => FlowResponse {
            ok: true,
            step: next.step().unwrap_or(current).as_str().to_string(),
            ready_to_submit: outcome == StepOutcome::ReadyToSubmit,
            reason: String::new(),
            message: String::new(),
        },
        Err(err) => failure(err.code(), err.to_string()),
    }
}

/// Update guard of the trip edit modal.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_can_submit_update(
    destination: String,
    starts_at: Option<String>,
    ends_at: Option<String>,
) -> bool {
    parse_selection(starts_at.as_deref(), ends_at.as_deref())
        .map(|dates| can_submit_update_inner(destination.as_str(), &dates))
        .unwrap_or(false)
}

/// Validates the new-link form; empty string means valid.
#[flutter_rust_bridge::frb(sync)]
pub fn link_form_check(title: String, url: String) -> String {
    match validate_link_form(title.as_str(), url.as_str()) {
        Ok(_) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Validates the attendance form; empty string means valid.
#[flutter_rust_bridge::frb(sync)]
pub fn participant_form_check(name: String, email: String) -> String {
    match validate_participant_confirmation(name.as_str(), email.as_str()) {
        Ok(_) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Overlay state after an open or close request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayResponse {
    pub ok: bool,
    /// `none|calendar_picker|guest_picker|update_trip_form|confirm_attendance|new_link_form`.
    pub overlay: String,
    pub message: String,
}

/// Shows `requested`, replacing the `current` overlay.
///
/// # FFI contract
/// - On unknown overlay names `current` is echoed back with `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_open_overlay(current: String, requested: String) -> OverlayResponse {
    let result = parse_overlay_controller(current.as_str()).and_then(|controller| {
        ActiveOverlay::parse(requested.as_str())
            .map(|overlay| controller.open(overlay))
            .map_err(|err| err.to_string())
    });
    to_overlay_response("flow_open_overlay", current, result)
}

/// Closes the `current` overlay.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_close_overlay(current: String) -> OverlayResponse {
    let result = parse_overlay_controller(current.as_str()).map(|controller| controller.close());
    to_overlay_response("flow_close_overlay", current, result)
}

/// Header text for a stored trip, from RFC 3339 `starts_at`/`ends_at`.
///
/// Returns the trimmed destination alone when dates cannot be read.
#[flutter_rust_bridge::frb(sync)]
pub fn trip_summary_text(destination: String, starts_at: String, ends_at: String) -> String {
    match (
        CalendarDay::parse_instant(starts_at.as_str()),
        CalendarDay::parse_instant(ends_at.as_str()),
    ) {
        (Ok(start), Ok(end)) => trip_summary(destination.as_str(), start, end, active_locale()),
        _ => destination.trim().to_string(),
    }
}

/// JSON payload response for trip create/update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadResponse {
    pub ok: bool,
    pub json: String,
    pub message: String,
}

/// Builds the create-trip JSON body from wizard state.
#[flutter_rust_bridge::frb(sync)]
pub fn create_trip_payload(
    destination: String,
    starts_at: Option<String>,
    ends_at: Option<String>,
    emails: Vec<String>,
) -> PayloadResponse {
    let result = parse_selection(starts_at.as_deref(), ends_at.as_deref())
        .and_then(|dates| {
            let invites = InviteSet::try_from_emails(&emails).map_err(|err| err.to_string())?;
            CreateTripRequest::from_form(
                &TripForm::new(destination, dates),
                &invites,
                FlowRules::default(),
            )
            .map_err(|err| err.to_string())
        })
        .and_then(|request| serde_json::to_string(&request).map_err(|err| err.to_string()));
    to_payload_response("create_trip_payload", result)
}

/// Builds the update-trip JSON body for trip `id`.
#[flutter_rust_bridge::frb(sync)]
pub fn update_trip_payload(
    id: String,
    destination: String,
    starts_at: Option<String>,
    ends_at: Option<String>,
) -> PayloadResponse {
    let result = Uuid::parse_str(id.trim())
        .map_err(|err| format!("invalid trip id: {err}"))
        .and_then(|trip_id| {
            let dates = parse_selection(starts_at.as_deref(), ends_at.as_deref())?;
            UpdateTripRequest::from_form(trip_id, &TripForm::new(destination, dates))
                .map_err(|err| err.to_string())
        })
        .and_then(|request| serde_json::to_string(&request).map_err(|err| err.to_string()));
    to_payload_response("update_trip_payload", result)
}

/// Builds the new-link JSON body for trip `trip_id`.
#[flutter_rust_bridge::frb(sync)]
pub fn create_link_payload(trip_id: String, title: String, url: String) -> PayloadResponse {
    let result = Uuid::parse_str(trip_id.trim())
        .map_err(|err| format!("invalid trip id: {err}"))
        .and_then(|trip_id| {
            CreateLinkRequest::new(trip_id, title.as_str(), url.as_str())
                .map_err(|err| err.to_string())
        })
        .and_then(|request| serde_json::to_string(&request).map_err(|err| err.to_string()));
    to_payload_response("create_link_payload", result)
}

fn active_locale() -> Locale {
    *ACTIVE_LOCALE.get_or_init(|| {
        std::env::var(LOCALE_ENV)
            .ok()
            .and_then(|raw| Locale::parse(raw.as_str()).ok())
            .unwrap_or_default()
    })
}

fn parse_selection(
    starts_at: Option<&str>,
    ends_at: Option<&str>,
) -> Result<DateRangeSelection, String> {
    let parse = |value: Option<&str>| -> Result<Option<CalendarDay>, String> {
        match value.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => CalendarDay::parse_iso(raw)
                .map(Some)
                .map_err(|err| err.to_string()),
            None => Ok(None),
        }
    };
    DateRangeSelection::from_parts(parse(starts_at)?, parse(ends_at)?)
        .map_err(|err| err.to_string())
}

fn parse_overlay_controller(current: &str) -> Result<FlowController, String> {
    // Overlay switching is the same in both modes.
    ActiveOverlay::parse(current)
        .map(|overlay| FlowController::edit().open(overlay))
        .map_err(|err| err.to_string())
}

fn to_overlay_response(
    operation: &str,
    current: String,
    result: Result<FlowController, String>,
) -> OverlayResponse {
    match result {
        Ok(controller) => OverlayResponse {
            ok: true,
            overlay: controller.overlay().as_str().to_string(),
            message: String::new(),
        },
        Err(err) => {
            debug!("event={operation} module=ffi status=rejected");
            OverlayResponse {
                ok: false,
                overlay: current,
                message: format!("{operation} failed: {err}"),
            }
        }
    }
}

fn to_calendar_response(selection: &DateRangeSelection) -> CalendarResponse {
    CalendarResponse {
        ok: true,
        starts_at: selection.starts_at().map(CalendarDay::to_iso),
        ends_at: selection.ends_at().map(CalendarDay::to_iso),
        marks: marked_dates(selection)
            .into_iter()
            .map(|(date, style)| CalendarMark {
                date,
                style: style.as_str().to_string(),
            })
            .collect(),
        display_text: format_range(selection, active_locale()),
        message: String::new(),
    }
}

fn calendar_failure(
    starts_at: Option<String>,
    ends_at: Option<String>,
    message: String,
) -> CalendarResponse {
    debug!("event=calendar_select_day module=ffi status=rejected");
    CalendarResponse {
        ok: false,
        starts_at,
        ends_at,
        marks: Vec::new(),
        display_text: String::new(),
        message,
    }
}

fn invite_failure(emails: Vec<String>, reason: &str, message: String) -> InviteResponse {
    debug!("event=invite_update module=ffi status=rejected reason={reason}");
    InviteResponse {
        ok: false,
        emails,
        reason: reason.to_string(),
        message,
    }
}

fn to_payload_response(operation: &str, result: Result<String, String>) -> PayloadResponse {
    match result {
        Ok(json) => PayloadResponse {
            ok: true,
            json,
            message: String::new(),
        },
        Err(err) => {
            debug!("event={operation} module=ffi status=rejected");
            PayloadResponse {
                ok: false,
                json: String::new(),
                message: format!("{operation} failed: {err}"),
            }
        }
    }
}
