//! Form session state machine.
//!
//! [`FormSession`] is the presentation-side state for one registration form:
//! raw values, touched fields, per-field errors, the location cascade, and the
//! submission lifecycle. All rules come from an injected
//! [`ValidationEngine`]; the session only decides *when* to run them and
//! *which* results are visible.
//!
//! Submit policy: the submit control stays enabled at all times except while a
//! submission is in flight. A submit attempt with invalid fields surfaces every
//! error at once together with an error count.
//!
//! Confirm-password policy: validated eagerly. Every edit re-evaluates all
//! touched fields, so `confirmPassword` follows `password` keystroke by
//! keystroke once it has been touched.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;

use crate::error::CoreError;
use crate::field::Field;
use crate::form::{FieldInput, FormData, RegistrationPayload};
use crate::submit::{Submitter, TransportError};
use crate::types::Timestamp;
use crate::validation::{password_strength, FieldErrors, PasswordStrength, ValidationEngine};
use crate::wire::{RegisterResponse, RegisteredUser};

/// Seconds a success banner stays visible.
pub const SUCCESS_BANNER_SECS: i64 = 4;

/// Seconds an error banner stays visible.
pub const ERROR_BANNER_SECS: i64 = 6;

pub const MSG_NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";
pub const MSG_DEFAULT_SUCCESS: &str =
    "Your profile has been submitted successfully. Welcome to our community!";
pub const MSG_DEFAULT_REJECTION: &str = "Registration failed. Please check your information.";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("The {0} selector is disabled")]
    SelectorDisabled(Field),

    #[error("{value:?} is not a valid {field} option")]
    UnknownOption { field: Field, value: String },
}

/// Why [`FormSession::begin_submit`] refused to produce a payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("A submission is already in progress")]
    InFlight,

    #[error("{error_count} field(s) need attention")]
    Invalid { error_count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// A form-level message shown above the fields and dismissed automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    pub shown_at: Timestamp,
}

impl Banner {
    fn new(kind: BannerKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: Utc::now(),
        }
    }

    pub fn lifetime(&self) -> chrono::Duration {
        match self.kind {
            BannerKind::Success => chrono::Duration::seconds(SUCCESS_BANNER_SECS),
            BannerKind::Error => chrono::Duration::seconds(ERROR_BANNER_SECS),
        }
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        now >= self.shown_at + self.lifetime()
    }
}

pub struct FormSession {
    engine: Arc<ValidationEngine>,
    values: FormData,
    /// Engine results for touched fields (all fields once submit was attempted).
    errors: FieldErrors,
    /// Errors reported by the backend, cleared per field on the next edit.
    server_errors: FieldErrors,
    touched: BTreeSet<Field>,
    submit_attempted: bool,
    in_flight: bool,
    status: SubmitStatus,
    banner: Option<Banner>,
    registered: Option<RegisteredUser>,
}

impl FormSession {
    pub fn new(engine: Arc<ValidationEngine>) -> Self {
        Self {
            engine,
            values: FormData::default(),
            errors: FieldErrors::new(),
            server_errors: FieldErrors::new(),
            touched: BTreeSet::new(),
            submit_attempted: false,
            in_flight: false,
            status: SubmitStatus::Idle,
            banner: None,
            registered: None,
        }
    }

    // -----------------------------------------------------------------------
    // Read side
    // -----------------------------------------------------------------------

    pub fn values(&self) -> &FormData {
        &self.values
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// User returned by the last successful registration.
    pub fn registered(&self) -> Option<&RegisteredUser> {
        self.registered.as_ref()
    }

    /// The error to display next to a field, if any.
    ///
    /// Engine errors exist only for touched fields (or all fields after a
    /// submit attempt). Backend errors show until the field is edited.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        self.errors
            .get(field)
            .or_else(|| self.server_errors.get(field))
    }

    /// All currently visible errors, engine results taking precedence.
    pub fn visible_errors(&self) -> FieldErrors {
        let mut merged = self.server_errors.clone();
        for (field, msg) in self.errors.iter() {
            merged.insert(field, msg);
        }
        merged
    }

    pub fn error_count(&self) -> usize {
        self.visible_errors().len()
    }

    /// Derived from the current values on every call; never cached.
    pub fn is_valid(&self) -> bool {
        self.server_errors.is_empty() && self.engine.is_form_valid(&self.values)
    }

    pub fn submit_enabled(&self) -> bool {
        !self.in_flight
    }

    pub fn password_strength(&self) -> PasswordStrength {
        password_strength(&self.values.password)
    }

    pub fn available_states(&self) -> &'static [&'static str] {
        self.engine.locations().states_for(&self.values.country)
    }

    pub fn available_cities(&self) -> &'static [&'static str] {
        self.engine.locations().cities_for(&self.values.state)
    }

    pub fn state_enabled(&self) -> bool {
        !self.available_states().is_empty()
    }

    pub fn city_enabled(&self) -> bool {
        !self.available_cities().is_empty()
    }

    /// The banner, unless its display time has elapsed.
    pub fn visible_banner(&self, now: Timestamp) -> Option<&Banner> {
        self.banner.as_ref().filter(|b| !b.is_expired(now))
    }

    // -----------------------------------------------------------------------
    // Edits
    // -----------------------------------------------------------------------

    /// Apply an edit. Location fields go through the cascade.
    pub fn change(
        &mut self,
        field: Field,
        input: impl Into<FieldInput>,
    ) -> Result<(), SessionError> {
        let input = input.into();
        match (field, &input) {
            (Field::Country, FieldInput::Text(code)) => return self.select_country(code),
            (Field::State, FieldInput::Text(name)) => return self.select_state(name),
            (Field::City, FieldInput::Text(name)) => return self.select_city(name),
            _ => {}
        }
        self.values.set(field, input)?;
        self.after_edit(field);
        Ok(())
    }

    /// Focus left a field: its error becomes eligible for display.
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate();
    }

    /// Select a country by code or name. Clears state and city.
    ///
    /// An empty value deselects the country and disables the state selector.
    pub fn select_country(&mut self, code: &str) -> Result<(), SessionError> {
        let code = code.trim();
        let canonical = if code.is_empty() {
            String::new()
        } else {
            self.engine
                .locations()
                .country(code)
                .map(|c| c.code.to_string())
                .ok_or_else(|| SessionError::UnknownOption {
                    field: Field::Country,
                    value: code.to_string(),
                })?
        };

        self.values.country = canonical;
        self.values.state.clear();
        self.values.city.clear();
        tracing::debug!(country = %self.values.country, "Country selected, cascade reset");
        self.after_edit(Field::Country);
        Ok(())
    }

    /// Select a state of the current country. Clears city.
    pub fn select_state(&mut self, name: &str) -> Result<(), SessionError> {
        let canonical = pick_option(Field::State, self.available_states(), name)?;
        self.values.state = canonical;
        self.values.city.clear();
        self.after_edit(Field::State);
        Ok(())
    }

    /// Select a city of the current state.
    pub fn select_city(&mut self, name: &str) -> Result<(), SessionError> {
        let canonical = pick_option(Field::City, self.available_cities(), name)?;
        self.values.city = canonical;
        self.after_edit(Field::City);
        Ok(())
    }

    fn after_edit(&mut self, field: Field) {
        self.touched.insert(field);
        self.server_errors.remove(field);
        self.revalidate();
    }

    /// Recompute engine errors from scratch for every field eligible for
    /// display. Dependent fields (confirm password, phone) follow their
    /// inputs automatically.
    fn revalidate(&mut self) {
        let mut errors = FieldErrors::new();
        for field in Field::ALL {
            if self.submit_attempted || self.touched.contains(&field) {
                errors.set(field, self.engine.validate_field(field, &self.values));
            }
        }
        self.errors = errors;
    }

    // -----------------------------------------------------------------------
    // Submission
    // -----------------------------------------------------------------------

    /// Validate everything and, if the form is valid, mark the submission as
    /// in flight and return the payload to send.
    pub fn begin_submit(&mut self) -> Result<RegistrationPayload, SubmitRejected> {
        if self.in_flight {
            tracing::debug!("Submit ignored, a submission is already in flight");
            return Err(SubmitRejected::InFlight);
        }

        self.submit_attempted = true;
        self.touched.extend(Field::ALL);
        self.server_errors.clear();
        self.errors = self.engine.validate_all(&self.values);

        if !self.engine.is_form_valid(&self.values) {
            let error_count = self.errors.len();
            tracing::debug!(error_count, "Submit blocked by validation errors");
            self.banner = Some(Banner::new(
                BannerKind::Error,
                format!("Please fix the {error_count} highlighted field(s) below."),
            ));
            return Err(SubmitRejected::Invalid { error_count });
        }

        self.in_flight = true;
        self.status = SubmitStatus::Submitting;
        self.banner = None;
        Ok(self.values.to_payload())
    }

    /// Record the outcome of the submission started by
    /// [`begin_submit`](Self::begin_submit).
    ///
    /// Ignored when no submission is in flight.
    pub fn finish_submit(&mut self, outcome: Result<RegisterResponse, TransportError>) {
        if !self.in_flight {
            tracing::debug!("Dropping submission outcome, nothing is in flight");
            return;
        }
        self.in_flight = false;

        match outcome {
            Ok(response) if response.success => {
                tracing::info!(email = %self.values.email, "Registration accepted");
                let message = non_empty_or(response.message, MSG_DEFAULT_SUCCESS);
                self.clear_form();
                self.registered = response.data;
                self.status = SubmitStatus::Succeeded;
                self.banner = Some(Banner::new(BannerKind::Success, message));
            }
            Ok(response) => {
                self.server_errors = response.field_errors();
                tracing::warn!(
                    message = %response.message,
                    field_errors = self.server_errors.len(),
                    "Registration rejected by server"
                );
                self.status = SubmitStatus::Failed;
                self.banner = Some(Banner::new(
                    BannerKind::Error,
                    non_empty_or(response.message, MSG_DEFAULT_REJECTION),
                ));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Registration submission failed");
                self.status = SubmitStatus::Failed;
                self.banner = Some(Banner::new(BannerKind::Error, MSG_NETWORK_ERROR));
            }
        }
    }

    /// Run a full submission through `submitter`.
    pub async fn submit(
        &mut self,
        submitter: &dyn Submitter,
    ) -> Result<SubmitStatus, SubmitRejected> {
        let payload = self.begin_submit()?;
        let outcome = submitter.submit(&payload).await;
        self.finish_submit(outcome);
        Ok(self.status)
    }

    /// Return to a blank form with no banner and idle status.
    ///
    /// Refused while a submission is in flight.
    pub fn reset(&mut self) -> Result<(), SubmitRejected> {
        if self.in_flight {
            tracing::debug!("Reset ignored, a submission is in flight");
            return Err(SubmitRejected::InFlight);
        }
        self.clear_form();
        self.status = SubmitStatus::Idle;
        self.banner = None;
        self.registered = None;
        Ok(())
    }

    fn clear_form(&mut self) {
        self.values = FormData::default();
        self.errors.clear();
        self.server_errors.clear();
        self.touched.clear();
        self.submit_attempted = false;
    }
}

/// Resolve a selector value against its candidate list.
///
/// Empty input deselects. An empty candidate list means the selector is
/// disabled and rejects any non-empty selection.
fn pick_option(field: Field, options: &[&str], value: &str) -> Result<String, SessionError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(String::new());
    }
    if options.is_empty() {
        return Err(SessionError::SelectorDisabled(field));
    }
    options
        .iter()
        .find(|o| o.eq_ignore_ascii_case(value))
        .map(|o| o.to_string())
        .ok_or_else(|| SessionError::UnknownOption {
            field,
            value: value.to_string(),
        })
}

fn non_empty_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
