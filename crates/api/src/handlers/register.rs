//! Handler for `POST /api/register`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use signup_core::field::Field;
use signup_core::form::{FormData, RegistrationPayload};
use signup_core::validation::FieldErrors;
use signup_core::wire::{RegisterResponse, RegisteredUser};
use uuid::Uuid;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::store::{StoredUser, MSG_DUPLICATE_EMAIL};

pub const MSG_REGISTERED: &str =
    "Registration successful! Your profile has been submitted successfully.";

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// Validate and store a registration.
///
/// Length caps run first, then the same business rules the form applies.
/// Every violation is reported in `errors[]` keyed by wire field name.
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegistrationPayload>, JsonRejection>,
) -> AppResult<Json<RegisterResponse>> {
    let Json(payload) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let mut errors = length_violations(&payload);
    let form = FormData::from(payload);
    for (field, msg) in state.engine.validate_all(&form).iter() {
        if !errors.contains(field) {
            errors.insert(field, msg);
        }
    }
    if !errors.is_empty() {
        tracing::debug!(error_count = errors.len(), "Registration rejected");
        return Err(AppError::Rejected(errors));
    }

    let email = form.normalized(Field::Email).to_string();
    if state.users.contains_email(&email).await {
        return Err(AppError::BadRequest(MSG_DUPLICATE_EMAIL.into()));
    }

    let password = form.password.clone();
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::InternalError(format!("Hashing task failed: {e}")))?
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let age = form.normalized(Field::Age);
    let user = StoredUser {
        id: Uuid::new_v4(),
        first_name: form.normalized(Field::FirstName).to_string(),
        last_name: form.normalized(Field::LastName).to_string(),
        email,
        phone: form.normalized(Field::Phone).to_string(),
        age: (!age.is_empty()).then(|| age.to_string()),
        gender: form.normalized(Field::Gender).to_string(),
        address: form.normalized(Field::Address).to_string(),
        country: form.normalized(Field::Country).to_string(),
        state: form.normalized(Field::State).to_string(),
        city: form.normalized(Field::City).to_string(),
        password_hash,
        created_at: chrono::Utc::now(),
    };

    let summary = state.users.insert(user).await?;
    tracing::info!(user_id = %summary.id, "User registered");

    Ok(Json(RegisterResponse::success(
        MSG_REGISTERED,
        RegisteredUser {
            id: summary.id.to_string(),
            first_name: summary.first_name,
            last_name: summary.last_name,
            email: summary.email,
        },
    )))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Collect `validator` length violations as field errors.
fn length_violations(payload: &RegistrationPayload) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let Err(report) = payload.validate() else {
        return errors;
    };
    for (name, violations) in report.field_errors() {
        let Some(field) = Field::from_ident(&name) else {
            tracing::warn!(field = %name, "Length violation on unmapped field");
            continue;
        };
        let message = violations
            .iter()
            .find_map(|v| v.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| format!("{} is too long", field.label()));
        errors.insert(field, message);
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_names_are_reported_by_field() {
        let payload = RegistrationPayload {
            first_name: "a".repeat(101),
            email: "b".repeat(300),
            ..Default::default()
        };
        let errors = length_violations(&payload);
        assert_eq!(
            errors.get(Field::FirstName),
            Some("First name must be at most 100 characters")
        );
        assert!(errors.contains(Field::Email));
        assert!(!errors.contains(Field::LastName));
    }

    #[test]
    fn within_caps_yields_nothing() {
        let payload = RegistrationPayload {
            first_name: "Jane".into(),
            ..Default::default()
        };
        assert!(length_violations(&payload).is_empty());
    }
}
