//! JSON envelopes exchanged with `POST /api/register`.

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::validation::FieldErrors;

/// Public part of a registered user, echoed back on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// One rejected field in a failure response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerFieldError {
    /// Wire name of the field, e.g. `"lastName"`.
    pub path: String,
    pub msg: String,
}

/// Response body for `POST /api/register`, both success and failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RegisteredUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ServerFieldError>>,
}

impl RegisterResponse {
    pub fn success(message: impl Into<String>, data: RegisteredUser) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: None,
        }
    }

    /// A failure carrying one entry per field error.
    pub fn rejected(message: impl Into<String>, errors: &FieldErrors) -> Self {
        let errors = errors
            .iter()
            .map(|(field, msg)| ServerFieldError {
                path: field.as_str().to_string(),
                msg: msg.to_string(),
            })
            .collect();
        Self {
            errors: Some(errors),
            ..Self::failure(message)
        }
    }

    /// Map `errors[].path` back onto known fields. Unknown paths are
    /// dropped; the first message for a field wins.
    pub fn field_errors(&self) -> FieldErrors {
        let mut mapped = FieldErrors::new();
        for entry in self.errors.iter().flatten() {
            match entry.path.parse::<Field>() {
                Ok(field) if !mapped.contains(field) => mapped.insert(field, entry.msg.clone()),
                Ok(_) => {}
                Err(_) => {
                    tracing::debug!(path = %entry.path, "Ignoring server error for unknown field");
                }
            }
        }
        mapped
    }
}
