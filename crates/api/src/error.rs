use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use signup_core::error::CoreError;
use signup_core::validation::FieldErrors;
use signup_core::wire::RegisterResponse;

pub const MSG_VALIDATION_FAILED: &str = "Validation failed";
pub const MSG_INTERNAL: &str = "Internal server error. Please try again.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{ success: false, message,
/// errors? }` envelope the registration form understands.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `signup_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// One or more fields failed validation.
    #[error("{MSG_VALIDATION_FAILED}: {} field(s)", .0.len())]
    Rejected(FieldErrors),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Conflict(msg) => {
                    (StatusCode::BAD_REQUEST, RegisterResponse::failure(msg))
                }
                e @ (CoreError::UnknownField(_) | CoreError::InputKind { .. }) => (
                    StatusCode::BAD_REQUEST,
                    RegisterResponse::failure(e.to_string()),
                ),
            },

            // --- HTTP-specific errors ---
            AppError::Rejected(errors) => (
                StatusCode::BAD_REQUEST,
                RegisterResponse::rejected(MSG_VALIDATION_FAILED, &errors),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, RegisterResponse::failure(msg)),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, RegisterResponse) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        RegisterResponse::failure(MSG_INTERNAL),
    )
}
