//! Submission transport seam.
//!
//! The form session knows nothing about networking; it hands the validated
//! payload to a [`Submitter`] and interprets the returned envelope.

use async_trait::async_trait;

use crate::form::RegistrationPayload;
use crate::wire::RegisterResponse;

/// Errors that prevent a structured response from being obtained.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection refused, DNS failure, timeout, and the like.
    #[error("Endpoint unreachable: {0}")]
    Unreachable(String),

    /// Non-2xx status whose body was not a registration envelope.
    #[error("Unexpected response ({status}): {body}")]
    Status { status: u16, body: String },

    /// 2xx status whose body could not be decoded.
    #[error("Malformed response body: {0}")]
    Decode(String),
}

/// Delivers a registration payload to the backend.
///
/// Implementations return `Ok` whenever the endpoint answered with a
/// registration envelope, including `success: false` rejections.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, payload: &RegistrationPayload)
        -> Result<RegisterResponse, TransportError>;
}
