//! `reqwest`-backed [`Submitter`].

use async_trait::async_trait;
use signup_core::form::RegistrationPayload;
use signup_core::submit::{Submitter, TransportError};
use signup_core::wire::RegisterResponse;

use crate::config::{ClientConfig, ClientError};

/// Posts registrations to `{base_url}/api/register`.
pub struct HttpSubmitter {
    client: reqwest::Client,
    register_url: String,
}

impl HttpSubmitter {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, config))
    }

    /// Reuse an existing [`reqwest::Client`] (and its connection pool).
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            register_url: config.register_url(),
        }
    }

    /// Interpret a response. Any status carrying a registration envelope is
    /// a structured answer; anything else is a transport failure.
    async fn parse_response(
        response: reqwest::Response,
    ) -> Result<RegisterResponse, TransportError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;

        match serde_json::from_str::<RegisterResponse>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(e) if status.is_success() => Err(TransportError::Decode(e.to_string())),
            Err(_) => Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }),
        }
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegisterResponse, TransportError> {
        tracing::debug!(url = %self.register_url, "Submitting registration");

        let response = self
            .client
            .post(&self.register_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;

        Self::parse_response(response).await
    }
}
