//! HTTP transport for the registration form.
//!
//! [`HttpSubmitter`] implements [`signup_core::submit::Submitter`] on top of
//! [`reqwest`], so a [`FormSession`](signup_core::session::FormSession) can be
//! driven against a live backend.

pub mod config;
pub mod submitter;

pub use config::{ClientConfig, ClientError};
pub use submitter::HttpSubmitter;
