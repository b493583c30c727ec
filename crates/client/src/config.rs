use std::time::Duration;

/// Default backend used when `SIGNUP_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors building an [`HttpSubmitter`](crate::HttpSubmitter).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A configuration value could not be parsed.
    #[error("{var} must be a valid {expected}, got {value:?}")]
    InvalidConfig {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Where and how the form talks to the backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash, e.g. `http://localhost:3000`.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Load from the environment.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `SIGNUP_API_URL`          | `http://localhost:3000` |
    /// | `SIGNUP_API_TIMEOUT_SECS` | `10`                    |
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let mut config = match lookup("SIGNUP_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        };

        if let Some(raw) = lookup("SIGNUP_API_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| ClientError::InvalidConfig {
                var: "SIGNUP_API_TIMEOUT_SECS",
                expected: "u64",
                value: raw,
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Full URL of the registration endpoint.
    pub fn register_url(&self) -> String {
        format!("{}/api/register", self.base_url)
    }
}
