//! In-memory user store for the mock backend.
//!
//! Registrations live for the lifetime of the process. Emails are compared
//! case-insensitively so `Jane@Example.com` and `jane@example.com` collide.

use serde::Serialize;
use signup_core::error::CoreError;
use signup_core::types::Timestamp;
use tokio::sync::RwLock;
use uuid::Uuid;

pub const MSG_DUPLICATE_EMAIL: &str = "User with this email already exists";

/// A stored registration. Holds the password hash, never the plaintext.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: Option<String>,
    pub gender: String,
    pub address: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// Public projection of a stored user returned by `GET /api/users`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: Timestamp,
}

impl From<&StoredUser> for UserSummary {
    fn from(user: &StoredUser) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<StoredUser>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a user with this email (case-insensitive) is already stored.
    pub async fn contains_email(&self, email: &str) -> bool {
        let users = self.users.read().await;
        users.iter().any(|u| u.email.eq_ignore_ascii_case(email))
    }

    /// Insert a user, rejecting duplicate emails with [`CoreError::Conflict`].
    ///
    /// The duplicate check and the push happen under one write lock so two
    /// concurrent registrations for the same email cannot both succeed.
    pub async fn insert(&self, user: StoredUser) -> Result<UserSummary, CoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(CoreError::Conflict(MSG_DUPLICATE_EMAIL.into()));
        }
        let summary = UserSummary::from(&user);
        users.push(user);
        Ok(summary)
    }

    /// All users in registration order.
    pub async fn list(&self) -> Vec<UserSummary> {
        self.users.read().await.iter().map(UserSummary::from).collect()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}
