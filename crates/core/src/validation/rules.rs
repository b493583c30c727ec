//! Validation constants and result types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Email providers that hand out throwaway addresses.
pub const DISPOSABLE_DOMAINS: [&str; 6] = [
    "tempmail.com",
    "guerrillamail.com",
    "mailinator.com",
    "10minutemail.com",
    "throwawaymail.com",
    "fakeinbox.com",
];

/// Punctuation accepted as the password "symbol" character class.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Other"];

pub const MIN_AGE: i64 = 1;
pub const MAX_AGE: i64 = 120;

pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
pub const MSG_EMAIL_INVALID: &str = "Please enter a valid email address";
pub const MSG_EMAIL_DISPOSABLE: &str = "Disposable email addresses are not allowed";
pub const MSG_PHONE_REQUIRED: &str = "Phone number is required";
pub const MSG_PHONE_INTERNATIONAL: &str =
    "Please enter a valid international phone number with country code";
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required";
pub const MSG_PASSWORD_SHORT: &str = "Password must be at least 8 characters long";
pub const MSG_PASSWORD_VARIETY: &str =
    "Password must contain uppercase, lowercase, number, and special character";
pub const MSG_CONFIRM_REQUIRED: &str = "Please confirm your password";
pub const MSG_CONFIRM_MISMATCH: &str = "Passwords do not match";
pub const MSG_AGE_RANGE: &str = "Please enter a valid age between 1 and 120";
pub const MSG_GENDER_INVALID: &str = "Please select a valid gender";
pub const MSG_TERMS: &str = "You must accept the terms and conditions";

/// Field → message mapping produced by one validation pass.
///
/// A field with no entry has no error. Ordered by form position so that
/// iteration (and JSON output) is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error. Empty messages mean "no error" and are dropped.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.0.remove(&field);
        } else {
            self.0.insert(field, message);
        }
    }

    /// Replace a field's entry with a fresh result.
    pub fn set(&mut self, field: Field, message: Option<String>) {
        match message {
            Some(m) => self.insert(field, m),
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl FromIterator<(Field, String)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        let mut errors = FieldErrors::new();
        for (field, message) in iter {
            errors.insert(field, message);
        }
        errors
    }
}

/// Aggregated result of validating a whole form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// No errors AND every required field filled.
    pub is_valid: bool,
    pub errors: FieldErrors,
}
