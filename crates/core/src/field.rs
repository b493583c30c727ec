//! Registration form field identifiers.
//!
//! Field names on the wire are camelCase (`firstName`, `confirmPassword`);
//! [`Field`] is the typed handle used everywhere inside the crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the thirteen registration form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Age,
    Gender,
    Address,
    Country,
    State,
    City,
    Password,
    ConfirmPassword,
    Terms,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 13] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Age,
        Field::Gender,
        Field::Address,
        Field::Country,
        Field::State,
        Field::City,
        Field::Password,
        Field::ConfirmPassword,
        Field::Terms,
    ];

    /// Fields that must be non-empty (or `true` for terms) before the form
    /// counts as valid.
    pub const REQUIRED: [Field; 8] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Gender,
        Field::Password,
        Field::ConfirmPassword,
        Field::Terms,
    ];

    /// Wire name, as used in JSON bodies and `errors[].path`.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Address => "address",
            Field::Country => "country",
            Field::State => "state",
            Field::City => "city",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Terms => "terms",
        }
    }

    /// Human-readable label used in "is required" messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::Phone => "Phone number",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Address => "Address",
            Field::Country => "Country",
            Field::State => "State",
            Field::City => "City",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm password",
            Field::Terms => "Terms",
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// Password fields keep their raw value; everything else is trimmed
    /// before validation.
    pub fn is_trimmed(self) -> bool {
        !matches!(self, Field::Password | Field::ConfirmPassword)
    }

    /// Resolve a Rust struct field identifier (`first_name`) to a field.
    ///
    /// Used to map derive-generated validation reports back onto wire names.
    pub fn from_ident(ident: &str) -> Option<Field> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(&ident.replace('_', "")))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}
