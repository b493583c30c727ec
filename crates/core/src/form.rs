//! Form snapshot and the registration wire payload.
//!
//! [`FormData`] is the raw state the presentation layer edits. It is never
//! mutated by the validation engine. [`RegistrationPayload`] is the JSON body
//! sent to `POST /api/register`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::Validate;

use crate::error::CoreError;
use crate::field::Field;

/// A borrowed view of one field's raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Checked(bool),
}

/// An owned value supplied by the presentation layer on edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    Checked(bool),
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        FieldInput::Text(value.to_string())
    }
}

impl From<String> for FieldInput {
    fn from(value: String) -> Self {
        FieldInput::Text(value)
    }
}

impl From<bool> for FieldInput {
    fn from(value: bool) -> Self {
        FieldInput::Checked(value)
    }
}

/// Current raw values of every form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub gender: String,
    pub address: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
}

impl FormData {
    pub fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Terms => FieldValue::Checked(self.terms),
            other => FieldValue::Text(self.text_slot(other)),
        }
    }

    /// Raw text of a field. `terms` has no text and yields `""`.
    pub fn text(&self, field: Field) -> &str {
        match self.value(field) {
            FieldValue::Text(s) => s,
            FieldValue::Checked(_) => "",
        }
    }

    /// Text as seen by the validation rules: trimmed, except for the
    /// password fields which are compared verbatim.
    pub fn normalized(&self, field: Field) -> &str {
        let raw = self.text(field);
        if field.is_trimmed() {
            raw.trim()
        } else {
            raw
        }
    }

    /// Whether a field counts as filled in for the required-field check.
    pub fn is_filled(&self, field: Field) -> bool {
        match self.value(field) {
            FieldValue::Checked(checked) => checked,
            FieldValue::Text(_) => !self.normalized(field).is_empty(),
        }
    }

    /// Overwrite one field. Text cannot be assigned to `terms` and a checkbox
    /// value cannot be assigned to a text field.
    pub fn set(&mut self, field: Field, input: FieldInput) -> Result<(), CoreError> {
        match (field, input) {
            (Field::Terms, FieldInput::Checked(checked)) => {
                self.terms = checked;
                Ok(())
            }
            (Field::Terms, FieldInput::Text(_)) => Err(CoreError::InputKind {
                field,
                expected: "checkbox",
            }),
            (_, FieldInput::Checked(_)) => Err(CoreError::InputKind {
                field,
                expected: "text",
            }),
            (other, FieldInput::Text(text)) => {
                if let Some(slot) = self.text_slot_mut(other) {
                    *slot = text;
                }
                Ok(())
            }
        }
    }

    /// Build the JSON body for `POST /api/register`.
    pub fn to_payload(&self) -> RegistrationPayload {
        let age = self.age.trim();
        RegistrationPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            age: (!age.is_empty()).then(|| age.to_string()),
            gender: self.gender.clone(),
            address: self.address.clone(),
            country: self.country.clone(),
            state: self.state.clone(),
            city: self.city.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            terms: self.terms,
        }
    }

    fn text_slot(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::Address => &self.address,
            Field::Country => &self.country,
            Field::State => &self.state,
            Field::City => &self.city,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Terms => "",
        }
    }

    fn text_slot_mut(&mut self, field: Field) -> Option<&mut String> {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Age => &mut self.age,
            Field::Gender => &mut self.gender,
            Field::Address => &mut self.address,
            Field::Country => &mut self.country,
            Field::State => &mut self.state,
            Field::City => &mut self.city,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::Terms => return None,
        };
        Some(slot)
    }
}

/// Request body for `POST /api/register`.
///
/// `terms` travels as the string `"true"`/`"false"`. When decoding, a JSON
/// boolean, `"on"`, `1` and `"1"` are accepted as well. `age` may arrive as a
/// string, a number, or `null`.
///
/// The `validator` length caps guard the server against oversized input;
/// they are checked before the business rules run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    #[serde(default)]
    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: String,
    #[serde(default)]
    #[validate(length(max = 254, message = "Email must be at most 254 characters"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 32, message = "Phone number must be at most 32 characters"))]
    pub phone: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub age: Option<String>,
    #[serde(default)]
    #[validate(length(max = 32, message = "Gender must be at most 32 characters"))]
    pub gender: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "Address must be at most 255 characters"))]
    pub address: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    #[validate(length(max = 128, message = "Password must be at most 128 characters"))]
    pub password: String,
    #[serde(default)]
    #[validate(length(max = 128, message = "Password must be at most 128 characters"))]
    pub confirm_password: String,
    #[serde(default, serialize_with = "terms_as_string", deserialize_with = "terms_flag")]
    pub terms: bool,
}

impl From<RegistrationPayload> for FormData {
    fn from(p: RegistrationPayload) -> Self {
        FormData {
            first_name: p.first_name,
            last_name: p.last_name,
            email: p.email,
            phone: p.phone,
            age: p.age.unwrap_or_default(),
            gender: p.gender,
            address: p.address,
            country: p.country,
            state: p.state,
            city: p.city,
            password: p.password,
            confirm_password: p.confirm_password,
            terms: p.terms,
        }
    }
}

fn terms_as_string<S: Serializer>(terms: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *terms { "true" } else { "false" })
}

fn terms_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::String(s) => matches!(s.as_str(), "true" | "on" | "1"),
        serde_json::Value::Number(n) => n.as_i64() == Some(1),
        _ => false,
    })
}

fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn set_rejects_mismatched_input_kind() {
        let mut form = FormData::default();
        assert_matches!(
            form.set(Field::Terms, "yes".into()),
            Err(CoreError::InputKind { field: Field::Terms, .. })
        );
        assert_matches!(
            form.set(Field::Email, true.into()),
            Err(CoreError::InputKind { field: Field::Email, .. })
        );
        form.set(Field::Terms, true.into()).unwrap();
        assert!(form.terms);
    }

    #[test]
    fn normalized_trims_everything_but_passwords() {
        let mut form = FormData::default();
        form.set(Field::FirstName, "  John ".into()).unwrap();
        form.set(Field::Password, " secret ".into()).unwrap();
        assert_eq!(form.normalized(Field::FirstName), "John");
        assert_eq!(form.normalized(Field::Password), " secret ");
    }

    #[test]
    fn whitespace_only_text_is_not_filled() {
        let mut form = FormData::default();
        form.set(Field::LastName, "   ".into()).unwrap();
        assert!(!form.is_filled(Field::LastName));
        assert!(!form.is_filled(Field::Terms));
    }

    #[test]
    fn payload_serializes_terms_as_string_and_empty_age_as_null() {
        let form = FormData {
            first_name: "John".into(),
            terms: true,
            ..FormData::default()
        };
        let body = serde_json::to_value(form.to_payload()).unwrap();
        assert_eq!(body["terms"], "true");
        assert_eq!(body["firstName"], "John");
        assert!(body["age"].is_null());
        assert_eq!(body["confirmPassword"], "");
    }

    #[test]
    fn payload_accepts_loose_terms_and_numeric_age() {
        let parsed: RegistrationPayload =
            serde_json::from_value(json!({ "terms": "on", "age": 30 })).unwrap();
        assert!(parsed.terms);
        assert_eq!(parsed.age.as_deref(), Some("30"));

        let parsed: RegistrationPayload =
            serde_json::from_value(json!({ "terms": true, "age": null })).unwrap();
        assert!(parsed.terms);
        assert_eq!(parsed.age, None);

        let parsed: RegistrationPayload =
            serde_json::from_value(json!({ "terms": "false" })).unwrap();
        assert!(!parsed.terms);
    }

    #[test]
    fn length_caps_flag_oversized_names() {
        let payload = RegistrationPayload {
            first_name: "x".repeat(101),
            ..RegistrationPayload::default()
        };
        let report = payload.validate().unwrap_err();
        assert!(report.field_errors().contains_key("first_name"));
    }
}
