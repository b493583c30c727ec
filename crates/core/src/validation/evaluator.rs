//! Rule evaluator: pure logic, no I/O.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::{
    FieldErrors, ValidationReport, DISPOSABLE_DOMAINS, GENDER_OPTIONS, MAX_AGE,
    MIN_AGE, MIN_PASSWORD_LENGTH, MSG_AGE_RANGE, MSG_CONFIRM_MISMATCH,
    MSG_CONFIRM_REQUIRED, MSG_EMAIL_DISPOSABLE, MSG_EMAIL_INVALID, MSG_EMAIL_REQUIRED,
    MSG_GENDER_INVALID, MSG_PASSWORD_REQUIRED, MSG_PASSWORD_SHORT, MSG_PASSWORD_VARIETY,
    MSG_PHONE_INTERNATIONAL, MSG_PHONE_REQUIRED, MSG_TERMS,
};
use super::strength::has_symbol;
use crate::field::Field;
use crate::form::FormData;
use crate::location::LocationTable;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

static INTERNATIONAL_PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\d{1,3}\d{4,14}$").expect("valid regex"));

/// Per-country phone format: calling code plus a fixed digit count.
struct PhonePattern {
    country_code: &'static str,
    label: &'static str,
    re: Regex,
}

static PHONE_PATTERNS: LazyLock<Vec<PhonePattern>> = LazyLock::new(|| {
    [
        ("us", "US", r"^\+1\d{10}$"),
        ("ca", "CA", r"^\+1\d{10}$"),
        ("uk", "UK", r"^\+44\d{10}$"),
        ("in", "IN", r"^\+91\d{10}$"),
        ("au", "AU", r"^\+61\d{9}$"),
    ]
    .into_iter()
    .map(|(country_code, label, pattern)| PhonePattern {
        country_code,
        label,
        re: Regex::new(pattern).expect("valid regex"),
    })
    .collect()
});

/// Evaluates the registration rules against form snapshots.
///
/// Construct once and share (it is cheap to clone and holds no mutable
/// state). The location table decides which country selections are
/// "recognized" for phone formatting.
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    locations: LocationTable,
}

impl ValidationEngine {
    pub fn new(locations: LocationTable) -> Self {
        Self { locations }
    }

    pub fn locations(&self) -> &LocationTable {
        &self.locations
    }

    /// Validate a single field against the current snapshot.
    ///
    /// Reads only the field itself, plus `password` for `confirmPassword`
    /// and `country` for `phone`. Returns `None` when the field is valid.
    pub fn validate_field(&self, field: Field, form: &FormData) -> Option<String> {
        let value = form.normalized(field);
        match field {
            Field::FirstName | Field::LastName => required(field, value),
            Field::Email => validate_email(value),
            Field::Phone => self.validate_phone(value, form.normalized(Field::Country)),
            Field::Age => validate_age(value),
            Field::Gender => validate_gender(value),
            Field::Password => validate_password(value),
            Field::ConfirmPassword => validate_confirm_password(form.text(Field::Password), value),
            Field::Terms => (!form.terms).then(|| MSG_TERMS.to_string()),
            Field::Address | Field::Country | Field::State | Field::City => None,
        }
    }

    /// Validate every field independently, with no short-circuiting.
    pub fn validate_all(&self, form: &FormData) -> FieldErrors {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.validate_field(field, form).map(|m| (field, m)))
            .collect()
    }

    /// Every required field is filled and no rule reports an error.
    pub fn is_form_valid(&self, form: &FormData) -> bool {
        self.validate_form(form).is_valid
    }

    pub fn validate_form(&self, form: &FormData) -> ValidationReport {
        let errors = self.validate_all(form);
        let all_required_filled = Field::REQUIRED.into_iter().all(|f| form.is_filled(f));
        ValidationReport {
            is_valid: all_required_filled && errors.is_empty(),
            errors,
        }
    }

    fn validate_phone(&self, phone: &str, country: &str) -> Option<String> {
        if phone.is_empty() {
            return Some(MSG_PHONE_REQUIRED.to_string());
        }

        let pattern = self.locations.country(country).and_then(|c| {
            PHONE_PATTERNS
                .iter()
                .find(|p| p.country_code == c.code)
        });

        match pattern {
            Some(p) if !p.re.is_match(phone) => Some(format!(
                "Please enter a valid {} phone number with country code",
                p.label
            )),
            Some(_) => None,
            None if !INTERNATIONAL_PHONE_RE.is_match(phone) => {
                Some(MSG_PHONE_INTERNATIONAL.to_string())
            }
            None => None,
        }
    }
}

fn required(field: Field, value: &str) -> Option<String> {
    value
        .is_empty()
        .then(|| format!("{} is required", field.label()))
}

fn validate_email(email: &str) -> Option<String> {
    if email.is_empty() {
        return Some(MSG_EMAIL_REQUIRED.to_string());
    }
    if !EMAIL_RE.is_match(email) {
        return Some(MSG_EMAIL_INVALID.to_string());
    }
    let domain = email
        .rsplit_once('@')
        .map(|(_, d)| d.to_ascii_lowercase())
        .unwrap_or_default();
    if DISPOSABLE_DOMAINS.contains(&domain.as_str()) {
        return Some(MSG_EMAIL_DISPOSABLE.to_string());
    }
    None
}

fn validate_age(age: &str) -> Option<String> {
    if age.is_empty() {
        return None;
    }
    match age.parse::<i64>() {
        Ok(n) if (MIN_AGE..=MAX_AGE).contains(&n) => None,
        _ => Some(MSG_AGE_RANGE.to_string()),
    }
}

fn validate_gender(gender: &str) -> Option<String> {
    if gender.is_empty() {
        return required(Field::Gender, gender);
    }
    if GENDER_OPTIONS
        .iter()
        .any(|option| option.eq_ignore_ascii_case(gender))
    {
        None
    } else {
        Some(MSG_GENDER_INVALID.to_string())
    }
}

fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some(MSG_PASSWORD_REQUIRED.to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Some(MSG_PASSWORD_SHORT.to_string());
    }
    let varied = password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && has_symbol(password);
    (!varied).then(|| MSG_PASSWORD_VARIETY.to_string())
}

fn validate_confirm_password(password: &str, confirm: &str) -> Option<String> {
    if confirm.is_empty() {
        return Some(MSG_CONFIRM_REQUIRED.to_string());
    }
    (confirm != password).then(|| MSG_CONFIRM_MISMATCH.to_string())
}
