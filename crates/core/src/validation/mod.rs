//! Registration validation engine.
//!
//! Provides the per-field rule set, whole-form aggregation, and the advisory
//! password strength meter. Everything here is pure: rules read a
//! [`FormData`](crate::form::FormData) snapshot and return messages.

pub mod evaluator;
pub mod rules;
pub mod strength;

pub use evaluator::ValidationEngine;
pub use rules::{FieldErrors, ValidationReport};
pub use strength::{password_strength, PasswordStrength, StrengthLevel};
