//! Registration form domain logic.
//!
//! Pure validation rules, the location cascade, and the form session state
//! machine. No HTTP and no storage; the api and client crates build on this.

pub mod error;
pub mod field;
pub mod form;
pub mod location;
pub mod session;
pub mod submit;
pub mod types;
pub mod validation;
pub mod wire;
