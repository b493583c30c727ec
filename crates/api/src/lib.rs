//! Registration mock backend library.
//!
//! Exposes the building blocks (config, state, error handling, routes, user
//! store) so integration tests and the binary entrypoint can both use them.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod store;
