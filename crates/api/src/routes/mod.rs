pub mod health;
pub mod register;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// POST  /register   register
/// GET   /users      list_users
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(register::router())
}
