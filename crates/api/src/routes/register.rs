use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{register, users};
use crate::state::AppState;

/// Registration routes, nested under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register::register))
        .route("/users", get(users::list_users))
}
