//! Integration tests for `POST /api/register` and `GET /api/users`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, post_raw, valid_registration};
use serde_json::Value;

fn error_paths(json: &Value) -> Vec<String> {
    json["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["path"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Test: a fully valid registration is accepted
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_registration_succeeds() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/register", &valid_registration()).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(
        json["message"],
        "Registration successful! Your profile has been submitted successfully."
    );
    assert_eq!(json["data"]["firstName"], "Jane");
    assert_eq!(json["data"]["email"], "jane@example.com");
    assert_eq!(json["data"]["id"].as_str().unwrap().len(), 36);
    assert!(json.get("errors").is_none());
}

// ---------------------------------------------------------------------------
// Test: a single missing required field yields exactly one error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_last_name_is_the_only_error() {
    let app = common::build_test_app();
    let mut body = valid_registration();
    body["lastName"] = Value::from("   ");

    let response = post_json(app, "/api/register", &body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Validation failed");
    assert_eq!(error_paths(&json), vec!["lastName"]);
    assert_eq!(json["errors"][0]["msg"], "Last name is required");
}

// ---------------------------------------------------------------------------
// Test: disposable and mismatched values use the shared rule messages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn disposable_email_is_rejected() {
    let app = common::build_test_app();
    let mut body = valid_registration();
    body["email"] = Value::from("jane@Mailinator.com");

    let json = body_json(post_json(app, "/api/register", &body).await).await;
    assert_eq!(error_paths(&json), vec!["email"]);
    assert_eq!(
        json["errors"][0]["msg"],
        "Disposable email addresses are not allowed"
    );
}

#[tokio::test]
async fn every_rule_violation_is_reported() {
    let app = common::build_test_app();
    let mut body = valid_registration();
    body["confirmPassword"] = Value::from("Other1!pass");
    body["terms"] = Value::from("false");
    body["phone"] = Value::from("+445551234567");

    let response = post_json(app, "/api/register", &body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut paths = error_paths(&body_json(response).await);
    paths.sort();
    assert_eq!(paths, vec!["confirmPassword", "phone", "terms"]);
}

#[tokio::test]
async fn oversized_first_name_is_capped() {
    let app = common::build_test_app();
    let mut body = valid_registration();
    body["firstName"] = Value::from("a".repeat(101));

    let json = body_json(post_json(app, "/api/register", &body).await).await;
    assert_eq!(error_paths(&json), vec!["firstName"]);
    assert_eq!(
        json["errors"][0]["msg"],
        "First name must be at most 100 characters"
    );
}

// ---------------------------------------------------------------------------
// Test: duplicate emails are rejected case-insensitively
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let (app, state) = common::build_test_app_with_state();

    let first = post_json(app.clone(), "/api/register", &valid_registration()).await;
    assert_eq!(first.status(), StatusCode::OK);

    let mut body = valid_registration();
    body["email"] = Value::from("JANE@example.com");
    let second = post_json(app, "/api/register", &body).await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let json = body_json(second).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "User with this email already exists");
    assert_eq!(state.users.len().await, 1);
}

// ---------------------------------------------------------------------------
// Test: malformed JSON is a 400 with the failure envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_json_returns_400() {
    let app = common::build_test_app();
    let response = post_raw(app, "/api/register", "{not json".to_string()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].is_string());
}

// ---------------------------------------------------------------------------
// Test: GET /api/users lists registrations without password material
// ---------------------------------------------------------------------------

#[tokio::test]
async fn users_lists_registrations() {
    let app = common::build_test_app();

    let empty = body_json(get(app.clone(), "/api/users").await).await;
    assert_eq!(empty["success"], true);
    assert_eq!(empty["data"].as_array().unwrap().len(), 0);

    post_json(app.clone(), "/api/register", &valid_registration()).await;

    let response = get(app.clone(), "/api/users").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let users = json["data"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["lastName"], "Doe");
    assert!(users[0]["createdAt"].is_string());
    assert!(users[0].get("password").is_none());
    assert!(users[0].get("passwordHash").is_none());

    let health = body_json(get(app, "/health").await).await;
    assert_eq!(health["users"], 1);
}
