//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use draftlock_core::clock::Clock;
use draftlock_core::policy::EditPolicy;
use draftlock_core::token::TokenSource;
use draftlock_lock::LockConfig;
use draftlock_test_support::{AllowAllPolicy, FixedClock, InMemoryMetadataStore, SequenceTokenSource};

use draftlock_api::routes;
use draftlock_api::state::AppState;

/// Fixed timestamp used across all integration tests.
pub fn fixed_clock() -> Arc<dyn Clock + Send + Sync> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Unix seconds of the fixed test timestamp.
pub fn now_secs() -> i64 {
    fixed_clock().now().timestamp()
}

/// Build the full app router over the given in-memory store, with an
/// allow-all policy and deterministic clock/tokens. Uses the same route
/// structure as `main.rs`.
pub fn build_test_app(store: Arc<InMemoryMetadataStore>) -> Router {
    build_test_app_with_policy(store, Arc::new(AllowAllPolicy))
}

/// Build the full app router with a custom edit policy.
pub fn build_test_app_with_policy(
    store: Arc<InMemoryMetadataStore>,
    policy: Arc<dyn EditPolicy>,
) -> Router {
    let tokens: Arc<Mutex<dyn TokenSource + Send>> =
        Arc::new(Mutex::new(SequenceTokenSource::new(vec![])));
    let app_state = AppState::new(store, policy, fixed_clock(), tokens, LockConfig::default());

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/documents", routes::lock::router())
        .with_state(app_state)
}

/// Send a bodyless request as the given user and return the JSON response.
pub async fn request_as(
    app: Router,
    method: &str,
    uri: &str,
    user: Option<i64>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("x-acting-user", user.to_string());
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request as the given user and return the JSON response.
pub async fn get_json(app: Router, uri: &str, user: i64) -> (StatusCode, serde_json::Value) {
    request_as(app, "GET", uri, Some(user)).await
}
