//! Routes for the document lock resource.

use std::sync::Mutex;

use axum::extract::{Path, Query, State};
use axum::{Json, Router, routing::get};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{info, instrument};
use uuid::Uuid;

use draftlock_core::error::DomainError;
use draftlock_core::token::TokenSource;
use draftlock_lock::record::LockRecord;
use draftlock_lock::service;
use draftlock_lock::view::LockView;

use crate::error::ApiError;
use crate::principal::ActingUser;
use crate::response::{ContextQuery, lock_fields, lock_response};
use crate::state::AppState;

/// Response body returned after a lock release.
#[derive(Debug, Serialize)]
pub struct ReleaseResponse {
    /// Whether a stored lock field was actually removed.
    pub deleted: bool,
    /// Context-filtered fields of the view a read would have produced
    /// immediately before the deletion.
    pub previous: Map<String, Value>,
}

fn fresh_nonce(tokens: &Mutex<dyn TokenSource + Send>) -> Result<String, DomainError> {
    // Lock the token source only for the synchronous draw — never across an await.
    let mut guard = tokens
        .lock()
        .map_err(|e| DomainError::Infrastructure(format!("token mutex poisoned: {e}")))?;
    Ok(guard.token())
}

fn project(state: &AppState, record: Option<&LockRecord>) -> Result<LockView, DomainError> {
    let nonce = fresh_nonce(&state.tokens)?;
    Ok(LockView::project(
        record,
        &state.lock_config,
        state.clock.now(),
        nonce,
    ))
}

/// GET /{id}/lock
#[instrument(skip_all, fields(document_id = %document_id, user = principal.id()))]
async fn read_lock(
    State(state): State<AppState>,
    ActingUser(principal): ActingUser,
    Path(document_id): Path<Uuid>,
    Query(query): Query<ContextQuery>,
) -> Result<Json<Value>, ApiError> {
    info!("handling lock read");

    let record =
        service::get_lock(&*state.policy, &*state.store, principal, document_id).await?;
    let view = project(&state, record.as_ref())?;

    Ok(Json(lock_response(&view, query.context, document_id)))
}

/// PUT/PATCH /{id}/lock
#[instrument(skip_all, fields(document_id = %document_id, user = principal.id()))]
async fn claim_lock(
    State(state): State<AppState>,
    ActingUser(principal): ActingUser,
    Path(document_id): Path<Uuid>,
    Query(query): Query<ContextQuery>,
) -> Result<Json<Value>, ApiError> {
    info!("handling lock claim");

    let record = service::claim_lock(
        &*state.policy,
        &*state.store,
        state.clock.as_ref(),
        principal,
        document_id,
    )
    .await?;
    let view = project(&state, record.as_ref())?;

    Ok(Json(lock_response(&view, query.context, document_id)))
}

/// DELETE /{id}/lock
#[instrument(skip_all, fields(document_id = %document_id, user = principal.id()))]
async fn release_lock(
    State(state): State<AppState>,
    ActingUser(principal): ActingUser,
    Path(document_id): Path<Uuid>,
    Query(query): Query<ContextQuery>,
) -> Result<Json<ReleaseResponse>, ApiError> {
    info!("handling lock release");

    let release = service::release_lock(
        &*state.policy,
        &*state.store,
        state.clock.as_ref(),
        &state.lock_config,
        principal,
        document_id,
    )
    .await?;
    let previous = project(&state, release.previous.as_ref())?;

    Ok(Json(ReleaseResponse {
        deleted: release.deleted,
        previous: lock_fields(&previous, query.context),
    }))
}

/// Returns the router for the lock resource.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}/lock",
        get(read_lock)
            .put(claim_lock)
            .patch(claim_lock)
            .delete(release_lock),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use draftlock_core::clock::Clock;
    use draftlock_core::policy::EditPolicy;
    use draftlock_core::store::MetadataStore;
    use draftlock_lock::LockConfig;
    use draftlock_test_support::{
        AllowAllPolicy, DenyAllPolicy, FailingMetadataStore, FixedClock, InMemoryMetadataStore,
        SequenceTokenSource,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app_state_with(policy: Arc<dyn EditPolicy>, store: Arc<dyn MetadataStore>) -> AppState {
        let clock: Arc<dyn Clock + Send + Sync> = Arc::new(FixedClock(Utc::now()));
        let tokens: Arc<Mutex<dyn TokenSource + Send>> =
            Arc::new(Mutex::new(SequenceTokenSource::new(vec![])));
        AppState::new(store, policy, clock, tokens, LockConfig::default())
    }

    async fn send(
        state: AppState,
        method: &str,
        uri: &str,
        user: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let app = router().with_state(state);
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header("x-acting-user", user);
        }
        let request = builder.body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

        (status, json)
    }

    #[tokio::test]
    async fn test_read_without_principal_returns_401() {
        let state = app_state_with(Arc::new(AllowAllPolicy), Arc::new(InMemoryMetadataStore::new()));
        let uri = format!("/{}/lock", Uuid::new_v4());

        let (status, json) = send(state, "GET", &uri, None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], "missing_principal");
    }

    #[tokio::test]
    async fn test_read_denied_principal_returns_403() {
        let state = app_state_with(Arc::new(DenyAllPolicy), Arc::new(InMemoryMetadataStore::new()));
        let uri = format!("/{}/lock", Uuid::new_v4());

        let (status, json) = send(state, "GET", &uri, Some("1")).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["error"], "cannot_edit_document");
    }

    #[tokio::test]
    async fn test_read_unlocked_returns_200_with_nonce() {
        let state = app_state_with(Arc::new(AllowAllPolicy), Arc::new(InMemoryMetadataStore::new()));
        let uri = format!("/{}/lock", Uuid::new_v4());

        let (status, json) = send(state, "GET", &uri, Some("1")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["locked"], false);
        assert_eq!(json["nonce"], "test-nonce-0");
    }

    #[tokio::test]
    async fn test_claim_accepts_both_put_and_patch() {
        let store = Arc::new(InMemoryMetadataStore::new());
        let uri = format!("/{}/lock", Uuid::new_v4());

        for method in ["PUT", "PATCH"] {
            let state = app_state_with(Arc::new(AllowAllPolicy), store.clone());
            let (status, json) = send(state, method, &uri, Some("7")).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(json["locked"], true);
            assert_eq!(json["user"], 7);
        }
    }

    #[tokio::test]
    async fn test_failing_store_returns_500() {
        let state = app_state_with(Arc::new(AllowAllPolicy), Arc::new(FailingMetadataStore));
        let uri = format!("/{}/lock", Uuid::new_v4());

        let (status, json) = send(state, "GET", &uri, Some("1")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "infrastructure_error");
    }
}
