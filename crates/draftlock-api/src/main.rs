//! Draftlock API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use draftlock_core::clock::{Clock, SystemClock};
use draftlock_core::token::{SystemTokenSource, TokenSource};
use draftlock_lock::LockConfig;
use draftlock_meta_store::{PgEditPolicy, PgMetadataStore};

use draftlock_api::routes;
use draftlock_api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Draftlock API server");

    // Read configuration from environment.
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| "DATABASE_URL environment variable must be set")?;
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| format!("PORT must be a valid u16: {e}"))?;
    let window_secs: i64 = std::env::var("LOCK_WINDOW_SECS")
        .unwrap_or_else(|_| LockConfig::DEFAULT_WINDOW_SECS.to_string())
        .parse()
        .map_err(|e| format!("LOCK_WINDOW_SECS must be a valid i64: {e}"))?;
    if window_secs <= 0 {
        return Err("LOCK_WINDOW_SECS must be positive".into());
    }

    // Create database connection pool.
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await?;

    // Build application state.
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(SystemClock);
    let tokens: Arc<Mutex<dyn TokenSource + Send>> = Arc::new(Mutex::new(SystemTokenSource));
    let app_state = AppState::new(
        Arc::new(PgMetadataStore::new(pool.clone())),
        Arc::new(PgEditPolicy::new(pool)),
        clock,
        tokens,
        LockConfig::with_window_secs(window_secs),
    );

    // Build router.
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/documents", routes::lock::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| format!("invalid HOST:PORT combination: {e}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
