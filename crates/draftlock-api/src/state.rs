//! Shared application state.

use std::sync::{Arc, Mutex};

use draftlock_core::clock::Clock;
use draftlock_core::policy::EditPolicy;
use draftlock_core::store::MetadataStore;
use draftlock_core::token::TokenSource;
use draftlock_lock::LockConfig;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Document metadata store.
    pub store: Arc<dyn MetadataStore>,
    /// Edit-capability check for the parent document.
    pub policy: Arc<dyn EditPolicy>,
    /// Clock for staleness evaluation.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Anti-forgery token source.
    pub tokens: Arc<Mutex<dyn TokenSource + Send>>,
    /// Staleness policy; drives both the locked flag and the author link.
    pub lock_config: LockConfig,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        store: Arc<dyn MetadataStore>,
        policy: Arc<dyn EditPolicy>,
        clock: Arc<dyn Clock + Send + Sync>,
        tokens: Arc<Mutex<dyn TokenSource + Send>>,
        lock_config: LockConfig,
    ) -> Self {
        Self {
            store,
            policy,
            clock,
            tokens,
            lock_config,
        }
    }
}
