//! Edit-capability abstraction.
//!
//! The lock resource never decides who may edit a document; it reuses the
//! host's existing permission model through this injected seam. The same
//! check gates lock reads, claims, and releases.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// The authenticated identity attributed to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal(pub i64);

impl Principal {
    /// Returns the numeric user id.
    #[must_use]
    pub fn id(self) -> i64 {
        self.0
    }
}

/// Capability check for "can this principal edit this document".
#[async_trait]
pub trait EditPolicy: Send + Sync {
    /// Returns whether `principal` may edit `document_id`.
    async fn can_edit(&self, principal: Principal, document_id: Uuid)
    -> Result<bool, DomainError>;
}
