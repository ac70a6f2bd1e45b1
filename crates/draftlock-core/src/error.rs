//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The principal is not allowed to edit the document.
    #[error("not allowed to edit document {0}")]
    Forbidden(Uuid),

    /// The document's unexpired lock belongs to a different principal.
    #[error("not allowed to delete the lock held by user {owner}")]
    ForeignLock {
        /// The principal that currently holds the lock.
        owner: i64,
    },

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
