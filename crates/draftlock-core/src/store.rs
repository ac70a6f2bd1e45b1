//! Metadata store abstraction.
//!
//! The host persists per-document metadata as scalar string fields keyed by
//! `(document_id, key)`. The lock domain only ever touches a single field,
//! but the store itself is generic.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainError;

/// Repository trait for reading and writing document metadata fields.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Fetch the raw value of a metadata field, or `None` if unset.
    async fn get(&self, document_id: Uuid, key: &str) -> Result<Option<String>, DomainError>;

    /// Write a metadata field, replacing any existing value.
    async fn set(&self, document_id: Uuid, key: &str, value: &str) -> Result<(), DomainError>;

    /// Remove a metadata field. Returns `true` if a stored value existed.
    async fn delete(&self, document_id: Uuid, key: &str) -> Result<bool, DomainError>;
}
