//! Test stores — mock `MetadataStore` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use draftlock_core::error::DomainError;
use draftlock_core::store::MetadataStore;

/// An in-memory metadata store backed by a `HashMap`. Supports seeding raw
/// values before a test and inspecting them afterwards.
#[derive(Debug, Default)]
pub struct InMemoryMetadataStore {
    fields: Mutex<HashMap<(Uuid, String), String>>,
}

impl InMemoryMetadataStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw field value, bypassing the trait.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn seed(&self, document_id: Uuid, key: &str, value: &str) {
        self.fields
            .lock()
            .unwrap()
            .insert((document_id, key.to_owned()), value.to_owned());
    }

    /// Returns the raw stored value, bypassing the trait.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn raw(&self, document_id: Uuid, key: &str) -> Option<String> {
        self.fields
            .lock()
            .unwrap()
            .get(&(document_id, key.to_owned()))
            .cloned()
    }
}

#[async_trait]
impl MetadataStore for InMemoryMetadataStore {
    async fn get(&self, document_id: Uuid, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.raw(document_id, key))
    }

    async fn set(&self, document_id: Uuid, key: &str, value: &str) -> Result<(), DomainError> {
        self.seed(document_id, key, value);
        Ok(())
    }

    async fn delete(&self, document_id: Uuid, key: &str) -> Result<bool, DomainError> {
        Ok(self
            .fields
            .lock()
            .unwrap()
            .remove(&(document_id, key.to_owned()))
            .is_some())
    }
}

/// A metadata store that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug, Clone, Copy)]
pub struct FailingMetadataStore;

#[async_trait]
impl MetadataStore for FailingMetadataStore {
    async fn get(&self, _document_id: Uuid, _key: &str) -> Result<Option<String>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn set(&self, _document_id: Uuid, _key: &str, _value: &str) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn delete(&self, _document_id: Uuid, _key: &str) -> Result<bool, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
