//! Test policies — mock `EditPolicy` implementations for tests.

use async_trait::async_trait;
use uuid::Uuid;

use draftlock_core::error::DomainError;
use draftlock_core::policy::{EditPolicy, Principal};

/// A policy that grants every principal edit access to every document.
#[derive(Debug, Clone, Copy)]
pub struct AllowAllPolicy;

#[async_trait]
impl EditPolicy for AllowAllPolicy {
    async fn can_edit(
        &self,
        _principal: Principal,
        _document_id: Uuid,
    ) -> Result<bool, DomainError> {
        Ok(true)
    }
}

/// A policy that denies every edit. Useful for testing the forbidden path.
#[derive(Debug, Clone, Copy)]
pub struct DenyAllPolicy;

#[async_trait]
impl EditPolicy for DenyAllPolicy {
    async fn can_edit(
        &self,
        _principal: Principal,
        _document_id: Uuid,
    ) -> Result<bool, DomainError> {
        Ok(false)
    }
}

/// A policy that always returns an infrastructure error. Useful for testing
/// error-handling paths.
#[derive(Debug, Clone, Copy)]
pub struct FailingPolicy;

#[async_trait]
impl EditPolicy for FailingPolicy {
    async fn can_edit(
        &self,
        _principal: Principal,
        _document_id: Uuid,
    ) -> Result<bool, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
