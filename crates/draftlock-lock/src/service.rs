//! Application operations on the lock resource.
//!
//! Each operation is one request-scoped read/write cycle against the
//! metadata store. There is no compare-and-swap on claim: two sessions
//! racing to claim the same document both succeed and the later write wins.
//! That favors availability over strict mutual exclusion and matches the
//! advisory nature of the lock.

use tracing::debug;
use uuid::Uuid;

use draftlock_core::clock::Clock;
use draftlock_core::error::DomainError;
use draftlock_core::policy::{EditPolicy, Principal};
use draftlock_core::store::MetadataStore;

use crate::record::{EDIT_LOCK_KEY, LockRecord};
use crate::view::LockConfig;

/// Outcome of a lock release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Release {
    /// Whether a stored field was actually removed.
    pub deleted: bool,
    /// The record as it stood immediately before deletion.
    pub previous: Option<LockRecord>,
}

async fn ensure_can_edit(
    policy: &dyn EditPolicy,
    principal: Principal,
    document_id: Uuid,
) -> Result<(), DomainError> {
    if policy.can_edit(principal, document_id).await? {
        Ok(())
    } else {
        Err(DomainError::Forbidden(document_id))
    }
}

async fn read_record(
    store: &dyn MetadataStore,
    document_id: Uuid,
) -> Result<Option<LockRecord>, DomainError> {
    let raw = store.get(document_id, EDIT_LOCK_KEY).await?;

    Ok(raw.and_then(|raw| {
        let record = LockRecord::decode(&raw);
        if record.is_none() {
            debug!(%document_id, raw, "ignoring malformed lock field");
        }
        record
    }))
}

/// Reads the current lock record for a document.
///
/// Missing and malformed stored values both read as `None`; nothing in
/// storage is mutated.
///
/// # Errors
///
/// Returns `DomainError::Forbidden` if the principal may not edit the
/// document, or `DomainError::Infrastructure` on store failure.
pub async fn get_lock(
    policy: &dyn EditPolicy,
    store: &dyn MetadataStore,
    principal: Principal,
    document_id: Uuid,
) -> Result<Option<LockRecord>, DomainError> {
    ensure_can_edit(policy, principal, document_id).await?;
    read_record(store, document_id).await
}

/// Claims or refreshes the lock for the acting principal.
///
/// The field is overwritten unconditionally, including a live lock held by a
/// different principal. Ownership is enforced only by the edit capability;
/// the data layer is last-writer-wins. Returns the record as a subsequent
/// read would see it.
///
/// # Errors
///
/// Returns `DomainError::Forbidden` if the principal may not edit the
/// document, or `DomainError::Infrastructure` on store failure.
pub async fn claim_lock(
    policy: &dyn EditPolicy,
    store: &dyn MetadataStore,
    clock: &dyn Clock,
    principal: Principal,
    document_id: Uuid,
) -> Result<Option<LockRecord>, DomainError> {
    ensure_can_edit(policy, principal, document_id).await?;

    let record = LockRecord {
        time: clock.now().timestamp(),
        user: principal.id(),
    };
    store
        .set(document_id, EDIT_LOCK_KEY, &record.encode())
        .await?;

    read_record(store, document_id).await
}

/// Releases the lock on a document.
///
/// Captures the prior record for the response, then deletes the field
/// unconditionally. A live lock held by a different principal blocks the
/// release before any mutation; a stale foreign lock does not.
///
/// # Errors
///
/// Returns `DomainError::Forbidden` if the principal may not edit the
/// document, `DomainError::ForeignLock` if another principal holds a live
/// lock, or `DomainError::Infrastructure` on store failure.
pub async fn release_lock(
    policy: &dyn EditPolicy,
    store: &dyn MetadataStore,
    clock: &dyn Clock,
    config: &LockConfig,
    principal: Principal,
    document_id: Uuid,
) -> Result<Release, DomainError> {
    ensure_can_edit(policy, principal, document_id).await?;

    let previous = read_record(store, document_id).await?;

    if let Some(record) = previous
        && record.is_live(config, clock.now())
        && record.user != principal.id()
    {
        return Err(DomainError::ForeignLock { owner: record.user });
    }

    let deleted = store.delete(document_id, EDIT_LOCK_KEY).await?;

    Ok(Release { deleted, previous })
}
