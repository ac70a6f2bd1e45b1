//! `PostgreSQL` implementation of the `EditPolicy` trait.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use draftlock_core::error::DomainError;
use draftlock_core::policy::{EditPolicy, Principal};

/// Edit policy backed by the `document_editors` table: a principal may edit
/// a document iff an editor row exists for the pair.
#[derive(Debug, Clone)]
pub struct PgEditPolicy {
    pool: PgPool,
}

impl PgEditPolicy {
    /// Creates a new `PgEditPolicy`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Grants `principal` edit access to `document_id`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` on database failure.
    pub async fn grant(&self, principal: Principal, document_id: Uuid) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO document_editors (document_id, user_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(document_id)
        .bind(principal.id())
        .execute(&self.pool)
        .await
        .map_err(|err| DomainError::Infrastructure(err.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl EditPolicy for PgEditPolicy {
    async fn can_edit(
        &self,
        principal: Principal,
        document_id: Uuid,
    ) -> Result<bool, DomainError> {
        let row: Option<(i64,)> = sqlx::query_as(
            "SELECT user_id FROM document_editors WHERE document_id = $1 AND user_id = $2",
        )
        .bind(document_id)
        .bind(principal.id())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| DomainError::Infrastructure(err.to_string()))?;

        Ok(row.is_some())
    }
}
