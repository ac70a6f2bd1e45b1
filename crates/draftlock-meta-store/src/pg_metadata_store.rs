//! `PostgreSQL` implementation of the `MetadataStore` trait.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use draftlock_core::error::DomainError;
use draftlock_core::store::MetadataStore;

/// PostgreSQL-backed metadata store over the `document_meta` table.
#[derive(Debug, Clone)]
pub struct PgMetadataStore {
    pool: PgPool,
}

impl PgMetadataStore {
    /// Creates a new `PgMetadataStore`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn infra(err: sqlx::Error) -> DomainError {
    DomainError::Infrastructure(err.to_string())
}

#[async_trait]
impl MetadataStore for PgMetadataStore {
    async fn get(&self, document_id: Uuid, key: &str) -> Result<Option<String>, DomainError> {
        let value: Option<(String,)> = sqlx::query_as(
            "SELECT meta_value FROM document_meta WHERE document_id = $1 AND meta_key = $2",
        )
        .bind(document_id)
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(infra)?;

        Ok(value.map(|(v,)| v))
    }

    async fn set(&self, document_id: Uuid, key: &str, value: &str) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO document_meta (document_id, meta_key, meta_value)
             VALUES ($1, $2, $3)
             ON CONFLICT (document_id, meta_key) DO UPDATE SET meta_value = EXCLUDED.meta_value",
        )
        .bind(document_id)
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(infra)?;

        Ok(())
    }

    async fn delete(&self, document_id: Uuid, key: &str) -> Result<bool, DomainError> {
        let result =
            sqlx::query("DELETE FROM document_meta WHERE document_id = $1 AND meta_key = $2")
                .bind(document_id)
                .bind(key)
                .execute(&self.pool)
                .await
                .map_err(infra)?;

        Ok(result.rows_affected() > 0)
    }
}
