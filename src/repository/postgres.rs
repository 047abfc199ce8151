//! PostgreSQL-backed record store
//!
//! Documents live in a single `documents` table keyed by (collection, id)
//! with their fields in a JSONB column.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{postgres::PgRow, types::Json, Pool, Postgres, Row};

use super::store::{Collection, RecordStore, StoreError};
use crate::models::Document;

#[derive(Clone)]
pub struct PgRecordStore {
    pool: Pool<Postgres>,
}

impl PgRecordStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn row_to_document(row: PgRow) -> Result<Document, StoreError> {
    let id: String = row.try_get("id")?;
    let data: Value = row.try_get("data")?;
    Ok(Document::from_value(id, data))
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn fetch_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let rows = sqlx::query("SELECT id, data FROM documents WHERE collection = $1")
            .bind(collection.name())
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(collection = %collection, count = rows.len(), "Fetched collection");
        rows.into_iter().map(row_to_document).collect()
    }

    async fn fetch_where(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Document>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, data
            FROM documents
            WHERE collection = $1 AND data -> $2 = $3
            "#,
        )
        .bind(collection.name())
        .bind(field)
        .bind(Json(value))
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(
            collection = %collection,
            field,
            count = rows.len(),
            "Fetched filtered collection"
        );
        rows.into_iter().map(row_to_document).collect()
    }

    async fn fetch_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        sqlx::query("SELECT id, data FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection.name())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(row_to_document)
            .transpose()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
