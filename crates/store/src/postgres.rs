//! PostgreSQL document store
//!
//! Documents are JSONB rows in a single `documents` table, partitioned by a
//! `collection` column and ordered by an insertion sequence. Unique keys
//! claimed by `insert_unique` are rows in `document_keys`, whose primary key
//! makes concurrent claims of the same value fail with a unique violation.

use folio_common::DocumentId;
use serde_json::Value;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{key_value, Body, Document, DocumentStore, StoreError, StoreResult};

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool for the given URL
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self::new(pool))
    }

    /// Apply the embedded schema migrations
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Document store migrations applied");
        Ok(())
    }
}

fn into_document(collection: &str, id: Uuid, body: Value) -> StoreResult<Document> {
    match body {
        Value::Object(body) => Ok(Document {
            id: DocumentId::from(id),
            body,
        }),
        _ => Err(StoreError::Corrupt {
            collection: collection.to_string(),
            id: DocumentId::from(id),
            reason: "stored body is not a JSON object".to_string(),
        }),
    }
}

fn duplicate_or_backend(err: sqlx::Error, collection: &str, field: &str) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            tracing::debug!(collection, field, "Unique key already claimed");
            StoreError::Duplicate {
                collection: collection.to_string(),
                field: field.to_string(),
            }
        }
        _ => StoreError::Backend(err),
    }
}

async fn insert_row(
    tx: &mut Transaction<'_, Postgres>,
    collection: &str,
    id: DocumentId,
    body: &Body,
) -> StoreResult<()> {
    sqlx::query(
        r#"
        INSERT INTO documents (id, collection, body)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(id.as_uuid())
    .bind(collection)
    .bind(Value::Object(body.clone()))
    .execute(&mut **tx)
    .await?;

    Ok(())
}

#[async_trait::async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: &str, body: Body) -> StoreResult<Document> {
        let id = DocumentId::new();
        let mut tx = self.pool.begin().await?;
        insert_row(&mut tx, collection, id, &body).await?;
        tx.commit().await?;

        Ok(Document { id, body })
    }

    async fn insert_unique(
        &self,
        collection: &str,
        key_field: &str,
        body: Body,
    ) -> StoreResult<Document> {
        let value = key_value(&body, key_field)?;
        let id = DocumentId::new();

        let mut tx = self.pool.begin().await?;
        insert_row(&mut tx, collection, id, &body).await?;

        sqlx::query(
            r#"
            INSERT INTO document_keys (collection, field, value, document_id)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(collection)
        .bind(key_field)
        .bind(&value)
        .bind(id.as_uuid())
        .execute(&mut *tx)
        .await
        .map_err(|e| duplicate_or_backend(e, collection, key_field))?;

        tx.commit().await?;

        Ok(Document { id, body })
    }

    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let rows = sqlx::query_as::<_, (Uuid, Value)>(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = $1
            ORDER BY seq ASC
            "#,
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, body)| into_document(collection, id, body))
            .collect()
    }

    async fn find_by_id(&self, collection: &str, id: DocumentId) -> StoreResult<Option<Document>> {
        let row = sqlx::query_as::<_, (Uuid, Value)>(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection)
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(id, body)| into_document(collection, id, body))
            .transpose()
    }

    async fn find_one_by(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> StoreResult<Option<Document>> {
        let row = sqlx::query_as::<_, (Uuid, Value)>(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = $1 AND body ->> $2 = $3
            ORDER BY seq ASC
            LIMIT 1
            "#,
        )
        .bind(collection)
        .bind(field)
        .bind(value)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(id, body)| into_document(collection, id, body))
            .transpose()
    }

    async fn replace(
        &self,
        collection: &str,
        id: DocumentId,
        body: Body,
    ) -> StoreResult<Option<Document>> {
        let body_value = Value::Object(body);
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, (Uuid, Value)>(
            r#"
            UPDATE documents
            SET body = $3
            WHERE collection = $1 AND id = $2
            RETURNING id, body
            "#,
        )
        .bind(collection)
        .bind(id.as_uuid())
        .bind(&body_value)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((id, stored)) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        // Keep claimed unique keys in step with the new body
        sqlx::query(
            r#"
            UPDATE document_keys
            SET value = COALESCE($2::jsonb ->> field, value)
            WHERE document_id = $1
            "#,
        )
        .bind(id)
        .bind(&body_value)
        .execute(&mut *tx)
        .await
        .map_err(|e| duplicate_or_backend(e, collection, "unique key"))?;

        tx.commit().await?;

        into_document(collection, id, stored).map(Some)
    }

    async fn delete(&self, collection: &str, id: DocumentId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
