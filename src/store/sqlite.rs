use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use super::{Document, DocumentStore};
use crate::error::{AppError, Result};

#[derive(FromRow)]
struct DocumentRow {
    id: String,
    body: String,
}

/// Document store over a single SQLite table. This is deployment glue, not
/// a storage engine: bodies are opaque JSON and the only query shape beyond
/// key lookup is a `json_extract` equality match on an indexed field.
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `url` and applies the embedded migrations.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        Ok(Self::new(pool))
    }

    /// True when no collection holds any document. The seed binary checks
    /// this before writing.
    pub async fn is_empty(&self) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        Ok(count == 0)
    }

    fn row_to_document(row: DocumentRow) -> Result<Document> {
        let body: Value = serde_json::from_str(&row.body)
            .map_err(|e| AppError::Decode(format!("document {}: {}", row.id, e)))?;

        Ok(Document { id: row.id, body })
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn list_all(&self, collection: &str) -> Result<Vec<Document>> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = ?
            ORDER BY created_at, id
            "#,
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Store(e.to_string()))?;

        rows.into_iter().map(Self::row_to_document).collect()
    }

    async fn list_where(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Document>> {
        let path = format!("$.{}", field);
        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = ? AND json_extract(body, ?) = ?
            ORDER BY created_at, id
            "#,
        )
        .bind(collection)
        .bind(&path)
        .bind(value)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Store(e.to_string()))?;

        rows.into_iter().map(Self::row_to_document).collect()
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = ? AND id = ?
            "#,
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Store(e.to_string()))?;

        row.map(Self::row_to_document).transpose()
    }

    async fn insert(&self, collection: &str, body: Value) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let body_text = body.to_string();
        let now = Utc::now().naive_utc();

        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, body, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(collection)
        .bind(&id)
        .bind(&body_text)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Store(e.to_string()))?;

        Ok(id)
    }

    async fn put(&self, collection: &str, id: &str, body: Value) -> Result<()> {
        let body_text = body.to_string();
        let now = Utc::now().naive_utc();

        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, body, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT (collection, id)
            DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(&body_text)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Store(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM documents
            WHERE collection = ? AND id = ?
            "#,
        )
        .bind(collection)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Store(e.to_string()))?;

        Ok(())
    }
}
