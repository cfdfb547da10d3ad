use super::{ensure_mutable, ensure_object, Collection, DocumentStore, StoredDocument};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;
use tokio::sync::{OnceCell, RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    body: Json<Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<DocumentRow> for StoredDocument {
    fn from(row: DocumentRow) -> Self {
        StoredDocument {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            body: row.body.0,
        }
    }
}

/// PostgreSQL-backed document store.
///
/// The pool is created on the first operation (or explicit `connect`) and
/// reused afterwards. `OnceCell` makes concurrent first callers await the same
/// initialization instead of opening their own pools.
pub struct PgDocumentStore {
    database_url: String,
    max_connections: u32,
    pool: RwLock<OnceCell<PgPool>>,
}

impl PgDocumentStore {
    pub fn new(database_url: impl Into<String>, max_connections: u32) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: max_connections.max(1),
            pool: RwLock::new(OnceCell::new()),
        }
    }

    async fn pool(&self) -> Result<PgPool> {
        let cell = self.pool.read().await;
        let pool = cell
            .get_or_try_init(|| async {
                let pool = PgPoolOptions::new()
                    .max_connections(self.max_connections)
                    .connect(&self.database_url)
                    .await
                    .context("Failed to connect to PostgreSQL")?;

                ensure_schema(&pool).await?;
                info!(
                    max_connections = self.max_connections,
                    "✓ Document store connected"
                );
                Ok::<_, anyhow::Error>(pool)
            })
            .await?;

        // PgPool is an Arc internally; cloning hands out the shared pool
        Ok(pool.clone())
    }
}

/// Create one table per collection (safe to run always).
async fn ensure_schema(pool: &PgPool) -> Result<()> {
    for collection in Collection::ALL {
        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id UUID PRIMARY KEY,
                body JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL
            )",
            collection.name()
        );
        sqlx::query(&ddl)
            .execute(pool)
            .await
            .with_context(|| format!("Failed to create {} table", collection))?;
    }
    Ok(())
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn connect(&self) -> Result<()> {
        self.pool().await.map(|_| ())
    }

    async fn create(&self, collection: Collection, body: Value) -> Result<StoredDocument> {
        ensure_object(&body)?;
        let pool = self.pool().await?;
        let now = Utc::now();

        let row: DocumentRow = sqlx::query_as(&format!(
            "INSERT INTO {} (id, body, created_at, updated_at)
             VALUES ($1, $2, $3, $3)
             RETURNING id, body, created_at, updated_at",
            collection.name()
        ))
        .bind(Uuid::new_v4())
        .bind(Json(&body))
        .bind(now)
        .fetch_one(&pool)
        .await
        .with_context(|| format!("Failed to insert into {}", collection))?;

        Ok(row.into())
    }

    async fn create_many(
        &self,
        collection: Collection,
        bodies: Vec<Value>,
    ) -> Result<Vec<StoredDocument>> {
        for body in &bodies {
            ensure_object(body)?;
        }
        let pool = self.pool().await?;
        let now = Utc::now();
        let sql = format!(
            "INSERT INTO {} (id, body, created_at, updated_at)
             VALUES ($1, $2, $3, $3)
             RETURNING id, body, created_at, updated_at",
            collection.name()
        );

        let mut tx = pool.begin().await.context("Failed to begin transaction")?;
        let mut created = Vec::with_capacity(bodies.len());
        for body in &bodies {
            let row: DocumentRow = sqlx::query_as(&sql)
                .bind(Uuid::new_v4())
                .bind(Json(body))
                .bind(now)
                .fetch_one(&mut *tx)
                .await
                .with_context(|| format!("Failed to bulk insert into {}", collection))?;
            created.push(row.into());
        }
        tx.commit().await.context("Failed to commit bulk insert")?;

        Ok(created)
    }

    async fn count(&self, collection: Collection) -> Result<u64> {
        let pool = self.pool().await?;
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", collection.name()))
            .fetch_one(&pool)
            .await
            .with_context(|| format!("Failed to count {}", collection))?;
        Ok(count.max(0) as u64)
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<StoredDocument>> {
        let pool = self.pool().await?;
        let rows: Vec<DocumentRow> = sqlx::query_as(&format!(
            "SELECT id, body, created_at, updated_at FROM {} ORDER BY created_at ASC, id ASC",
            collection.name()
        ))
        .fetch_all(&pool)
        .await
        .with_context(|| format!("Failed to list {}", collection))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<StoredDocument>> {
        let pool = self.pool().await?;
        let row: Option<DocumentRow> = sqlx::query_as(&format!(
            "SELECT id, body, created_at, updated_at FROM {} WHERE id = $1",
            collection.name()
        ))
        .bind(id)
        .fetch_optional(&pool)
        .await
        .with_context(|| format!("Failed to fetch {} {}", collection, id))?;

        Ok(row.map(Into::into))
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: Uuid,
        body: Value,
    ) -> Result<Option<StoredDocument>> {
        ensure_mutable(collection)?;
        ensure_object(&body)?;
        let pool = self.pool().await?;

        let row: Option<DocumentRow> = sqlx::query_as(&format!(
            "UPDATE {} SET body = $2, updated_at = $3 WHERE id = $1
             RETURNING id, body, created_at, updated_at",
            collection.name()
        ))
        .bind(id)
        .bind(Json(&body))
        .bind(Utc::now())
        .fetch_optional(&pool)
        .await
        .with_context(|| format!("Failed to update {} {}", collection, id))?;

        Ok(row.map(Into::into))
    }

    async fn delete_by_id(&self, collection: Collection, id: Uuid) -> Result<bool> {
        ensure_mutable(collection)?;
        let pool = self.pool().await?;

        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", collection.name()))
            .bind(id)
            .execute(&pool)
            .await
            .with_context(|| format!("Failed to delete {} {}", collection, id))?;

        Ok(result.rows_affected() > 0)
    }

    async fn close(&self) {
        let mut cell = self.pool.write().await;
        if let Some(pool) = cell.take() {
            pool.close().await;
            info!("Document store connection closed");
        }
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
