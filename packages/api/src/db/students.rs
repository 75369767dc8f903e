//! Postgres-backed [`DocumentStore`] for the student collection.

use records::{DocumentStore, RecordId, StoreError, StudentFields, StudentRecord};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;
use tokio::sync::OnceCell;
use uuid::Uuid;

use super::pool::{get_pool, DbError};
use crate::settings;

static STUDENTS: OnceCell<PgStudentStore> = OnceCell::const_new();

/// The shared store for the configured collection.
pub async fn students() -> Result<&'static PgStudentStore, DbError> {
    STUDENTS
        .get_or_try_init(|| async {
            let pool = get_pool().await?;
            let collection = settings::config().collection.name.clone();
            Ok(PgStudentStore::new(pool.clone(), collection))
        })
        .await
}

/// One collection of the `documents` table.
#[derive(Clone, Debug)]
pub struct PgStudentStore {
    pool: PgPool,
    collection: String,
}

fn unavailable(e: sqlx::Error) -> StoreError {
    tracing::error!("database error: {e}");
    StoreError::Unavailable(e.to_string())
}

fn decode_rows(rows: impl IntoIterator<Item = (Uuid, Value)>) -> Vec<StudentRecord> {
    rows.into_iter()
        .filter_map(|(id, data)| match serde_json::from_value::<StudentFields>(data) {
            Ok(fields) => Some(StudentRecord::new(RecordId::new(id.to_string()), fields)),
            Err(e) => {
                tracing::warn!(%id, "skipping unreadable student document: {e}");
                None
            }
        })
        .collect()
}

/// Ids not shaped like a UUID cannot name a stored document.
fn parse_id(id: &RecordId) -> Result<Uuid, StoreError> {
    Uuid::parse_str(id.as_str()).map_err(|_| StoreError::NotFound(id.clone()))
}

impl PgStudentStore {
    pub fn new(pool: PgPool, collection: impl Into<String>) -> Self {
        Self {
            pool,
            collection: collection.into(),
        }
    }

    /// Every document in the collection. Documents that are not JSON objects
    /// are skipped with a warning instead of failing the whole list.
    pub async fn fetch_all(&self) -> Result<Vec<StudentRecord>, StoreError> {
        let rows: Vec<(Uuid, Json<Value>)> = sqlx::query_as(
            "SELECT id, data FROM documents WHERE collection = $1 ORDER BY created_at, id",
        )
        .bind(&self.collection)
        .fetch_all(&self.pool)
        .await
        .map_err(unavailable)?;

        Ok(decode_rows(rows.into_iter().map(|(id, Json(data))| (id, data))))
    }

    pub async fn insert_document(&self, fields: StudentFields) -> Result<RecordId, StoreError> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO documents (id, collection, data) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(&self.collection)
            .bind(Json(&fields))
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;
        Ok(RecordId::new(id.to_string()))
    }

    pub async fn replace_document(
        &self,
        id: &RecordId,
        fields: StudentFields,
    ) -> Result<(), StoreError> {
        let uuid = parse_id(id)?;
        let result = sqlx::query(
            "UPDATE documents SET data = $3, updated_at = now() WHERE id = $1 AND collection = $2",
        )
        .bind(uuid)
        .bind(&self.collection)
        .bind(Json(&fields))
        .execute(&self.pool)
        .await
        .map_err(unavailable)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.clone()));
        }
        Ok(())
    }

    pub async fn delete_document(&self, id: &RecordId) -> Result<(), StoreError> {
        let uuid = parse_id(id)?;
        let result = sqlx::query("DELETE FROM documents WHERE id = $1 AND collection = $2")
            .bind(uuid)
            .bind(&self.collection)
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.clone()));
        }
        Ok(())
    }
}

impl DocumentStore for PgStudentStore {
    async fn list_all(&self) -> Result<Vec<StudentRecord>, StoreError> {
        self.fetch_all().await
    }

    async fn insert(&self, fields: StudentFields) -> Result<RecordId, StoreError> {
        self.insert_document(fields).await
    }

    async fn replace(&self, id: &RecordId, fields: StudentFields) -> Result<(), StoreError> {
        self.replace_document(id, fields).await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), StoreError> {
        self.delete_document(id).await
    }
}
