use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::TrackingData;
use crate::storage::StorageError;

/// Name of the document holding the full tracking data.
pub const TRACKING_DOCUMENT: &str = "breastfeeding_data";

/// Named JSON documents in SQLite, one row per document.
///
/// A save replaces the whole document in a single statement, so readers never
/// observe a partial write.
#[derive(Clone)]
pub struct DocumentStore {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct DocumentRow {
    body: String,
}

impl DocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn load(&self, name: &str) -> Result<Option<String>, sqlx::Error> {
        let row: Option<DocumentRow> =
            sqlx::query_as("SELECT body FROM documents WHERE name = ?")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|r| r.body))
    }

    pub async fn save(&self, name: &str, body: &str) -> Result<(), sqlx::Error> {
        let updated_at = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO documents (name, body, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(name) DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at
            "#,
        )
        .bind(name)
        .bind(body)
        .bind(&updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Loads the tracking data. `None` if it was never saved.
    pub async fn load_tracking(&self) -> Result<Option<TrackingData>, StorageError> {
        match self.load(TRACKING_DOCUMENT).await? {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    pub async fn save_tracking(&self, data: &TrackingData) -> Result<(), StorageError> {
        let body = serde_json::to_string(data)?;
        self.save(TRACKING_DOCUMENT, &body).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;
    use crate::models::{DayKey, FeedingSession, Side};
    use tempfile::TempDir;

    struct TestContext {
        store: DocumentStore,
        _temp_dir: TempDir, // Keep alive for duration of test
    }

    async fn setup_store() -> TestContext {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let pool = init_db(&db_path).await.unwrap();
        TestContext {
            store: DocumentStore::new(pool),
            _temp_dir: temp_dir,
        }
    }

    #[tokio::test]
    async fn test_load_missing_returns_none() {
        let ctx = setup_store().await;
        assert!(ctx.store.load("nothing").await.unwrap().is_none());
        assert!(ctx.store.load_tracking().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_existing() {
        let ctx = setup_store().await;
        let store = &ctx.store;

        store.save("doc", "{\"v\":1}").await.unwrap();
        store.save("doc", "{\"v\":2}").await.unwrap();

        assert_eq!(store.load("doc").await.unwrap().as_deref(), Some("{\"v\":2}"));

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM documents")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(count.0, 1);
    }

    #[tokio::test]
    async fn test_documents_are_isolated() {
        let ctx = setup_store().await;
        let store = &ctx.store;

        store.save("a", "1").await.unwrap();
        store.save("b", "2").await.unwrap();

        assert_eq!(store.load("a").await.unwrap().as_deref(), Some("1"));
        assert_eq!(store.load("b").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_tracking_roundtrip() {
        let ctx = setup_store().await;
        let store = &ctx.store;

        let mut data = TrackingData::new();
        let day: DayKey = "5.3.2024".parse().unwrap();
        data.day_mut(day)
            .feeding_log
            .push(FeedingSession::new("14:00", "14:20", Side::Left).into());

        store.save_tracking(&data).await.unwrap();

        assert_eq!(store.load_tracking().await.unwrap(), Some(data));
    }

    #[tokio::test]
    async fn test_corrupt_document_is_a_decode_error() {
        let ctx = setup_store().await;
        ctx.store.save(TRACKING_DOCUMENT, "not json").await.unwrap();

        let result = ctx.store.load_tracking().await;
        assert!(matches!(result, Err(StorageError::Decode(_))));
    }
}
