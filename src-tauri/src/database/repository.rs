//! Repository layer for the document store
//!
//! Load/save of whole daily-note documents keyed by date, the
//! append-only acknowledgement log, and device-local settings.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use super::models::{Acknowledgement, DailyNote};
use crate::error::Result;

/// Raw row shape of the `daily_notes` table; the column list is stored
/// as one JSON document.
#[derive(FromRow)]
struct DailyNoteRow {
    date_key: String,
    columns_json: String,
    updated_by: Option<String>,
    updated_at: DateTime<Utc>,
}

impl DailyNoteRow {
    fn into_note(self) -> Result<DailyNote> {
        Ok(DailyNote {
            date: self.date_key,
            columns: serde_json::from_str(&self.columns_json)?,
            updated_by: self.updated_by,
            updated_at: self.updated_at,
        })
    }
}

/// Repository for document store operations
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the stored note for a date key, if any.
    pub async fn get_note(&self, date_key: &str) -> Result<Option<DailyNote>> {
        let row = sqlx::query_as::<_, DailyNoteRow>(
            r#"
            SELECT date_key, columns_json, updated_by, updated_at
            FROM daily_notes WHERE date_key = ?
            "#,
        )
        .bind(date_key)
        .fetch_optional(&self.pool)
        .await?;

        row.map(DailyNoteRow::into_note).transpose()
    }

    /// Write a note as one whole document. Overwrites any existing
    /// document for the same date (last-write-wins).
    pub async fn put_note(&self, note: &DailyNote) -> Result<()> {
        let columns_json = serde_json::to_string(&note.columns)?;

        sqlx::query(
            r#"
            INSERT INTO daily_notes (date_key, columns_json, updated_by, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(date_key) DO UPDATE SET
                columns_json = excluded.columns_json,
                updated_by = excluded.updated_by,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&note.date)
        .bind(&columns_json)
        .bind(&note.updated_by)
        .bind(note.updated_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!("Stored note for date: {}", note.date);
        Ok(())
    }

    /// Append one acknowledgement with a store-assigned timestamp.
    pub async fn append_acknowledgement(
        &self,
        date_key: &str,
        name: &str,
    ) -> Result<Acknowledgement> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let record = sqlx::query_as::<_, Acknowledgement>(
            r#"
            INSERT INTO acknowledgements (id, date_key, name, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(date_key)
        .bind(name)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Appended acknowledgement {} for date: {}", id, date_key);
        Ok(record)
    }

    /// List a date's acknowledgements in append order.
    pub async fn list_acknowledgements(&self, date_key: &str) -> Result<Vec<Acknowledgement>> {
        let records = sqlx::query_as::<_, Acknowledgement>(
            r#"
            SELECT * FROM acknowledgements
            WHERE date_key = ?
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(date_key)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Get/set settings
    pub async fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM settings WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value)
    }

    pub async fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value) VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        tracing::debug!("Set setting: {}", key);
        Ok(())
    }

    pub async fn delete_setting(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM settings WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::schema::initialize_database;
    use crate::layout::Category;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn create_test_repo() -> Repository {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();

        initialize_database(&pool).await.unwrap();

        Repository::new(pool)
    }

    #[tokio::test]
    async fn test_absent_note_reads_as_none() {
        let repo = create_test_repo().await;

        let note = repo.get_note("2024-03-05").await.unwrap();
        assert!(note.is_none());
    }

    #[tokio::test]
    async fn test_put_and_get_note_round_trip() {
        let repo = create_test_repo().await;

        let mut note = DailyNote::default_for("2024-03-05");
        note.columns[0].text = "うんどうかい".to_string();
        note.updated_by = Some("sensei@classroom.example".to_string());

        repo.put_note(&note).await.unwrap();

        let stored = repo.get_note("2024-03-05").await.unwrap().unwrap();
        assert_eq!(stored.columns, note.columns);
        assert_eq!(stored.updated_by, note.updated_by);
    }

    #[tokio::test]
    async fn test_put_note_overwrites_whole_document() {
        let repo = create_test_repo().await;

        let mut first = DailyNote::default_for("2024-03-05");
        first.columns[0].text = "first".to_string();
        repo.put_note(&first).await.unwrap();

        let mut second = DailyNote::default_for("2024-03-05");
        second.columns.truncate(2);
        second.columns[1].category = Category::Handout;
        repo.put_note(&second).await.unwrap();

        let stored = repo.get_note("2024-03-05").await.unwrap().unwrap();
        assert_eq!(stored.columns.len(), 2);
        assert_eq!(stored.columns[1].category, Category::Handout);
    }

    #[tokio::test]
    async fn test_acknowledgements_append_in_order() {
        let repo = create_test_repo().await;

        for name in ["たろう", "はなこ", "たろう"] {
            repo.append_acknowledgement("2024-03-05", name)
                .await
                .unwrap();
        }

        let stamps = repo.list_acknowledgements("2024-03-05").await.unwrap();
        let names: Vec<&str> = stamps.iter().map(|s| s.name.as_str()).collect();

        // Duplicate names are allowed; order is append order.
        assert_eq!(names, vec!["たろう", "はなこ", "たろう"]);

        let other = repo.list_acknowledgements("2024-03-06").await.unwrap();
        assert!(other.is_empty());
    }

    #[tokio::test]
    async fn test_settings() {
        let repo = create_test_repo().await;

        repo.set_setting("stamp_name", "たろう").await.unwrap();
        assert_eq!(
            repo.get_setting("stamp_name").await.unwrap(),
            Some("たろう".to_string())
        );

        repo.set_setting("stamp_name", "はなこ").await.unwrap();
        assert_eq!(
            repo.get_setting("stamp_name").await.unwrap(),
            Some("はなこ".to_string())
        );

        repo.delete_setting("stamp_name").await.unwrap();
        assert_eq!(repo.get_setting("stamp_name").await.unwrap(), None);
    }
}
