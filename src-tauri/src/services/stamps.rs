//! Acknowledgement stamping service
//!
//! Any caller can stamp a day's note with a self-reported name. The
//! log is append-only and the "have I already stamped" check is a
//! best-effort heuristic: it matches the locally remembered name
//! against the day's log, so it is spoofable and not identity-bound.

use crate::config::{MAX_STAMP_NAME_LEN, SETTING_STAMP_NAME};
use crate::database::{Acknowledgement, Repository};
use crate::error::{AppError, Result};
use crate::services::notebook::parse_date_key;

/// Service for reading and appending acknowledgement stamps
#[derive(Clone)]
pub struct StampService {
    repo: Repository,
}

impl StampService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Append a stamp for `date_key`.
    ///
    /// Validation happens before any store contact: blank names and
    /// over-length names are rejected locally. The store assigns the
    /// timestamp; the trimmed name is remembered on this device for
    /// later [`StampService::has_stamped`] checks.
    pub async fn submit(&self, date_key: &str, name: &str) -> Result<Acknowledgement> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "stamp name must not be empty".to_string(),
            ));
        }
        if name.chars().count() > MAX_STAMP_NAME_LEN {
            return Err(AppError::Validation(format!(
                "stamp name is limited to {} characters",
                MAX_STAMP_NAME_LEN
            )));
        }
        parse_date_key(date_key)?;

        tracing::info!("Stamping {} as {:?}", date_key, name);

        let record = self.repo.append_acknowledgement(date_key, name).await?;
        self.repo.set_setting(SETTING_STAMP_NAME, name).await?;

        Ok(record)
    }

    /// A date's stamps in append order.
    pub async fn list(&self, date_key: &str) -> Result<Vec<Acknowledgement>> {
        self.repo.list_acknowledgements(date_key).await
    }

    /// Whether the name remembered on this device appears in the
    /// date's log. Best-effort only: a cleared device or a different
    /// name stamps again.
    pub async fn has_stamped(&self, date_key: &str) -> Result<bool> {
        let remembered = match self.repo.get_setting(SETTING_STAMP_NAME).await? {
            Some(name) => name,
            None => return Ok(false),
        };

        let stamps = self.repo.list_acknowledgements(date_key).await?;
        Ok(stamps.iter().any(|s| s.name == remembered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::initialize_database;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn create_test_service() -> StampService {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();

        initialize_database(&pool).await.unwrap();

        StampService::new(Repository::new(pool))
    }

    #[tokio::test]
    async fn test_blank_names_rejected_without_store_write() {
        let service = create_test_service().await;

        for name in ["", "   ", "\t\n"] {
            assert!(matches!(
                service.submit("2024-03-05", name).await,
                Err(AppError::Validation(_))
            ));
        }

        assert!(service.list("2024-03-05").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_over_length_name_rejected() {
        let service = create_test_service().await;

        let long = "あ".repeat(MAX_STAMP_NAME_LEN + 1);
        assert!(service.submit("2024-03-05", &long).await.is_err());
    }

    #[tokio::test]
    async fn test_submit_trims_and_remembers() {
        let service = create_test_service().await;

        let record = service.submit("2024-03-05", "  たろう  ").await.unwrap();
        assert_eq!(record.name, "たろう");
        assert_eq!(record.date_key, "2024-03-05");

        assert!(service.has_stamped("2024-03-05").await.unwrap());
        // The heuristic is per-date: another day is unstamped.
        assert!(!service.has_stamped("2024-03-06").await.unwrap());
    }

    #[tokio::test]
    async fn test_has_stamped_is_name_based_best_effort() {
        let service = create_test_service().await;

        service.submit("2024-03-05", "たろう").await.unwrap();

        // A device with no remembered name reports unstamped even
        // though the log contains an entry.
        service.repo.delete_setting(SETTING_STAMP_NAME).await.unwrap();
        assert!(!service.has_stamped("2024-03-05").await.unwrap());

        // Re-stamping under another name is allowed: the log keeps both.
        service.submit("2024-03-05", "たろう(いえ)").await.unwrap();
        let stamps = service.list("2024-03-05").await.unwrap();
        assert_eq!(stamps.len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_names_are_not_deduplicated() {
        let service = create_test_service().await;

        service.submit("2024-03-05", "たろう").await.unwrap();
        service.submit("2024-03-05", "たろう").await.unwrap();

        assert_eq!(service.list("2024-03-05").await.unwrap().len(), 2);
    }
}
