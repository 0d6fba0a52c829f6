//! Notebook service
//!
//! High-level authoring logic for daily notes: loading a day (stored
//! or default), targeted edits, reordering, and copying the previous
//! day. Every mutation persists the whole column list; concurrent
//! edits race last-write-wins by design.

use chrono::{Duration, NaiveDate, Utc};

use crate::config::{DATE_KEY_FORMAT, MAX_TEXT_UNITS};
use crate::database::{DailyNote, Repository};
use crate::error::{AppError, Result};
use crate::layout::{segment, Category};

/// Parse a canonical `YYYY-MM-DD` date key.
pub fn parse_date_key(date_key: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_key, DATE_KEY_FORMAT)
        .map_err(|_| AppError::Validation(format!("invalid date key: {}", date_key)))
}

/// Cap text to the column's unit limit, counting display units rather
/// than characters so a digit pair costs one unit.
fn cap_text_units(text: &str) -> String {
    segment(text).take(MAX_TEXT_UNITS).map(|u| u.text).collect()
}

/// Service for loading and authoring daily notes
#[derive(Clone)]
pub struct NotebookService {
    repo: Repository,
}

impl NotebookService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Load the note for a date, materializing (without persisting)
    /// the default records when nothing is stored yet.
    pub async fn load_day(&self, date_key: &str) -> Result<DailyNote> {
        parse_date_key(date_key)?;

        match self.repo.get_note(date_key).await? {
            Some(note) => Ok(note),
            None => Ok(DailyNote::default_for(date_key)),
        }
    }

    /// Replace one record's text and persist the whole list.
    ///
    /// Text is capped to the column's unit limit here; the column
    /// builder truncates again at render time, so writes that bypass
    /// this cap still display safely.
    pub async fn set_text(
        &self,
        date_key: &str,
        id: i64,
        text: &str,
        author: &str,
    ) -> Result<DailyNote> {
        tracing::debug!("Setting text for record {} on {}", id, date_key);

        let mut note = self.load_day(date_key).await?;
        let record = note
            .columns
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(AppError::RecordNotFound(id))?;

        record.text = cap_text_units(text);

        self.persist(note, author).await
    }

    /// Replace one record's category and persist the whole list.
    pub async fn set_category(
        &self,
        date_key: &str,
        id: i64,
        category: Category,
        author: &str,
    ) -> Result<DailyNote> {
        tracing::debug!("Setting category for record {} on {}", id, date_key);

        let mut note = self.load_day(date_key).await?;
        let record = note
            .columns
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(AppError::RecordNotFound(id))?;

        record.category = category;

        self.persist(note, author).await
    }

    /// Swap the record at `index` with its neighbor.
    ///
    /// A move whose target falls outside the list is a silent no-op:
    /// the list is returned unchanged and nothing is persisted.
    pub async fn move_record(
        &self,
        date_key: &str,
        index: usize,
        direction: i32,
        author: &str,
    ) -> Result<DailyNote> {
        if direction != -1 && direction != 1 {
            return Err(AppError::Validation(format!(
                "move direction must be -1 or 1, got {}",
                direction
            )));
        }

        let mut note = self.load_day(date_key).await?;

        let target = index as i64 + i64::from(direction);
        if index >= note.columns.len() || target < 0 || target >= note.columns.len() as i64 {
            tracing::debug!("Ignoring out-of-bounds move at index {} on {}", index, date_key);
            return Ok(note);
        }

        note.columns.swap(index, target as usize);

        self.persist(note, author).await
    }

    /// Replace this date's list with the previous calendar day's.
    ///
    /// When the predecessor has no stored note the current state is
    /// left untouched and not-found is reported to the caller.
    pub async fn copy_from_previous_day(&self, date_key: &str, author: &str) -> Result<DailyNote> {
        let date = parse_date_key(date_key)?;
        let previous_key = (date - Duration::days(1)).format(DATE_KEY_FORMAT).to_string();

        let previous = self
            .repo
            .get_note(&previous_key)
            .await?
            .ok_or(AppError::NoteNotFound(previous_key.clone()))?;

        tracing::info!("Copying note from {} to {}", previous_key, date_key);

        let mut note = previous;
        note.date = date_key.to_string();

        self.persist(note, author).await
    }

    async fn persist(&self, mut note: DailyNote, author: &str) -> Result<DailyNote> {
        note.updated_by = Some(author.to_string());
        note.updated_at = Utc::now();

        self.repo.put_note(&note).await?;

        Ok(note)
    }
}
