//! Database models
//!
//! Rust structs representing stored documents and log entries.
//! All models use serde for serialization to the frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::config::DEFAULT_COLUMN_COUNT;
use crate::layout::Category;

/// One content column of a day's note.
///
/// `id` is stable identity within the day and is used for targeted
/// updates; the position in the day's list IS the display order, so
/// reordering swaps list positions and never rewrites ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: i64,
    pub category: Category,
    pub text: String,
}

/// The aggregate document stored per date key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyNote {
    /// Canonical `YYYY-MM-DD` primary key.
    pub date: String,
    pub columns: Vec<ContentRecord>,
    pub updated_by: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl DailyNote {
    /// Materialize the unsaved default note for a date with no stored
    /// document: eight records, ids 1-8, categories pre-assigned,
    /// empty text.
    pub fn default_for(date_key: &str) -> Self {
        const DEFAULT_CATEGORIES: [Category; DEFAULT_COLUMN_COUNT] = [
            Category::Contact,
            Category::Handout,
            Category::Homework,
            Category::Homework,
            Category::Belongings,
            Category::Normal,
            Category::Normal,
            Category::Empty,
        ];

        let columns = DEFAULT_CATEGORIES
            .iter()
            .enumerate()
            .map(|(i, category)| ContentRecord {
                id: (i + 1) as i64,
                category: *category,
                text: String::new(),
            })
            .collect();

        Self {
            date: date_key.to_string(),
            columns,
            updated_by: None,
            updated_at: Utc::now(),
        }
    }
}

/// A named "I have read this" stamp in a date's append-only log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Acknowledgement {
    pub id: String,
    pub date_key: String,
    /// Self-reported viewer name; not authenticated, not unique.
    pub name: String,
    /// Assigned by the store at append time.
    pub created_at: DateTime<Utc>,
}
