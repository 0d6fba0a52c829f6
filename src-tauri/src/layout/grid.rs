//! Notebook page composer and view modes
//!
//! Assembles the date column and the day's content columns into one
//! fixed-aspect page, and wraps the page in the role-appropriate view
//! model handed to the frontend.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{DATE_KEY_FORMAT, NOTEBOOK_TITLE, PAGE_ASPECT_RATIO, STAMP_PROMPT};
use crate::database::{Acknowledgement, ContentRecord};
use crate::layout::column::Column;
use crate::layout::{build_column, build_date_column};

/// One rendered notebook page.
///
/// Columns are listed in visual right-to-left order: the date column
/// sits at the leading (right) edge, content columns follow in record
/// list order. Reordering a record changes this visual order without
/// touching record ids.
#[derive(Debug, Clone, Serialize)]
pub struct NotebookPage {
    pub date_key: String,
    /// Header band text.
    pub title: String,
    /// Right-to-left column strip, date column first.
    pub columns: Vec<Column>,
    /// Footer band text above the stamp area.
    pub footer: String,
    /// Height over width of the page region.
    pub aspect_ratio: f64,
}

/// Compose the page for `date` from the day's record list.
pub fn compose_notebook(date: NaiveDate, records: &[ContentRecord]) -> NotebookPage {
    let mut columns = Vec::with_capacity(records.len() + 1);
    columns.push(build_date_column(date));
    columns.extend(records.iter().map(build_column));

    NotebookPage {
        date_key: date.format(DATE_KEY_FORMAT).to_string(),
        title: NOTEBOOK_TITLE.to_string(),
        columns,
        footer: STAMP_PROMPT.to_string(),
        aspect_ratio: PAGE_ASPECT_RATIO,
    }
}

/// Role-dependent UI surface.
///
/// Both variants are built from the same underlying day data; they
/// never share mutable UI state. The author variant additionally
/// carries the raw records so the edit surface can bind to them.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ViewMode {
    Author {
        page: NotebookPage,
        records: Vec<ContentRecord>,
        stamps: Vec<Acknowledgement>,
    },
    Viewer {
        page: NotebookPage,
        stamps: Vec<Acknowledgement>,
        has_stamped: bool,
    },
}

impl ViewMode {
    pub fn author(
        date: NaiveDate,
        records: Vec<ContentRecord>,
        stamps: Vec<Acknowledgement>,
    ) -> Self {
        let page = compose_notebook(date, &records);
        ViewMode::Author {
            page,
            records,
            stamps,
        }
    }

    pub fn viewer(
        date: NaiveDate,
        records: &[ContentRecord],
        stamps: Vec<Acknowledgement>,
        has_stamped: bool,
    ) -> Self {
        ViewMode::Viewer {
            page: compose_notebook(date, records),
            stamps,
            has_stamped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GRID_ROWS;
    use crate::layout::cell::Category;
    use crate::layout::column::ColumnKind;

    fn records() -> Vec<ContentRecord> {
        vec![
            ContentRecord {
                id: 1,
                category: Category::Contact,
                text: "うんどうかい".to_string(),
            },
            ContentRecord {
                id: 2,
                category: Category::Homework,
                text: "こくご 12ぺえじ".to_string(),
            },
        ]
    }

    #[test]
    fn test_date_column_leads_the_strip() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let page = compose_notebook(date, &records());

        assert_eq!(page.date_key, "2024-03-05");
        assert_eq!(page.columns.len(), 3);
        assert_eq!(page.columns[0].kind, ColumnKind::Date);
        assert_eq!(page.columns[1].kind, ColumnKind::Content);
        assert!(page.columns.iter().all(|c| c.cells.len() == GRID_ROWS));
    }

    #[test]
    fn test_content_columns_follow_record_order() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let mut list = records();
        let page_before = compose_notebook(date, &list);

        list.swap(0, 1);
        let page_after = compose_notebook(date, &list);

        assert_eq!(page_before.columns[1], page_after.columns[2]);
        assert_eq!(page_before.columns[2], page_after.columns[1]);
    }

    #[test]
    fn test_view_modes_built_from_same_data() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let list = records();

        let author = ViewMode::author(date, list.clone(), Vec::new());
        let viewer = ViewMode::viewer(date, &list, Vec::new(), false);

        match (author, viewer) {
            (
                ViewMode::Author { page: a, records, .. },
                ViewMode::Viewer { page: v, .. },
            ) => {
                assert_eq!(a.columns, v.columns);
                assert_eq!(records, list);
            }
            _ => unreachable!(),
        }
    }
}
