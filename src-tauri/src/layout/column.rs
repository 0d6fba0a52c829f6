//! Content column builder
//!
//! Maps one content record to the fixed-height cell strip that renders
//! as a single vertical column of the notebook grid.

use serde::{Deserialize, Serialize};

use crate::config::GRID_ROWS;
use crate::database::ContentRecord;
use crate::layout::cell::Cell;
use crate::layout::segment::segment;

/// How a column participates in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Marker cell followed by segmented record text.
    Content,
    /// Header-style date/weekday column, pure text layout.
    Date,
}

/// A fixed-length strip of exactly [`GRID_ROWS`] cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub kind: ColumnKind,
    pub cells: Vec<Cell>,
}

/// Build the column for one content record.
///
/// Cell 0 is the category marker; cells 1 onward carry the segmented
/// text. Overflow beyond the grid height is dropped, shortfall is
/// padded with blanks. This never fails: over-length text and unknown
/// categories degrade instead of erroring.
pub fn build_column(record: &ContentRecord) -> Column {
    let mut cells = Vec::with_capacity(GRID_ROWS);
    cells.push(Cell::Marker {
        category: record.category,
    });

    for unit in segment(&record.text).take(GRID_ROWS - 1) {
        cells.push(Cell::glyph(&unit));
    }
    while cells.len() < GRID_ROWS {
        cells.push(Cell::Blank);
    }

    Column {
        kind: ColumnKind::Content,
        cells,
    }
}
