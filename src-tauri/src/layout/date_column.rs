//! Date column builder
//!
//! Formats the selected date as a month/day label and weekday kanji,
//! then lays both out into the same fixed-height strip as a content
//! column. No marker cell is reserved here.

use chrono::{Datelike, NaiveDate};

use crate::config::GRID_ROWS;
use crate::layout::cell::Cell;
use crate::layout::column::{Column, ColumnKind};
use crate::layout::segment::segment;

/// Weekday kanji, Sunday first.
const WEEKDAY_KANJI: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Build the header-style date column for `date`.
///
/// Layout: two leading blanks, the segmented `{month}月{day}日` label
/// (1-based, no zero padding), one blank separator, then the weekday
/// kanji. Truncated and padded to the grid height like any column.
pub fn build_date_column(date: NaiveDate) -> Column {
    let label = format!("{}月{}日", date.month(), date.day());
    let weekday = WEEKDAY_KANJI[date.weekday().num_days_from_sunday() as usize];

    let mut cells = vec![Cell::Blank, Cell::Blank];
    for unit in segment(&label) {
        cells.push(Cell::glyph(&unit));
    }
    cells.push(Cell::Blank);
    for unit in segment(weekday) {
        cells.push(Cell::glyph(&unit));
    }

    cells.truncate(GRID_ROWS);
    while cells.len() < GRID_ROWS {
        cells.push(Cell::Blank);
    }

    Column {
        kind: ColumnKind::Date,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(text: &str) -> Cell {
        Cell::Glyph {
            text: text.to_string(),
            paired: text.len() == 2 && text.bytes().all(|b| b.is_ascii_digit()),
            upright: text.len() == 1 && text.as_bytes()[0].is_ascii_alphanumeric(),
        }
    }

    #[test]
    fn test_tuesday_march_fifth() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let column = build_date_column(date);

        assert_eq!(column.kind, ColumnKind::Date);
        assert_eq!(column.cells.len(), GRID_ROWS);
        assert_eq!(
            column.cells[..8],
            [
                Cell::Blank,
                Cell::Blank,
                glyph("3"),
                glyph("月"),
                glyph("5"),
                glyph("日"),
                Cell::Blank,
                glyph("火"),
            ]
        );
        assert!(column.cells[8..].iter().all(|c| *c == Cell::Blank));
    }

    #[test]
    fn test_two_digit_month_and_day_pair_up() {
        // 2024-12-25 is a Wednesday.
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        let column = build_date_column(date);

        assert_eq!(
            column.cells[..8],
            [
                Cell::Blank,
                Cell::Blank,
                glyph("12"),
                glyph("月"),
                glyph("25"),
                glyph("日"),
                Cell::Blank,
                glyph("水"),
            ]
        );
    }

    #[test]
    fn test_always_grid_height() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(build_date_column(date).cells.len(), GRID_ROWS);
    }
}
