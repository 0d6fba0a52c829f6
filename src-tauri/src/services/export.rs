//! Notebook PDF export
//!
//! Renders a composed notebook page to a paginated PDF document named
//! `notebook-{date}.pdf`. Columns keep their right-to-left reading
//! order: the date column lands at the right edge of the table.

use std::path::PathBuf;

use genpdf::elements::{Break, FrameCellDecorator, Paragraph, TableLayout};
use genpdf::style::Style;
use genpdf::{Alignment, Document, Element, SimplePageDecorator};

use crate::config::{
    EXPORT_FALLBACK_FONT_FAMILY, EXPORT_FONT_FAMILY, EXPORT_FONT_SIZE_PT, GRID_ROWS,
};
use crate::error::{AppError, Result};
use crate::layout::{Cell, NotebookPage};

/// Text placed into one PDF table cell.
fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Blank => String::new(),
        Cell::Marker { category } => category
            .marker_glyph()
            .map(String::from)
            .unwrap_or_default(),
        Cell::Glyph { text, .. } => text.clone(),
    }
}

/// Service rendering notebook pages to PDF files
#[derive(Clone)]
pub struct ExportService {
    export_dir: PathBuf,
    fonts_dir: PathBuf,
}

impl ExportService {
    pub fn new(export_dir: PathBuf, fonts_dir: PathBuf) -> Self {
        Self {
            export_dir,
            fonts_dir,
        }
    }

    /// Destination file for a date's export.
    pub fn output_path(&self, date_key: &str) -> PathBuf {
        self.export_dir.join(format!("notebook-{}.pdf", date_key))
    }

    /// Render `page` and write `notebook-{date}.pdf`, returning the
    /// written path. Failures surface as export errors and leave no
    /// partial state behind beyond the target file itself.
    pub async fn export_pdf(&self, page: &NotebookPage) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.export_dir).await?;

        let output = self.output_path(&page.date_key);
        let doc = self.build_document(page)?;

        doc.render_to_file(&output)
            .map_err(|e| AppError::Export(format!("failed to write {}: {}", output.display(), e)))?;

        tracing::info!("Exported notebook to {:?}", output);
        Ok(output)
    }

    fn build_document(&self, page: &NotebookPage) -> Result<Document> {
        let font_family = self.load_font()?;

        let mut doc = Document::new(font_family);
        doc.set_title(page.title.as_str());
        doc.set_font_size(EXPORT_FONT_SIZE_PT);
        doc.set_line_spacing(1.2);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);

        doc.push(
            Paragraph::new(page.title.as_str())
                .aligned(Alignment::Center)
                .styled(Style::new().bold().with_font_size(16)),
        );
        doc.push(
            Paragraph::new(page.date_key.as_str())
                .aligned(Alignment::Center)
                .styled(Style::new().with_font_size(9)),
        );
        doc.push(Break::new(1));

        // The page lists columns right-to-left; a PDF table fills
        // left-to-right, so reverse to keep the date column at the
        // right edge.
        let display: Vec<_> = page.columns.iter().rev().collect();

        let mut table = TableLayout::new(vec![1; display.len()]);
        table.set_cell_decorator(FrameCellDecorator::new(true, true, false));

        for row in 0..GRID_ROWS {
            let mut table_row = table.row();
            for column in &display {
                let text = column.cells.get(row).map(cell_text).unwrap_or_default();
                table_row = table_row.element(
                    Paragraph::new(text)
                        .aligned(Alignment::Center)
                        .padded(1),
                );
            }
            table_row
                .push()
                .map_err(|e| AppError::Export(format!("invalid table row: {}", e)))?;
        }
        doc.push(table);

        doc.push(Break::new(1));
        doc.push(
            Paragraph::new(page.footer.as_str())
                .aligned(Alignment::Center)
                .styled(Style::new().with_font_size(9)),
        );

        Ok(doc)
    }

    fn load_font(&self) -> Result<genpdf::fonts::FontFamily<genpdf::fonts::FontData>> {
        if let Ok(family) = genpdf::fonts::from_files(&self.fonts_dir, EXPORT_FONT_FAMILY, None) {
            return Ok(family);
        }
        genpdf::fonts::from_files(&self.fonts_dir, EXPORT_FALLBACK_FONT_FAMILY, None).map_err(|e| {
            AppError::Export(format!(
                "no usable font family under {:?} (tried {} and {}): {}",
                self.fonts_dir, EXPORT_FONT_FAMILY, EXPORT_FALLBACK_FONT_FAMILY, e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Category;

    #[test]
    fn test_output_path_embeds_date_key() {
        let service = ExportService::new(PathBuf::from("/tmp/exports"), PathBuf::from("/tmp/fonts"));

        assert_eq!(
            service.output_path("2024-03-05"),
            PathBuf::from("/tmp/exports/notebook-2024-03-05.pdf")
        );
    }

    #[test]
    fn test_cell_text_mapping() {
        assert_eq!(cell_text(&Cell::Blank), "");
        assert_eq!(
            cell_text(&Cell::Marker {
                category: Category::Homework
            }),
            "宿"
        );
        assert_eq!(
            cell_text(&Cell::Marker {
                category: Category::Empty
            }),
            ""
        );
        assert_eq!(
            cell_text(&Cell::Glyph {
                text: "12".to_string(),
                paired: true,
                upright: false,
            }),
            "12"
        );
    }

    #[test]
    fn test_missing_fonts_surface_as_export_error() {
        let service = ExportService::new(PathBuf::from("/tmp/exports"), PathBuf::from("/nonexistent"));

        assert!(matches!(service.load_font(), Err(AppError::Export(_))));
    }
}
