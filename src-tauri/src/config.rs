//! Application configuration constants
//!
//! Central location for all configuration constants, resource limits,
//! and validation boundaries used throughout the application.

// ===== Grid Geometry =====

/// Number of cells in every notebook column, including the marker cell.
pub const GRID_ROWS: usize = 12;

/// Maximum number of display units a content column can carry.
/// Cell 0 is reserved for the category marker, leaving 11 text cells.
pub const MAX_TEXT_UNITS: usize = GRID_ROWS - 1;

/// Number of content records seeded for a date with no stored note.
pub const DEFAULT_COLUMN_COUNT: usize = 8;

/// Page height divided by page width. The notebook page keeps the
/// proportions of a B5 exercise book regardless of window size.
pub const PAGE_ASPECT_RATIO: f64 = 1.414;

// ===== Page Chrome =====

/// Title shown in the header band of every page.
pub const NOTEBOOK_TITLE: &str = "れんらくちょう";

/// Prompt shown in the footer band above the stamp area.
pub const STAMP_PROMPT: &str = "よんだら はんこを おしてね";

// ===== Date Keys =====

/// Canonical date key format used as the document store primary key.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

// ===== Stamp Limits =====

/// Maximum length in characters for a self-reported stamp name.
/// Prevents excessively long values from being appended to the log.
pub const MAX_STAMP_NAME_LEN: usize = 40;

// ===== Settings Keys =====

/// Settings key holding the allow-listed author email. Authoring
/// operations are rejected for any other principal.
pub const SETTING_AUTHOR_EMAIL: &str = "author_email";

/// Settings key remembering the name used for the last stamp on this
/// device. Drives the "have I already stamped today" check.
pub const SETTING_STAMP_NAME: &str = "stamp_name";

/// Author email seeded into settings on first launch. Deployments
/// rebind this through the settings table, not by recompiling.
pub const DEFAULT_AUTHOR_EMAIL: &str = "sensei@classroom.example";

// ===== Export =====

/// Directory under the app data dir that exported documents land in.
pub const EXPORT_DIR_NAME: &str = "exports";

/// Preferred font family for PDF export. Must cover Japanese text.
pub const EXPORT_FONT_FAMILY: &str = "NotoSansJP";

/// Fallback font family when the preferred one is not installed.
pub const EXPORT_FALLBACK_FONT_FAMILY: &str = "LiberationSans";

/// Base font size in points for exported pages.
pub const EXPORT_FONT_SIZE_PT: u8 = 12;
