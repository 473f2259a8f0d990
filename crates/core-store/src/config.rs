use std::path::{Path, PathBuf};

/// Canonical spreadsheet file, a real xlsx workbook.
pub const SPREADSHEET_FILE: &str = "SuperMarket_Analysis.xlsx";

/// The shipped export: CSV content behind an .xlsx extension. Repaired into
/// [`SPREADSHEET_FILE`] on first access.
pub const CSV_FALLBACK_FILE: &str = "SuperMarket Analysis.xlsx";

/// SQLite database populated by `sales-ingest`.
pub const SQLITE_FILE: &str = "sales.db";

/// Name of the relational sales table.
pub const SALES_TABLE: &str = "sales";

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub spreadsheet_path: PathBuf,
    pub csv_fallback_path: PathBuf,
    pub sqlite_path: PathBuf,
}

impl StoreConfig {
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            spreadsheet_path: data_dir.join(SPREADSHEET_FILE),
            csv_fallback_path: data_dir.join(CSV_FALLBACK_FILE),
            sqlite_path: data_dir.join(SQLITE_FILE),
        }
    }
}
