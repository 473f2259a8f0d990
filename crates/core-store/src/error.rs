use snafu::prelude::*;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub))]
pub enum StoreError {
    #[snafu(display(
        "Neither spreadsheet {spreadsheet} nor its CSV fallback {fallback} exists"
    ))]
    SourceUnavailable {
        spreadsheet: String,
        fallback: String,
    },

    #[snafu(display("Relational source {path} does not exist"))]
    RelationalUnavailable { path: String },

    #[snafu(display("Failed to read spreadsheet: {source}"))]
    SpreadsheetRead { source: calamine::XlsxError },

    #[snafu(display("Spreadsheet {path} has no worksheets"))]
    EmptyWorkbook { path: String },

    #[snafu(display("Failed to read CSV fallback: {source}"))]
    CsvRead { source: csv::Error },

    #[snafu(display("Failed to rewrite CSV fallback as a spreadsheet: {source}"))]
    SpreadsheetRewrite {
        source: rust_xlsxwriter::XlsxError,
    },

    #[snafu(display("SQLite error: {source}"))]
    Sqlite { source: rusqlite::Error },

    #[snafu(display("Blocking load task failed: {source}"))]
    Join { source: tokio::task::JoinError },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
