use crate::config::StoreConfig;
use crate::error::{
    CsvReadSnafu, EmptyWorkbookSnafu, SourceUnavailableSnafu, SpreadsheetReadSnafu,
    SpreadsheetRewriteSnafu, StoreResult,
};
use calamine::{open_workbook, Data, Reader, Xlsx};
use core_table::{Row, Table, Value};
use rust_xlsxwriter::Workbook;
use snafu::{OptionExt, ResultExt};
use std::path::Path;

/// Idempotent resource preparation for the spreadsheet source.
///
/// The shipped export is CSV content behind an .xlsx extension. If the
/// canonical workbook is missing but the mislabeled file exists, read it as
/// CSV and rewrite it as a real xlsx once; afterwards this is a no-op.
pub fn ensure_spreadsheet(config: &StoreConfig) -> StoreResult<()> {
    if config.spreadsheet_path.exists() {
        return Ok(());
    }
    if !config.csv_fallback_path.exists() {
        return SourceUnavailableSnafu {
            spreadsheet: config.spreadsheet_path.display().to_string(),
            fallback: config.csv_fallback_path.display().to_string(),
        }
        .fail();
    }
    tracing::info!(
        fallback = %config.csv_fallback_path.display(),
        spreadsheet = %config.spreadsheet_path.display(),
        "Detected CSV with .xlsx extension, converting to a real spreadsheet"
    );
    rewrite_csv_as_spreadsheet(&config.csv_fallback_path, &config.spreadsheet_path)
}

#[allow(clippy::as_conversions, clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn rewrite_csv_as_spreadsheet(csv_path: &Path, xlsx_path: &Path) -> StoreResult<()> {
    let mut reader = csv::Reader::from_path(csv_path).context(CsvReadSnafu)?;
    let headers = reader.headers().context(CsvReadSnafu)?.clone();

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, name) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, name)
            .context(SpreadsheetRewriteSnafu)?;
    }
    for (row, record) in reader.records().enumerate() {
        let record = record.context(CsvReadSnafu)?;
        for (col, field) in record.iter().enumerate() {
            let (row, col) = ((row + 1) as u32, col as u16);
            // Numbers become number cells; everything else keeps its
            // original text so reloads re-tag it the same way.
            match Value::parse_text(field) {
                Value::Null => {}
                Value::Int(i) => {
                    worksheet
                        .write_number(row, col, i as f64)
                        .context(SpreadsheetRewriteSnafu)?;
                }
                Value::Float(f) => {
                    worksheet
                        .write_number(row, col, f)
                        .context(SpreadsheetRewriteSnafu)?;
                }
                Value::Str(_) | Value::Date(_) => {
                    worksheet
                        .write_string(row, col, field)
                        .context(SpreadsheetRewriteSnafu)?;
                }
            }
        }
    }
    workbook.save(xlsx_path).context(SpreadsheetRewriteSnafu)?;
    Ok(())
}

/// Materializes the whole spreadsheet: first worksheet, first row as the
/// header, every other row as a [`Row`] keyed by the verbatim column names.
pub fn load_spreadsheet(config: &StoreConfig) -> StoreResult<Table> {
    ensure_spreadsheet(config)?;
    let mut workbook: Xlsx<_> =
        open_workbook(&config.spreadsheet_path).context(SpreadsheetReadSnafu)?;
    let range = workbook
        .worksheet_range_at(0)
        .context(EmptyWorkbookSnafu {
            path: config.spreadsheet_path.display().to_string(),
        })?
        .context(SpreadsheetReadSnafu)?;

    let mut cell_rows = range.rows();
    let Some(header) = cell_rows.next() else {
        return Ok(Table::default());
    };
    let columns: Vec<String> = header.iter().map(ToString::to_string).collect();

    let rows = cell_rows
        .map(|cells| {
            columns
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    (name.clone(), cells.get(i).map_or(Value::Null, cell_value))
                })
                .collect::<Row>()
        })
        .collect();
    Ok(Table::new(rows))
}

#[allow(clippy::as_conversions, clippy::cast_possible_truncation, clippy::float_cmp)]
fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::Int(i) => Value::Int(*i),
        Data::Float(f) => {
            // Spreadsheets store every number as a float; keep counts integral.
            if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                Value::Int(*f as i64)
            } else {
                Value::Float(*f)
            }
        }
        Data::String(s) => Value::parse_text(s),
        Data::Bool(b) => Value::Str(b.to_string()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map_or(Value::Null, |d| Value::Date(d.date())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::parse_text(s),
    }
}
