pub(crate) mod cli;

use clap::Parser;
use core_store::config::SALES_TABLE;
use core_store::{spreadsheet, StoreConfig, StoreError};
use core_table::Table;
use dotenv::dotenv;
use rusqlite::Connection;
use snafu::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DATE_CANDIDATES: [&str; 3] = ["Date", "Invoice Date", "date"];
const PRODUCT_COLUMN: &str = "Product line";
const REVENUE_CANDIDATES: [&str; 3] = ["Total", "Sales", "Revenue"];

#[derive(Debug, Snafu)]
enum IngestError {
    #[snafu(transparent)]
    Store { source: StoreError },

    #[snafu(display("SQLite error: {source}"))]
    Sqlite { source: rusqlite::Error },

    #[snafu(display("Could not find required columns in spreadsheet: {missing}"))]
    MissingColumns { missing: String },
}

fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sales_ingest=info,core_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let opts = cli::CliOpts::parse();
    let config = StoreConfig::new(&opts.data_dir);
    if let Err(e) = ingest(&config) {
        tracing::error!("Ingestion failed: {e}");
        std::process::exit(1);
    }
}

fn ingest(config: &StoreConfig) -> Result<(), IngestError> {
    let table = spreadsheet::load_spreadsheet(config)?;
    tracing::info!(rows = table.len(), columns = ?table.columns(), "Spreadsheet loaded");

    let (date_col, product_col, revenue_col) = detect_columns(&table)?;
    tracing::info!(date_col, product_col, revenue_col, "Using columns");

    let mut conn = Connection::open(&config.sqlite_path).context(SqliteSnafu)?;
    conn.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS {SALES_TABLE}(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT,
            product TEXT,
            revenue REAL
        );
        DELETE FROM {SALES_TABLE};"
    ))
    .context(SqliteSnafu)?;

    let inserted = {
        let tx = conn.transaction().context(SqliteSnafu)?;
        let mut inserted = 0;
        {
            let mut stmt = tx
                .prepare(&format!(
                    "INSERT INTO {SALES_TABLE} (date, product, revenue) VALUES (?1, ?2, ?3)"
                ))
                .context(SqliteSnafu)?;
            for row in &table {
                let date = row.get(date_col).map(ToString::to_string);
                let product = row.get(product_col).map(ToString::to_string);
                let revenue = row.get(revenue_col).and_then(core_table::Value::as_f64);
                stmt.execute((date, product, revenue)).context(SqliteSnafu)?;
                inserted += 1;
            }
        }
        tx.commit().context(SqliteSnafu)?;
        inserted
    };

    tracing::info!(
        rows = inserted,
        db = %config.sqlite_path.display(),
        "Database populated"
    );
    Ok(())
}

fn detect_columns(table: &Table) -> Result<(&'static str, &'static str, &'static str), IngestError> {
    let date_col = DATE_CANDIDATES.iter().find(|c| table.has_column(c)).copied();
    let product_col = table.has_column(PRODUCT_COLUMN).then_some(PRODUCT_COLUMN);
    let revenue_col = REVENUE_CANDIDATES
        .iter()
        .find(|c| table.has_column(c))
        .copied();

    match (date_col, product_col, revenue_col) {
        (Some(date), Some(product), Some(revenue)) => Ok((date, product, revenue)),
        _ => {
            let missing: Vec<&str> = [
                date_col.is_none().then_some("date"),
                product_col.is_none().then_some("product"),
                revenue_col.is_none().then_some("revenue"),
            ]
            .into_iter()
            .flatten()
            .collect();
            MissingColumnsSnafu {
                missing: missing.join(", "),
            }
            .fail()
        }
    }
}
