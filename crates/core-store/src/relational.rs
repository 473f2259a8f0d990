use crate::config::{StoreConfig, SALES_TABLE};
use crate::error::{RelationalUnavailableSnafu, SqliteSnafu, StoreResult};
use core_table::{Row, Table, Value};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use snafu::ResultExt;

/// Materializes the whole `sales` table from the SQLite source. The file is
/// written by `sales-ingest`; this side only ever opens it read-only.
pub fn load_relational(config: &StoreConfig) -> StoreResult<Table> {
    if !config.sqlite_path.exists() {
        return RelationalUnavailableSnafu {
            path: config.sqlite_path.display().to_string(),
        }
        .fail();
    }
    let conn = Connection::open_with_flags(&config.sqlite_path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .context(SqliteSnafu)?;
    let mut stmt = conn
        .prepare(&format!("SELECT * FROM {SALES_TABLE}"))
        .context(SqliteSnafu)?;
    let columns: Vec<String> = stmt.column_names().iter().map(ToString::to_string).collect();

    let mut rows = Vec::new();
    let mut result_rows = stmt.query([]).context(SqliteSnafu)?;
    while let Some(result_row) = result_rows.next().context(SqliteSnafu)? {
        let mut row = Row::new();
        for (i, name) in columns.iter().enumerate() {
            let value = match result_row.get_ref(i).context(SqliteSnafu)? {
                ValueRef::Null | ValueRef::Blob(_) => Value::Null,
                ValueRef::Integer(v) => Value::Int(v),
                ValueRef::Real(v) => Value::Float(v),
                ValueRef::Text(v) => Value::parse_text(&String::from_utf8_lossy(v)),
            };
            row.insert(name.clone(), value);
        }
        rows.push(row);
    }
    Ok(Table::new(rows))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::error::StoreError;
    use chrono::NaiveDate;

    fn seed_sales_db(config: &StoreConfig) {
        let conn = Connection::open(&config.sqlite_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE sales(
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT,
                product TEXT,
                revenue REAL
            );
            INSERT INTO sales (date, product, revenue) VALUES
                ('2019-01-05', 'Health and beauty', 548.97),
                ('2019-03-08', 'Electronic accessories', 80.22);",
        )
        .unwrap();
    }

    #[test]
    fn loads_rows_with_verbatim_column_names() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(dir.path());
        seed_sales_db(&config);

        let table = load_relational(&config).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.columns(), vec!["id", "date", "product", "revenue"]);
        assert_eq!(table.rows[0]["id"], Value::Int(1));
        assert_eq!(
            table.rows[0]["date"],
            Value::Date(NaiveDate::from_ymd_opt(2019, 1, 5).unwrap())
        );
        assert_eq!(table.rows[1]["product"], Value::Str("Electronic accessories".to_string()));
        assert_eq!(table.rows[1]["revenue"], Value::Float(80.22));
    }

    #[test]
    fn missing_database_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(dir.path());
        let err = load_relational(&config).unwrap_err();
        assert!(matches!(err, StoreError::RelationalUnavailable { .. }), "{err}");
    }
}
