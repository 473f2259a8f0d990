use crate::config::StoreConfig;
use crate::error::{JoinSnafu, StoreResult};
use crate::{relational, spreadsheet};
use async_trait::async_trait;
use core_table::Table;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::fmt;

/// One of the two interchangeable backing stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Xlsx,
    Sql,
}

impl SourceKind {
    /// Maps the `source` query parameter: absent defaults to the
    /// spreadsheet, anything other than `xlsx` falls back to the relational
    /// source.
    #[must_use]
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            None | Some("xlsx") => Self::Xlsx,
            Some(_) => Self::Sql,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xlsx => write!(f, "xlsx"),
            Self::Sql => write!(f, "sql"),
        }
    }
}

#[async_trait]
pub trait SalesStore: fmt::Debug + Send + Sync {
    /// Materializes the whole source as a fresh [`Table`]; no caching, the
    /// result is discarded after the response is serialized.
    async fn load(&self, source: SourceKind) -> StoreResult<Table>;
}

/// Store backed by local files: the spreadsheet and the SQLite database.
#[derive(Debug, Clone)]
pub struct LocalSalesStore {
    config: StoreConfig,
}

impl LocalSalesStore {
    #[must_use]
    pub const fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Explicit one-time initialization: runs the CSV repair if needed.
    /// Safe to call again, the repair is guarded by the canonical file.
    pub fn prepare(&self) -> StoreResult<()> {
        spreadsheet::ensure_spreadsheet(&self.config)
    }
}

#[async_trait]
impl SalesStore for LocalSalesStore {
    #[tracing::instrument(level = "debug", skip(self), err)]
    async fn load(&self, source: SourceKind) -> StoreResult<Table> {
        let config = self.config.clone();
        // Both readers are synchronous file/database access.
        tokio::task::spawn_blocking(move || match source {
            SourceKind::Xlsx => spreadsheet::load_spreadsheet(&config),
            SourceKind::Sql => relational::load_relational(&config),
        })
        .await
        .context(JoinSnafu)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_defaults_to_spreadsheet() {
        assert_eq!(SourceKind::from_selector(None), SourceKind::Xlsx);
        assert_eq!(SourceKind::from_selector(Some("xlsx")), SourceKind::Xlsx);
    }

    #[test]
    fn unrecognized_selector_falls_back_to_relational() {
        assert_eq!(SourceKind::from_selector(Some("sql")), SourceKind::Sql);
        assert_eq!(SourceKind::from_selector(Some("parquet")), SourceKind::Sql);
        assert_eq!(SourceKind::from_selector(Some("")), SourceKind::Sql);
    }
}
