use crate::value::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One record, keyed by column name. Key order is the source column order.
pub type Row = IndexMap<String, Value>;

/// Ordered collection of rows sharing one column set. Built fresh on every
/// query and discarded after serialization; serializes as a bare JSON array
/// of row objects with the source column names verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    #[must_use]
    pub const fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names, in source order. Empty for an empty table.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.rows.first().is_some_and(|row| row.contains_key(name))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl IntoIterator for Table {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Row> for Table {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
