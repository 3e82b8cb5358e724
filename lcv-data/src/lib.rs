//! Tabular dataset for the linked scatterplot / bar chart views.
//!
//! A [`Dataset`] is an ordered, session-fixed sequence of [`Row`]s. One column
//! is a textual identifier (unique per row); every other column is numeric.
//! Rows carry a [`RowId`] assigned at load so that "the same row" stays a
//! well-defined check across redraws.
//!
//! # Usage
//!
//! ```rust
//! use lcv_data::Dataset;
//!
//! let csv = "car,mpg,hp\nMazda RX4,21,110\nDatsun 710,22.8,93\n";
//! let dataset = Dataset::from_csv(csv, "car").unwrap();
//!
//! assert_eq!(dataset.len(), 2);
//! assert_eq!(dataset.numeric_columns(), ["mpg", "hp"]);
//! assert_eq!(dataset.rows()[1].value("hp"), 93.0);
//! ```
//!
//! Derived datasets keep the identity of every untouched row:
//!
//! ```rust
//! # use lcv_data::Dataset;
//! # let dataset = Dataset::from_csv("car,mpg\nA,1\nB,2\n", "car").unwrap();
//! let first = dataset.rows()[0].id();
//! let changed = dataset.with_value(first, "mpg", 5.0);
//! assert_eq!(changed.rows()[0].id(), first);
//! assert_eq!(changed.rows()[0].value("mpg"), 5.0);
//! ```

mod loader;
mod row;

pub use row::{Row, RowId};

use anyhow::bail;
use std::collections::HashSet;

/// Ordered rows plus the column layout they were loaded with.
///
/// Cloning is cheap enough for the small tables this is meant for; the
/// derivation helpers (`with_value`, `without`, `with_row`) return new
/// datasets rather than mutating in place.
#[derive(Debug, Clone)]
pub struct Dataset {
    id_column: String,
    numeric_columns: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    /// Assemble a dataset from already-built rows.
    ///
    /// Fails when two rows share an identifier value, since the bar chart keys
    /// its marks by that value.
    pub fn new(
        id_column: impl Into<String>,
        numeric_columns: Vec<String>,
        rows: Vec<Row>,
    ) -> anyhow::Result<Self> {
        let mut seen = HashSet::new();
        for row in &rows {
            if !seen.insert(row.name()) {
                bail!("duplicate identifier value '{}'", row.name());
            }
        }
        Ok(Self {
            id_column: id_column.into(),
            numeric_columns,
            rows,
        })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Name of the identifier column (e.g. `car`).
    pub fn id_column(&self) -> &str {
        &self.id_column
    }

    /// Numeric column names in header order.
    pub fn numeric_columns(&self) -> &[String] {
        &self.numeric_columns
    }

    pub fn has_numeric_column(&self, name: &str) -> bool {
        self.numeric_columns.iter().any(|c| c == name)
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.row(id).is_some()
    }

    /// Copy of this dataset where one row has a different value for `attr`.
    /// Unknown ids leave the copy unchanged.
    pub fn with_value(&self, id: RowId, attr: &str, value: f64) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|r| if r.id() == id { r.with_value(attr, value) } else { r.clone() })
            .collect();
        Self {
            id_column: self.id_column.clone(),
            numeric_columns: self.numeric_columns.clone(),
            rows,
        }
    }

    /// Copy of this dataset without the given row.
    pub fn without(&self, id: RowId) -> Self {
        Self {
            id_column: self.id_column.clone(),
            numeric_columns: self.numeric_columns.clone(),
            rows: self.rows.iter().filter(|r| r.id() != id).cloned().collect(),
        }
    }

    /// Copy of this dataset with `row` appended.
    pub fn with_row(&self, row: Row) -> anyhow::Result<Self> {
        let mut rows = self.rows.clone();
        rows.push(row);
        Self::new(self.id_column.clone(), self.numeric_columns.clone(), rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample() -> Dataset {
        Dataset::from_csv("car,mpg,hp\nA,1,10\nB,2,20\nC,3,30\n", "car").unwrap()
    }

    #[test]
    fn without_drops_only_that_row() {
        let ds = sample();
        let b = ds.rows()[1].id();
        let smaller = ds.without(b);
        assert_eq!(smaller.len(), 2);
        assert!(!smaller.contains(b));
        assert_eq!(smaller.rows()[0].id(), ds.rows()[0].id());
        assert_eq!(smaller.rows()[1].id(), ds.rows()[2].id());
    }

    #[test]
    fn with_row_rejects_duplicate_names() {
        let ds = sample();
        let dup = Row::new("A", BTreeMap::new());
        assert!(ds.with_row(dup).is_err());

        let fresh = Row::new("D", BTreeMap::from([("mpg".to_string(), 4.0)]));
        let grown = ds.with_row(fresh).unwrap();
        assert_eq!(grown.len(), 4);
    }

    #[test]
    fn with_value_on_unknown_id_is_a_copy() {
        let ds = sample();
        let other = Row::new("Z", BTreeMap::new());
        let copy = ds.with_value(other.id(), "mpg", 99.0);
        assert_eq!(copy.len(), 3);
        assert_eq!(copy.rows()[0].value("mpg"), 1.0);
    }

    #[test]
    fn numeric_column_lookup() {
        let ds = sample();
        assert!(ds.has_numeric_column("hp"));
        assert!(!ds.has_numeric_column("car"));
        assert_eq!(ds.id_column(), "car");
    }
}
