//! Row records and their load-assigned identities.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ROW_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a row, assigned once when the row is created.
///
/// Selection, highlighting and scatterplot keying all compare rows by this id,
/// never by their attribute values: two rows with identical values are still
/// two different rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl RowId {
    fn next() -> Self {
        RowId(NEXT_ROW_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric id, handy for DOM keys.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// One record of the dataset: a textual identifier plus numeric attributes.
///
/// Rows are immutable; "changing" a value produces a new `Row` that keeps the
/// same [`RowId`] (see [`Row::with_value`]).
#[derive(Debug, Clone)]
pub struct Row {
    id: RowId,
    name: String,
    values: BTreeMap<String, f64>,
}

impl Row {
    /// Create a row with a freshly assigned identity.
    pub fn new(name: impl Into<String>, values: BTreeMap<String, f64>) -> Self {
        Self {
            id: RowId::next(),
            name: name.into(),
            values,
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    /// Value of the identifier attribute.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Numeric value of `attr`, or NaN when the row has no such attribute.
    pub fn value(&self, attr: &str) -> f64 {
        self.values.get(attr).copied().unwrap_or(f64::NAN)
    }

    /// Same row identity, one attribute replaced.
    pub fn with_value(&self, attr: &str, value: f64) -> Self {
        let mut values = self.values.clone();
        values.insert(attr.to_string(), value);
        Self {
            id: self.id,
            name: self.name.clone(),
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn identical_rows_get_distinct_ids() {
        let a = Row::new("Mazda RX4", values(&[("mpg", 21.0)]));
        let b = Row::new("Mazda RX4", values(&[("mpg", 21.0)]));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn with_value_keeps_identity() {
        let a = Row::new("Valiant", values(&[("mpg", 18.1), ("hp", 105.0)]));
        let b = a.with_value("mpg", 20.0);
        assert_eq!(a.id(), b.id());
        assert_eq!(b.value("mpg"), 20.0);
        assert_eq!(b.value("hp"), 105.0);
        assert_eq!(a.value("mpg"), 18.1);
    }

    #[test]
    fn missing_attribute_is_nan() {
        let a = Row::new("Valiant", values(&[("mpg", 18.1)]));
        assert!(a.value("qsec").is_nan());
    }
}
