//! Error types

use std::fmt;

/// Misuse of the chart state that can be rejected before a redraw.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// The attribute is not one of the dataset's numeric columns.
    UnknownAttribute {
        attribute: String,
        available: Vec<String>,
    },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::UnknownAttribute { attribute, available } => write!(
                f,
                "Unknown attribute '{}' (expected one of: {})",
                attribute,
                available.join(", ")
            ),
        }
    }
}

impl std::error::Error for ChartError {}
