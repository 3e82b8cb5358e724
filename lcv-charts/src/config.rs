//! Chart dimensions, timing and initial attribute choices.
//!
//! Every field has a default, so a partial JSON document only overrides what
//! it names:
//!
//! ```rust
//! use lcv_charts::ChartConfig;
//!
//! let config = ChartConfig::from_json(r#"{ "transition_ms": 250, "bar": { "height": 400 } }"#).unwrap();
//! assert_eq!(config.transition_ms, 250.0);
//! assert_eq!(config.bar.height, 400.0);
//! assert_eq!(config.bar.width, 300.0);
//! assert_eq!(config.initial.y, "hp");
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Identifier column of the dataset (bar chart keys and labels).
    pub id_column: String,
    /// Duration of mark and axis transitions, in milliseconds.
    pub transition_ms: f64,
    pub initial: InitialAttributes,
    pub scatter: ScatterDims,
    pub bar: BarDims,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            id_column: "car".to_string(),
            transition_ms: 1000.0,
            initial: InitialAttributes::default(),
            scatter: ScatterDims::default(),
            bar: BarDims::default(),
        }
    }
}

impl ChartConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid chart configuration")
    }
}

/// Attribute choices the session starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialAttributes {
    pub x: String,
    pub y: String,
    pub bar: String,
}

impl Default for InitialAttributes {
    fn default() -> Self {
        Self {
            x: "mpg".to_string(),
            y: "hp".to_string(),
            bar: "mpg".to_string(),
        }
    }
}

/// Scatterplot geometry in pixels. `width`/`height` are the plotting area;
/// `margin` surrounds it on every side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterDims {
    pub margin: f64,
    pub width: f64,
    pub height: f64,
    pub point_radius: f64,
}

impl Default for ScatterDims {
    fn default() -> Self {
        Self {
            margin: 40.0,
            width: 300.0,
            height: 300.0,
            point_radius: 5.0,
        }
    }
}

/// Bar chart geometry in pixels. The identifier axis sits in `left_margin`,
/// the value axis in `bottom_margin`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarDims {
    pub left_margin: f64,
    pub bottom_margin: f64,
    pub width: f64,
    pub height: f64,
    /// Fraction of each band's pitch left as gap between bars.
    pub padding_inner: f64,
}

impl Default for BarDims {
    fn default() -> Self {
        Self {
            left_margin: 200.0,
            bottom_margin: 30.0,
            width: 300.0,
            height: 700.0,
            padding_inner: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = ChartConfig::from_json("{}").unwrap();
        assert_eq!(config, ChartConfig::default());
    }

    #[test]
    fn overrides_nested_fields() {
        let config = ChartConfig::from_json(
            r#"{ "id_column": "model", "initial": { "x": "wt" }, "scatter": { "margin": 10 } }"#,
        )
        .unwrap();
        assert_eq!(config.id_column, "model");
        assert_eq!(config.initial.x, "wt");
        assert_eq!(config.initial.y, "hp");
        assert_eq!(config.scatter.margin, 10.0);
        assert_eq!(config.scatter.point_radius, 5.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ChartConfig::from_json("{ transition_ms: }").is_err());
    }
}
