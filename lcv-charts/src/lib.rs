//! Chart core for the linked scatterplot and bar chart.
//!
//! This crate holds everything that decides *what* is drawn, independent of
//! how it is rendered:
//! - `scale`: extents, linear and band scales, nice ticks
//! - `join`: keyed reconciliation of marks against data
//! - `tween`: per-attribute transitions and the `Clock` they read
//! - `axis`: tick models that reconcile like marks
//! - `scatter` / `bar`: the two chart components
//! - `state` / `dashboard`: shared UI state and redraw orchestration
//!
//! # Usage
//!
//! ```rust
//! use lcv_charts::{ChartConfig, ChartKind, Dashboard, ManualClock};
//! use lcv_data::Dataset;
//! use std::rc::Rc;
//!
//! let csv = "car,mpg,hp\nMazda RX4,21,110\nDatsun 710,22.8,93\nValiant,18.1,105\n";
//! let dataset = Dataset::from_csv(csv, "car").unwrap();
//! let clock = ManualClock::new();
//! let mut dashboard = Dashboard::new(dataset, &ChartConfig::default(), Rc::new(clock.clone())).unwrap();
//!
//! // Hover the first circle: the bar for the same car lights up.
//! let mark = dashboard.scatter().points()[0].mark;
//! dashboard.hover_enter(ChartKind::Scatter, mark);
//! let lit: Vec<String> = dashboard.bar().bars().into_iter()
//!     .filter(|b| b.highlighted)
//!     .map(|b| b.key)
//!     .collect();
//! assert_eq!(lit, ["Mazda RX4"]);
//! ```

pub mod axis;
pub mod bar;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod join;
pub mod scale;
pub mod scatter;
pub mod state;
pub mod tween;

pub use axis::{Axis, AxisOrient, AxisTick};
pub use bar::{BarChart, BarMark, BarRect};
pub use config::{BarDims, ChartConfig, InitialAttributes, ScatterDims};
pub use dashboard::{redraw, ChartKind, Dashboard, RedrawSummary};
pub use error::ChartError;
pub use join::{JoinSummary, Mark, MarkId, MarkSet};
pub use scale::{extent, format_number, BandScale, LinearScale};
pub use scatter::{ScatterMark, ScatterPlot, ScatterPoint};
pub use state::{AttributeTarget, UiState};
pub use tween::{Clock, ManualClock, Tween};
