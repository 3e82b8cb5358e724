//! Horizontal bar chart: one bar per row, sorted by value descending.
//!
//! Bars are keyed by the identifier value rather than by row identity. Every
//! update sorts a fresh copy of the rows, so keying by the name is what lets a
//! bar survive (and slide to its new slot) when the order changes.

use crate::axis::{Axis, AxisOrient};
use crate::config::BarDims;
use crate::join::{JoinSummary, MarkId, MarkSet};
use crate::scale::{extent, format_number, BandScale, LinearScale, DEFAULT_TICK_COUNT};
use crate::tween::{Clock, Tween};
use lcv_data::{Dataset, Row, RowId};
use std::cmp::Ordering;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct BarMark {
    pub row: RowId,
    /// Bar length along the value axis.
    pub width: Tween,
    /// Offset of the bar's band along the identifier axis.
    pub y: Tween,
    /// Band thickness.
    pub height: Tween,
    pub highlighted: bool,
    /// `"<name>: <value>"`.
    pub tooltip: String,
}

/// A bar sampled for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub mark: MarkId,
    pub row: RowId,
    pub key: String,
    pub width: f64,
    pub y: f64,
    pub height: f64,
    pub highlighted: bool,
    pub tooltip: String,
}

pub struct BarChart {
    dims: BarDims,
    duration_ms: f64,
    clock: Rc<dyn Clock>,
    value_scale: LinearScale,
    band_scale: BandScale,
    value_axis: Axis,
    band_axis: Axis,
    marks: MarkSet<String, BarMark>,
}

/// Descending by value with NaN last. Equal values compare equal so a stable
/// sort keeps their dataset order.
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Key text for a row: the identifier itself, or a formatted number when a
/// numeric column is used as the name.
fn name_of(dataset: &Dataset, row: &Row, name_attr: &str) -> String {
    if name_attr == dataset.id_column() {
        row.name().to_string()
    } else {
        format_number(row.value(name_attr))
    }
}

impl BarChart {
    pub fn new(dims: BarDims, duration_ms: f64, clock: Rc<dyn Clock>) -> Self {
        Self {
            dims,
            duration_ms,
            clock,
            value_scale: LinearScale::new(0.0, dims.width),
            band_scale: BandScale::new(0.0, dims.height, dims.padding_inner),
            value_axis: Axis::new(AxisOrient::Bottom, duration_ms),
            band_axis: Axis::new(AxisOrient::Left, duration_ms),
            marks: MarkSet::new(),
        }
    }

    /// Sort, rescale, reconcile one bar per name, and flag the selected row.
    pub fn update(
        &mut self,
        dataset: &Dataset,
        name_attr: &str,
        value_attr: &str,
        selection: Option<RowId>,
    ) -> JoinSummary {
        let now = self.clock.now_ms();

        let mut sorted: Vec<(String, &Row)> = dataset
            .rows()
            .iter()
            .map(|row| (name_of(dataset, row, name_attr), row))
            .collect();
        sorted.sort_by(|(_, a), (_, b)| descending(a.value(value_attr), b.value(value_attr)));

        self.value_scale
            .set_domain(extent(sorted.iter().map(|(_, row)| *row), value_attr));
        self.band_scale
            .set_domain(sorted.iter().map(|(name, _)| name.clone()));

        let (value_scale, band_scale, duration) =
            (&self.value_scale, &self.band_scale, self.duration_ms);
        let bandwidth = band_scale.bandwidth();
        let summary = self.marks.join(
            sorted.iter(),
            |(name, _): &&(String, &Row)| name.clone(),
            |(name, row): &&(String, &Row)| BarMark {
                row: row.id(),
                width: Tween::fixed(0.0),
                y: Tween::fixed(band_scale.scale(name).unwrap_or(f64::NAN)),
                height: Tween::fixed(bandwidth),
                highlighted: false,
                tooltip: String::new(),
            },
            |(name, row): &&(String, &Row), mark: &mut BarMark| {
                let value = row.value(value_attr);
                mark.row = row.id();
                mark.width.retarget(value_scale.scale(value), now, duration);
                mark.y
                    .retarget(band_scale.scale(name).unwrap_or(f64::NAN), now, duration);
                mark.height.retarget(bandwidth, now, duration);
                mark.highlighted = selection == Some(row.id());
                mark.tooltip = format!("{}: {}", name, format_number(value));
            },
        );

        self.value_axis
            .update_linear(&self.value_scale, DEFAULT_TICK_COUNT, now);
        self.band_axis.update_band(&self.band_scale, now);
        log::debug!(
            "[LCV] bar chart: {} entered, {} updated, {} exited",
            summary.entered,
            summary.updated,
            summary.exited
        );
        summary
    }

    /// Row currently bound to a bar, for hover handling.
    pub fn mark_row(&self, mark: MarkId) -> Option<RowId> {
        self.marks.get(mark).map(|m| m.state.row)
    }

    pub fn marks(&self) -> &MarkSet<String, BarMark> {
        &self.marks
    }

    /// Bars at the current clock time, in sorted order.
    pub fn bars(&self) -> Vec<BarRect> {
        let now = self.clock.now_ms();
        self.marks
            .iter()
            .map(|m| BarRect {
                mark: m.id(),
                row: m.state.row,
                key: m.key().clone(),
                width: m.state.width.value_at(now),
                y: m.state.y.value_at(now),
                height: m.state.height.value_at(now),
                highlighted: m.state.highlighted,
                tooltip: m.state.tooltip.clone(),
            })
            .collect()
    }

    pub fn is_animating(&self) -> bool {
        let now = self.clock.now_ms();
        self.value_axis.is_animating(now)
            || self.band_axis.is_animating(now)
            || self.marks.iter().any(|m| {
                m.state.width.is_running(now)
                    || m.state.y.is_running(now)
                    || m.state.height.is_running(now)
            })
    }

    pub fn dims(&self) -> BarDims {
        self.dims
    }

    pub fn value_scale(&self) -> &LinearScale {
        &self.value_scale
    }

    pub fn band_scale(&self) -> &BandScale {
        &self.band_scale
    }

    pub fn value_axis(&self) -> &Axis {
        &self.value_axis
    }

    pub fn band_axis(&self) -> &Axis {
        &self.band_axis
    }

    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }
}
