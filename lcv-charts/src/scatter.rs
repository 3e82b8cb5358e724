//! Scatterplot: one circle per row, positioned by two numeric attributes.
//!
//! Marks are keyed by [`RowId`], so a row keeps its circle across redraws
//! even when its values (and therefore its position) change.

use crate::axis::{Axis, AxisOrient};
use crate::config::ScatterDims;
use crate::join::{JoinSummary, MarkId, MarkSet};
use crate::scale::{extent, format_number, LinearScale, DEFAULT_TICK_COUNT};
use crate::tween::{Clock, Tween};
use lcv_data::{Dataset, RowId};
use std::rc::Rc;

/// Per-row circle state.
#[derive(Debug, Clone)]
pub struct ScatterMark {
    pub row: RowId,
    pub cx: Tween,
    pub cy: Tween,
    pub highlighted: bool,
    /// `"<x> / <y>"` for the current attribute choices.
    pub tooltip: String,
}

/// A circle sampled for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub mark: MarkId,
    pub row: RowId,
    pub cx: f64,
    pub cy: f64,
    pub highlighted: bool,
    pub tooltip: String,
}

pub struct ScatterPlot {
    dims: ScatterDims,
    duration_ms: f64,
    clock: Rc<dyn Clock>,
    x_scale: LinearScale,
    y_scale: LinearScale,
    x_axis: Axis,
    y_axis: Axis,
    marks: MarkSet<RowId, ScatterMark>,
}

impl ScatterPlot {
    pub fn new(dims: ScatterDims, duration_ms: f64, clock: Rc<dyn Clock>) -> Self {
        Self {
            dims,
            duration_ms,
            clock,
            x_scale: LinearScale::new(0.0, dims.width),
            y_scale: LinearScale::new(dims.height, 0.0),
            x_axis: Axis::new(AxisOrient::Bottom, 0.0),
            y_axis: Axis::new(AxisOrient::Left, 0.0),
            marks: MarkSet::new(),
        }
    }

    /// Rescale, reconcile one circle per row, and flag the selected row.
    pub fn update(
        &mut self,
        dataset: &Dataset,
        x_attr: &str,
        y_attr: &str,
        selection: Option<RowId>,
    ) -> JoinSummary {
        let now = self.clock.now_ms();
        self.x_scale.set_domain(extent(dataset.rows(), x_attr));
        self.y_scale.set_domain(extent(dataset.rows(), y_attr));

        let (x_scale, y_scale, duration) = (&self.x_scale, &self.y_scale, self.duration_ms);
        let summary = self.marks.join(
            dataset.rows(),
            |row| row.id(),
            |row| ScatterMark {
                row: row.id(),
                cx: Tween::fixed(x_scale.scale(row.value(x_attr))),
                cy: Tween::fixed(y_scale.scale(row.value(y_attr))),
                highlighted: false,
                tooltip: String::new(),
            },
            |row, mark| {
                let (x, y) = (row.value(x_attr), row.value(y_attr));
                mark.cx.retarget(x_scale.scale(x), now, duration);
                mark.cy.retarget(y_scale.scale(y), now, duration);
                mark.highlighted = selection == Some(row.id());
                mark.tooltip = format!("{} / {}", format_number(x), format_number(y));
            },
        );

        self.x_axis.update_linear(&self.x_scale, DEFAULT_TICK_COUNT, now);
        self.y_axis.update_linear(&self.y_scale, DEFAULT_TICK_COUNT, now);
        log::debug!(
            "[LCV] scatterplot: {} entered, {} updated, {} exited",
            summary.entered,
            summary.updated,
            summary.exited
        );
        summary
    }

    /// Row behind a circle, for hover handling.
    pub fn mark_row(&self, mark: MarkId) -> Option<RowId> {
        self.marks.get(mark).map(|m| m.state.row)
    }

    pub fn marks(&self) -> &MarkSet<RowId, ScatterMark> {
        &self.marks
    }

    /// Circles at the current clock time.
    pub fn points(&self) -> Vec<ScatterPoint> {
        let now = self.clock.now_ms();
        self.marks
            .iter()
            .map(|m| ScatterPoint {
                mark: m.id(),
                row: m.state.row,
                cx: m.state.cx.value_at(now),
                cy: m.state.cy.value_at(now),
                highlighted: m.state.highlighted,
                tooltip: m.state.tooltip.clone(),
            })
            .collect()
    }

    pub fn is_animating(&self) -> bool {
        let now = self.clock.now_ms();
        self.marks
            .iter()
            .any(|m| m.state.cx.is_running(now) || m.state.cy.is_running(now))
    }

    pub fn dims(&self) -> ScatterDims {
        self.dims
    }

    pub fn x_scale(&self) -> &LinearScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tween::ManualClock;

    const CARS: &str = "\
car,mpg,hp,wt
Mazda RX4,21,110,2.62
Datsun 710,22.8,93,2.32
Valiant,18.1,105,3.46
Duster 360,14.3,245,3.57
";

    fn plot(clock: &ManualClock) -> ScatterPlot {
        ScatterPlot::new(ScatterDims::default(), 1000.0, Rc::new(clock.clone()))
    }

    #[test]
    fn domains_follow_extent() {
        let clock = ManualClock::new();
        let mut sp = plot(&clock);
        let ds = Dataset::from_csv(CARS, "car").unwrap();
        sp.update(&ds, "mpg", "hp", None);
        assert_eq!(sp.x_scale().domain(), Some((14.3, 22.8)));
        assert_eq!(sp.y_scale().domain(), Some((93.0, 245.0)));

        sp.update(&ds, "wt", "mpg", None);
        assert_eq!(sp.x_scale().domain(), Some((2.32, 3.57)));
    }

    #[test]
    fn one_mark_per_row_even_for_identical_values() {
        let clock = ManualClock::new();
        let mut sp = plot(&clock);
        let ds = Dataset::from_csv("car,mpg,hp\nA,1,1\nB,1,1\nC,2,2\n", "car").unwrap();
        let summary = sp.update(&ds, "mpg", "hp", None);
        assert_eq!(summary.entered, 3);
        assert_eq!(sp.marks().len(), 3);
    }

    #[test]
    fn new_marks_appear_at_target() {
        let clock = ManualClock::new();
        let mut sp = plot(&clock);
        let ds = Dataset::from_csv(CARS, "car").unwrap();
        sp.update(&ds, "mpg", "hp", None);
        assert!(!sp.is_animating());
        let duster = &sp.points()[3];
        assert_eq!(duster.cx, 0.0);
        assert_eq!(duster.cy, 0.0);
    }

    #[test]
    fn highlight_follows_selection_identity() {
        let clock = ManualClock::new();
        let mut sp = plot(&clock);
        let ds = Dataset::from_csv(CARS, "car").unwrap();
        let valiant = ds.rows()[2].id();

        sp.update(&ds, "mpg", "hp", Some(valiant));
        let lit: Vec<RowId> = sp.points().iter().filter(|p| p.highlighted).map(|p| p.row).collect();
        assert_eq!(lit, vec![valiant]);

        sp.update(&ds, "mpg", "hp", None);
        assert!(sp.points().iter().all(|p| !p.highlighted));
    }

    #[test]
    fn tooltips_track_attribute_choice() {
        let clock = ManualClock::new();
        let mut sp = plot(&clock);
        let ds = Dataset::from_csv(CARS, "car").unwrap();
        sp.update(&ds, "mpg", "hp", None);
        assert_eq!(sp.points()[0].tooltip, "21 / 110");

        sp.update(&ds, "wt", "hp", None);
        assert_eq!(sp.points()[0].tooltip, "2.62 / 110");
    }

    #[test]
    fn changed_value_animates_only_that_mark() {
        let clock = ManualClock::new();
        let mut sp = plot(&clock);
        let d1 = Dataset::from_csv(CARS, "car").unwrap();
        sp.update(&d1, "mpg", "hp", None);
        let ids_before: Vec<MarkId> = sp.points().iter().map(|p| p.mark).collect();

        clock.advance(5000.0);
        let valiant = d1.rows()[2].id();
        let d2 = d1.with_value(valiant, "hp", 150.0);
        let summary = sp.update(&d2, "mpg", "hp", None);
        assert_eq!(summary, JoinSummary { entered: 0, updated: 4, exited: 0 });

        let ids_after: Vec<MarkId> = sp.points().iter().map(|p| p.mark).collect();
        assert_eq!(ids_before, ids_after);

        let now = clock.now_ms();
        let moving: Vec<RowId> = sp
            .marks()
            .iter()
            .filter(|m| m.state.cx.is_running(now) || m.state.cy.is_running(now))
            .map(|m| m.state.row)
            .collect();
        assert_eq!(moving, vec![valiant]);

        clock.advance(500.0);
        let mid = sp.points()[2].cy;
        clock.advance(500.0);
        let end = sp.points()[2].cy;
        assert!(mid > end);
        assert_eq!(end, sp.y_scale().scale(150.0));
    }

    #[test]
    fn redraw_mid_transition_retargets() {
        let clock = ManualClock::new();
        let mut sp = plot(&clock);
        let ds = Dataset::from_csv(CARS, "car").unwrap();
        sp.update(&ds, "mpg", "hp", None);
        sp.update(&ds, "hp", "hp", None);
        clock.advance(500.0);
        let halfway = sp.points()[0].cx;

        sp.update(&ds, "mpg", "hp", None);
        assert_eq!(sp.points()[0].cx, halfway);
        clock.advance(1000.0);
        assert_eq!(sp.points()[0].cx, sp.x_scale().scale(21.0));
    }

    #[test]
    fn shrinking_and_growing_dataset() {
        let clock = ManualClock::new();
        let mut sp = plot(&clock);
        let full = Dataset::from_csv(CARS, "car").unwrap();
        sp.update(&full, "mpg", "hp", None);

        let gone = full.rows()[1].id();
        let summary = sp.update(&full.without(gone), "mpg", "hp", None);
        assert_eq!(summary.exited, 1);
        assert_eq!(sp.marks().len(), 3);

        let summary = sp.update(&full, "mpg", "hp", None);
        assert_eq!(summary.entered, 1);
        assert_eq!(sp.marks().len(), 4);
    }

    #[test]
    fn empty_dataset_draws_nothing() {
        let clock = ManualClock::new();
        let mut sp = plot(&clock);
        let ds = Dataset::from_csv("car,mpg,hp\n", "car").unwrap();
        sp.update(&ds, "mpg", "hp", None);
        assert!(sp.marks().is_empty());
        assert_eq!(sp.x_scale().domain(), None);
        assert!(sp.x_axis().ticks_at(0.0).is_empty());
    }

    #[test]
    fn tiny_value_spread_draws_without_ticks() {
        let clock = ManualClock::new();
        let mut sp = plot(&clock);
        let ds = Dataset::from_csv("car,a,b\nA,0,1\nB,1e-308,2\n", "car").unwrap();
        let summary = sp.update(&ds, "a", "b", None);
        assert_eq!(summary.entered, 2);
        assert!(sp.x_axis().ticks_at(0.0).len() <= 40);
        assert!(sp.points().iter().all(|p| p.cx.is_finite() && p.cy.is_finite()));
    }

    #[test]
    fn single_row_has_no_nan_positions() {
        let clock = ManualClock::new();
        let mut sp = plot(&clock);
        let ds = Dataset::from_csv("car,mpg,hp\nSolo,20,100\n", "car").unwrap();
        sp.update(&ds, "mpg", "hp", None);
        let p = &sp.points()[0];
        assert_eq!((p.cx, p.cy), (150.0, 150.0));
    }

    #[test]
    fn same_attribute_on_both_axes() {
        let clock = ManualClock::new();
        let mut sp = plot(&clock);
        let ds = Dataset::from_csv(CARS, "car").unwrap();
        sp.update(&ds, "mpg", "mpg", None);
        for p in sp.points() {
            assert!((p.cx + p.cy - 300.0).abs() < 1e-9);
        }
    }

    #[test]
    fn unknown_mark_has_no_row() {
        let clock = ManualClock::new();
        let mut sp = plot(&clock);
        let ds = Dataset::from_csv(CARS, "car").unwrap();
        sp.update(&ds, "mpg", "hp", None);
        let first = sp.points()[0].mark;
        assert_eq!(sp.mark_row(first), Some(ds.rows()[0].id()));

        sp.update(&ds.without(ds.rows()[0].id()), "mpg", "hp", None);
        assert_eq!(sp.mark_row(first), None);
    }
}
