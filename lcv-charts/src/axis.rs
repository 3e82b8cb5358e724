//! Axis models: labelled ticks positioned by a scale.
//!
//! Ticks are reconciled by label exactly like marks, so a tick that exists
//! before and after a domain change slides to its new offset when the axis
//! animates.

use crate::join::{JoinSummary, MarkSet};
use crate::scale::{BandScale, LinearScale};
use crate::tween::Tween;

/// Which side of the plotting area the axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

/// A tick sampled for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub label: String,
    /// Pixel offset along the axis.
    pub offset: f64,
}

#[derive(Debug, Clone)]
pub struct Axis {
    orient: AxisOrient,
    duration_ms: f64,
    ticks: MarkSet<String, Tween>,
}

impl Axis {
    /// `duration_ms` of 0 redraws ticks instantly.
    pub fn new(orient: AxisOrient, duration_ms: f64) -> Self {
        Self {
            orient,
            duration_ms,
            ticks: MarkSet::new(),
        }
    }

    pub fn orient(&self) -> AxisOrient {
        self.orient
    }

    /// Rebuild ticks from a linear scale.
    pub fn update_linear(&mut self, scale: &LinearScale, count: usize, now_ms: f64) -> JoinSummary {
        let ticks = scale
            .labelled_ticks(count)
            .into_iter()
            .map(|(value, label)| (label, scale.scale(value)));
        self.update(ticks, now_ms)
    }

    /// One tick per band, centred in it and labelled with its key.
    pub fn update_band(&mut self, scale: &BandScale, now_ms: f64) -> JoinSummary {
        let half = scale.bandwidth() / 2.0;
        let ticks: Vec<(String, f64)> = scale
            .domain()
            .iter()
            .filter_map(|key| scale.scale(key).map(|start| (key.clone(), start + half)))
            .collect();
        self.update(ticks, now_ms)
    }

    fn update(&mut self, ticks: impl IntoIterator<Item = (String, f64)>, now_ms: f64) -> JoinSummary {
        let duration = self.duration_ms;
        self.ticks.join(
            ticks,
            |(label, _): &(String, f64)| label.clone(),
            |(_, offset): &(String, f64)| Tween::fixed(*offset),
            |(_, offset): &(String, f64), tween: &mut Tween| tween.retarget(*offset, now_ms, duration),
        )
    }

    /// Tick positions at `now_ms`.
    pub fn ticks_at(&self, now_ms: f64) -> Vec<AxisTick> {
        self.ticks
            .iter()
            .map(|m| AxisTick {
                label: m.key().clone(),
                offset: m.state.value_at(now_ms),
            })
            .collect()
    }

    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.ticks.iter().any(|m| m.state.is_running(now_ms))
    }
}
