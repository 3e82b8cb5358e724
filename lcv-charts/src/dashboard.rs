//! Redraw orchestration and the owned session state around it.
//!
//! [`redraw`] is the stateless pass-through that feeds the current state to
//! both charts. [`Dashboard`] owns the dataset, the [`UiState`] and both charts
//! and redraws after every mutation, which is the only way the UI layer
//! touches them.

use crate::bar::BarChart;
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::join::{JoinSummary, MarkId};
use crate::scatter::ScatterPlot;
use crate::state::{AttributeTarget, UiState};
use crate::tween::Clock;
use lcv_data::Dataset;
use std::rc::Rc;

/// The two views a hover can originate from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Scatter,
    Bar,
}

/// Join results of one redraw, per chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedrawSummary {
    pub scatter: JoinSummary,
    pub bar: JoinSummary,
}

/// Update both charts from the dataset and state. The charts are independent,
/// so the call order carries no meaning.
pub fn redraw(
    dataset: &Dataset,
    state: &UiState,
    scatter: &mut ScatterPlot,
    bar: &mut BarChart,
) -> RedrawSummary {
    RedrawSummary {
        scatter: scatter.update(
            dataset,
            state.x_attribute(),
            state.y_attribute(),
            state.selection(),
        ),
        bar: bar.update(
            dataset,
            dataset.id_column(),
            state.bar_attribute(),
            state.selection(),
        ),
    }
}

pub struct Dashboard {
    dataset: Dataset,
    state: UiState,
    scatter: ScatterPlot,
    bar: BarChart,
}

impl Dashboard {
    /// Build both charts from `config`, validate the initial attribute
    /// choices, and draw once.
    pub fn new(dataset: Dataset, config: &ChartConfig, clock: Rc<dyn Clock>) -> Result<Self, ChartError> {
        let state = UiState::new(
            &dataset,
            &config.initial.x,
            &config.initial.y,
            &config.initial.bar,
        )?;
        let mut dashboard = Self {
            scatter: ScatterPlot::new(config.scatter, config.transition_ms, clock.clone()),
            bar: BarChart::new(config.bar, config.transition_ms, clock),
            dataset,
            state,
        };
        dashboard.redraw();
        Ok(dashboard)
    }

    pub fn redraw(&mut self) -> RedrawSummary {
        redraw(&self.dataset, &self.state, &mut self.scatter, &mut self.bar)
    }

    /// Change an attribute control and redraw. Nothing is redrawn on error.
    pub fn set_attribute(&mut self, target: AttributeTarget, attr: &str) -> Result<RedrawSummary, ChartError> {
        self.state.set_attribute(&self.dataset, target, attr)?;
        log::info!("[LCV] dashboard: {:?} attribute set to {}", target, attr);
        Ok(self.redraw())
    }

    /// Pointer entered a mark: select its row and redraw. Returns `None` (and
    /// leaves everything as is) when the mark no longer exists.
    pub fn hover_enter(&mut self, chart: ChartKind, mark: MarkId) -> Option<RedrawSummary> {
        let row = match chart {
            ChartKind::Scatter => self.scatter.mark_row(mark),
            ChartKind::Bar => self.bar.mark_row(mark),
        }?;
        self.state.set_selection(Some(row));
        Some(self.redraw())
    }

    /// Pointer left a mark: clear the selection and redraw.
    pub fn hover_leave(&mut self) -> RedrawSummary {
        self.state.set_selection(None);
        self.redraw()
    }

    /// Swap in a different dataset and redraw. The attribute choices must still
    /// exist; a selection whose row is gone is cleared.
    pub fn set_dataset(&mut self, dataset: Dataset) -> Result<RedrawSummary, ChartError> {
        let mut state = UiState::new(
            &dataset,
            self.state.x_attribute(),
            self.state.y_attribute(),
            self.state.bar_attribute(),
        )?;
        state.set_selection(self.state.selection().filter(|id| dataset.contains(*id)));
        self.state = state;
        self.dataset = dataset;
        Ok(self.redraw())
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn scatter(&self) -> &ScatterPlot {
        &self.scatter
    }

    pub fn bar(&self) -> &BarChart {
        &self.bar
    }

    pub fn is_animating(&self) -> bool {
        self.scatter.is_animating() || self.bar.is_animating()
    }
}
