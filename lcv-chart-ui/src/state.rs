//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()` and mutate the dashboard through it; every
//! dashboard mutation redraws both charts before the signal write completes.

use lcv_charts::Dashboard;
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Dataset, shared UI state and both charts (None until loaded)
    pub dashboard: Signal<Option<Dashboard>>,
    /// Whether the dataset is still loading
    pub loading: Signal<bool>,
    /// Error message if loading failed
    pub error_msg: Signal<Option<String>>,
    /// Bumped while transitions run so the chart views resample them
    pub frame: Signal<u64>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            frame: Signal::new(0),
        }
    }

    /// Run `f` against the dashboard if one is loaded.
    pub fn with_dashboard<R>(&mut self, f: impl FnOnce(&mut Dashboard) -> R) -> Option<R> {
        self.dashboard.write().as_mut().map(f)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
