//! Linked Car Views
//!
//! A scatterplot of two car attributes next to a bar chart of a third, sorted
//! by value. Hovering a circle or a bar highlights the same car in both views;
//! changing a dropdown re-encodes its chart with an animated transition.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/mtcars.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV and `chart-config.json` into the binary.
//! 3. On mount, the CSV becomes a `Dataset` and the `Dashboard` draws both
//!    charts once.
//! 4. Selectors and hover handlers mutate the dashboard through `AppState`;
//!    the frame loop repaints while transitions run.

use lcv_chart_ui::animation::{use_transition_frames, BrowserClock};
use lcv_chart_ui::components::{
    AttributeControls, BarChartView, ChartHeader, ErrorDisplay, LoadingSpinner, ScatterPlotView,
};
use lcv_chart_ui::state::AppState;
use lcv_charts::{ChartConfig, Clock, Dashboard};
use lcv_data::Dataset;
use dioxus::prelude::*;
use std::rc::Rc;

/// The mtcars dataset, one row per car model.
const MTCARS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/mtcars.csv"));
/// Dimensions, timing and starting attributes.
const CHART_CONFIG_JSON: &str = include_str!("../chart-config.json");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("linked-cars-root"))
        .launch(App);
}

/// Parse the configuration, falling back to defaults if it is malformed.
fn load_config(json: &str) -> ChartConfig {
    ChartConfig::from_json(json).unwrap_or_else(|e| {
        log::warn!("[LCV] app: {:#}, using defaults", e);
        ChartConfig::default()
    })
}

/// Load the dataset and build both charts.
fn load_dashboard(csv_data: &str, config: &ChartConfig, clock: Rc<dyn Clock>) -> anyhow::Result<Dashboard> {
    let dataset = Dataset::from_csv(csv_data, &config.id_column)?;
    Ok(Dashboard::new(dataset, config, clock)?)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    use_transition_frames(state);

    use_effect(move || {
        let config = load_config(CHART_CONFIG_JSON);
        match load_dashboard(MTCARS_CSV, &config, Rc::new(BrowserClock)) {
            Ok(dashboard) => {
                log::info!(
                    "[LCV] app: Dashboard ready with {} cars",
                    dashboard.dataset().len()
                );
                state.dashboard.set(Some(dashboard));
            }
            Err(e) => {
                log::error!("[LCV] app: Failed to load cars: {:#}", e);
                state.error_msg.set(Some(format!("Failed to load car data: {:#}", e)));
            }
        }
        state.loading.set(false);
    });

    let loading = (state.loading)();
    let error = (state.error_msg)();
    let (scatter_encoding, bar_encoding) = match state.dashboard.read().as_ref() {
        Some(d) => (
            format!("x: {}, y: {}", d.state().x_attribute(), d.state().y_attribute()),
            format!("bars: {}", d.state().bar_attribute()),
        ),
        None => (String::new(), String::new()),
    };

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 16px;",
            h1 { "Linked Car Views" }
            if let Some(msg) = error {
                ErrorDisplay { message: msg }
            } else if loading {
                LoadingSpinner {}
            } else {
                AttributeControls {}
                div {
                    style: "display: flex; gap: 32px; align-items: flex-start;",
                    div {
                        ChartHeader { title: "Scatterplot".to_string(), encoding: scatter_encoding }
                        ScatterPlotView {}
                    }
                    div {
                        ChartHeader { title: "Bar chart".to_string(), encoding: bar_encoding }
                        BarChartView {}
                    }
                }
            }
        }
    }
}
