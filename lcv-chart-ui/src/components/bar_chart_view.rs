//! Bar chart rendered as SVG rects, one per identifier, sorted by value.

use crate::components::{AxisView, ChartContainer};
use crate::state::AppState;
use dioxus::prelude::*;
use lcv_charts::{BarRect, ChartKind};

const CHART_ID: &str = "bar-chart";

#[component]
pub fn BarChartView() -> Element {
    let mut state = use_context::<AppState>();
    // Subscribe to animation frames.
    let _frame = (state.frame)();

    let dashboard = state.dashboard.read();
    let Some(dashboard) = dashboard.as_ref() else {
        return rsx! {};
    };
    let chart = dashboard.bar();
    let dims = chart.dims();
    let now = chart.now_ms();
    let value_ticks = chart.value_axis().ticks_at(now);
    let band_ticks = chart.band_axis().ticks_at(now);
    let value_orient = chart.value_axis().orient();
    let band_orient = chart.band_axis().orient();
    let bars: Vec<BarRect> = chart
        .bars()
        .into_iter()
        .filter(|b| b.width.is_finite() && b.y.is_finite())
        .collect();

    rsx! {
        ChartContainer {
            id: CHART_ID.to_string(),
            width: dims.width + dims.left_margin,
            height: dims.height + dims.bottom_margin,
            offset_x: dims.left_margin,
            AxisView { orient: value_orient, ticks: value_ticks, length: dims.width, offset_y: dims.height }
            AxisView { orient: band_orient, ticks: band_ticks, length: dims.height }
            g {
                class: "chart",
                for bar in bars {
                    rect {
                        key: "{bar.key}",
                        class: if bar.highlighted { "bar selected" } else { "bar" },
                        x: "0",
                        y: "{bar.y}",
                        width: "{bar.width.max(0.0)}",
                        height: "{bar.height.max(0.0)}",
                        fill: if bar.highlighted { "#FF5722" } else { "#4CAF50" },
                        onmouseenter: move |_| {
                            state.with_dashboard(|d| d.hover_enter(ChartKind::Bar, bar.mark));
                        },
                        onmouseleave: move |_| {
                            state.with_dashboard(|d| d.hover_leave());
                        },
                        title { "{bar.tooltip}" }
                    }
                }
            }
        }
    }
}
