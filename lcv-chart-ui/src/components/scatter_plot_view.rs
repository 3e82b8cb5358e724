//! Scatterplot rendered as SVG circles.
//!
//! Hovering a circle selects its row in the shared state; leaving clears it.
//! Both go through the dashboard, which redraws the two charts.

use crate::components::{AxisView, ChartContainer};
use crate::state::AppState;
use dioxus::prelude::*;
use lcv_charts::{ChartKind, ScatterPoint};

const CHART_ID: &str = "scatter-plot";

#[component]
pub fn ScatterPlotView() -> Element {
    let mut state = use_context::<AppState>();
    // Subscribe to animation frames.
    let _frame = (state.frame)();

    let dashboard = state.dashboard.read();
    let Some(dashboard) = dashboard.as_ref() else {
        return rsx! {};
    };
    let plot = dashboard.scatter();
    let dims = plot.dims();
    let now = plot.now_ms();
    let x_ticks = plot.x_axis().ticks_at(now);
    let y_ticks = plot.y_axis().ticks_at(now);
    let x_orient = plot.x_axis().orient();
    let y_orient = plot.y_axis().orient();
    let points: Vec<ScatterPoint> = plot
        .points()
        .into_iter()
        .filter(|p| p.cx.is_finite() && p.cy.is_finite())
        .collect();

    rsx! {
        ChartContainer {
            id: CHART_ID.to_string(),
            width: dims.width + dims.margin * 2.0,
            height: dims.height + dims.margin * 2.0,
            offset_x: dims.margin,
            offset_y: dims.margin,
            AxisView { orient: x_orient, ticks: x_ticks, length: dims.width, offset_y: dims.height }
            AxisView { orient: y_orient, ticks: y_ticks, length: dims.height }
            g {
                class: "chart",
                for point in points {
                    circle {
                        key: "{point.mark.get()}",
                        class: if point.highlighted { "selected" } else { "" },
                        cx: "{point.cx}",
                        cy: "{point.cy}",
                        r: "{dims.point_radius}",
                        fill: if point.highlighted { "#FF5722" } else { "#2196F3" },
                        fill_opacity: "0.8",
                        onmouseenter: move |_| {
                            state.with_dashboard(|d| d.hover_enter(ChartKind::Scatter, point.mark));
                        },
                        onmouseleave: move |_| {
                            state.with_dashboard(|d| d.hover_leave());
                        },
                        title { "{point.tooltip}" }
                    }
                }
            }
        }
    }
}
