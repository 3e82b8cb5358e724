//! Reusable Dioxus RSX components for the linked car views.

mod attribute_selector;
mod axis_view;
mod bar_chart_view;
mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod scatter_plot_view;

pub use attribute_selector::{AttributeControls, AttributeSelector};
pub use axis_view::AxisView;
pub use bar_chart_view::BarChartView;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use scatter_plot_view::ScatterPlotView;
