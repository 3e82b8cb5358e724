//! SVG root for one chart: fixed outer size, inner group shifted by the margins.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id of the chart region
    pub id: String,
    /// Total SVG width in pixels, margins included
    pub width: f64,
    /// Total SVG height in pixels, margins included
    pub height: f64,
    /// Offset of the plotting area from the left edge
    #[props(default = 0.0)]
    pub offset_x: f64,
    /// Offset of the plotting area from the top edge
    #[props(default = 0.0)]
    pub offset_y: f64,
    pub children: Element,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            style: "display: inline-block; vertical-align: top; margin: 8px;",
            svg {
                width: "{props.width}",
                height: "{props.height}",
                style: "font-family: system-ui, sans-serif; font-size: 10px;",
                g {
                    transform: "translate({props.offset_x},{props.offset_y})",
                    {props.children}
                }
            }
        }
    }
}
