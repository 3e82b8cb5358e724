//! Axis rendering: a domain line plus one labelled tick per `AxisTick`.

use dioxus::prelude::*;
use lcv_charts::{AxisOrient, AxisTick};

const TICK_SIZE: f64 = 6.0;

#[derive(Props, Clone, PartialEq)]
pub struct AxisViewProps {
    pub orient: AxisOrient,
    pub ticks: Vec<AxisTick>,
    /// Length of the domain line in pixels
    pub length: f64,
    /// Vertical shift of the whole axis (bottom axes sit below the plot)
    #[props(default = 0.0)]
    pub offset_y: f64,
}

#[component]
pub fn AxisView(props: AxisViewProps) -> Element {
    let ticks: Vec<AxisTick> = props
        .ticks
        .iter()
        .filter(|t| t.offset.is_finite())
        .cloned()
        .collect();

    match props.orient {
        AxisOrient::Bottom => rsx! {
            g {
                class: "axis xaxis",
                transform: "translate(0,{props.offset_y})",
                line { x1: "0", x2: "{props.length}", stroke: "#000" }
                for tick in ticks {
                    g {
                        key: "{tick.label}",
                        transform: "translate({tick.offset},0)",
                        line { y2: "{TICK_SIZE}", stroke: "#000" }
                        text {
                            y: "{TICK_SIZE + 3.0}",
                            dy: "0.71em",
                            fill: "#000",
                            text_anchor: "middle",
                            "{tick.label}"
                        }
                    }
                }
            }
        },
        AxisOrient::Left => rsx! {
            g {
                class: "axis yaxis",
                transform: "translate(0,{props.offset_y})",
                line { y1: "0", y2: "{props.length}", stroke: "#000" }
                for tick in ticks {
                    g {
                        key: "{tick.label}",
                        transform: "translate(0,{tick.offset})",
                        line { x2: "{-TICK_SIZE}", stroke: "#000" }
                        text {
                            x: "{-(TICK_SIZE + 3.0)}",
                            dy: "0.32em",
                            fill: "#000",
                            text_anchor: "end",
                            "{tick.label}"
                        }
                    }
                }
            }
        },
    }
}
