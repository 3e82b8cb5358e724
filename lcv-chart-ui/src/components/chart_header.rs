//! Chart header with title and a line describing the active encoding.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Which attributes are mapped where (e.g., "x: mpg, y: hp")
    #[props(default = String::new())]
    pub encoding: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.encoding.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.encoding}"
                }
            }
        }
    }
}
