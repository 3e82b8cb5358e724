//! Dropdowns choosing the numeric attribute behind each chart encoding.

use crate::state::AppState;
use dioxus::prelude::*;
use lcv_charts::AttributeTarget;

/// One attribute dropdown.
/// Lists the dataset's numeric columns and redraws the dashboard on change.
#[component]
pub fn AttributeSelector(target: AttributeTarget) -> Element {
    let mut state = use_context::<AppState>();
    let (columns, selected) = match state.dashboard.read().as_ref() {
        Some(d) => (
            d.dataset().numeric_columns().to_vec(),
            d.state().attribute(target).to_string(),
        ),
        None => (Vec::new(), String::new()),
    };
    let select_id = match target {
        AttributeTarget::X => "x-attribute-select",
        AttributeTarget::Y => "y-attribute-select",
        AttributeTarget::Bar => "bar-attribute-select",
    };

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        if let Some(Err(e)) = state.with_dashboard(|d| d.set_attribute(target, &value)) {
            log::warn!("[LCV] selector: {}", e);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: inline-block; margin-right: 16px;",
            label {
                r#for: select_id,
                style: "font-weight: bold; margin-right: 8px;",
                "{target.label()}: "
            }
            select {
                id: select_id,
                onchange: on_change,
                for column in columns.iter() {
                    option {
                        value: "{column}",
                        selected: *column == selected,
                        "{column}"
                    }
                }
            }
        }
    }
}

/// The three selectors in a row.
#[component]
pub fn AttributeControls() -> Element {
    rsx! {
        div {
            class: "attribute-controls",
            for target in AttributeTarget::ALL {
                AttributeSelector { key: "{target.label()}", target }
            }
        }
    }
}
