//! Dropdown selector for choosing a state.

use crate::state::AppState;
use dioxus::prelude::*;

/// State dropdown selector.
/// Reads available states from AppState and updates selected_state on
/// change. Downstream invalidation (districts, summaries) is handled by
/// the app's derivation effects.
#[component]
pub fn StateSelector() -> Element {
    let mut state = use_context::<AppState>();
    let states = state.states.read().clone();
    let selected = (state.selected_state)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_state.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; flex: 1;",
            label {
                r#for: "state-select",
                style: "font-weight: bold; margin-right: 8px;",
                "State: "
            }
            select {
                id: "state-select",
                style: "width: 100%; padding: 8px;",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "Select a State"
                }
                for name in states.iter() {
                    option {
                        value: "{name}",
                        selected: *name == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}
