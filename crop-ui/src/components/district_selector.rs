//! Dropdown selector for choosing a district within the selected state.

use crate::state::AppState;
use dioxus::prelude::*;

/// District dropdown selector.
/// Options are always scoped to the currently selected state; the
/// control is disabled until a state with districts is selected.
#[component]
pub fn DistrictSelector() -> Element {
    let mut state = use_context::<AppState>();
    let districts = state.districts.read().clone();
    let selected = (state.selected_district)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_district.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; flex: 1;",
            label {
                r#for: "district-select",
                style: "font-weight: bold; margin-right: 8px;",
                "District: "
            }
            select {
                id: "district-select",
                style: "width: 100%; padding: 8px;",
                disabled: districts.is_empty(),
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "Select District"
                }
                for name in districts.iter() {
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
