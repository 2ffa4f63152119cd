//! Dark/light mode toggle button.

use crate::state::AppState;
use dioxus::prelude::*;

/// Button flipping the dark-mode preference.
/// Persisting the choice and restyling the page happen in the app's
/// theme effect, so this component only mutates the signal.
#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let dark = (state.dark_mode)();

    rsx! {
        div {
            style: "display: flex; justify-content: flex-end;",
            button {
                style: "padding: 6px 14px; border-radius: 6px; cursor: pointer;",
                aria_label: "Toggle dark mode",
                onclick: move |_| {
                    let current = (state.dark_mode)();
                    state.dark_mode.set(!current);
                },
                if dark { "Light Mode" } else { "Dark Mode" }
            }
        }
    }
}
