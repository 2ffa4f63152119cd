//! Page header with title and the resolved data year.

use crate::state::AppState;
use dioxus::prelude::*;

/// Header for the viewer showing the app title and which year the
/// recommendations are based on.
#[component]
pub fn PageHeader() -> Element {
    let state = use_context::<AppState>();
    let year = (state.current_year)();

    rsx! {
        div {
            style: "text-align: center; margin-bottom: 16px;",
            h1 {
                style: "margin: 0 0 4px 0;",
                "Indian Crop Recommender"
            }
            p {
                style: "margin: 0; font-size: 14px; color: #888;",
                "Discover the best crops to grow in your region based on recent data."
            }
            if !year.is_empty() {
                p {
                    style: "margin: 4px 0 0 0; font-size: 12px; color: #888;",
                    "Data year: {year}"
                }
            }
        }
    }
}
