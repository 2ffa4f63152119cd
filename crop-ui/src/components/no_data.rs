//! Empty-result message for a complete selection with no matching rows.

use dioxus::prelude::*;

/// Shown instead of the results table when the selected (state,
/// district, year) triple matched zero records. Distinct from the
/// incomplete-selection case, which renders nothing at all.
#[component]
pub fn NoData() -> Element {
    rsx! {
        div {
            style: "text-align: center; padding: 40px 0; color: #888;",
            "No crop data available for the selected region. Try another combination."
        }
    }
}
