//! Results table for the current selection's crop summaries.

use crate::components::NoData;
use crate::state::AppState;
use dioxus::prelude::*;

/// Renders the ranked crop summaries for the current selection.
///
/// Three cases:
/// - incomplete selection: renders nothing
/// - complete selection, no matching records: the [`NoData`] message
/// - otherwise: the ranked table
#[component]
pub fn CropTable() -> Element {
    let state = use_context::<AppState>();
    let crops = state.crops.read().clone();
    let selected_state = (state.selected_state)();
    let selected_district = (state.selected_district)();
    let dark = (state.dark_mode)();

    if selected_state.is_empty() || selected_district.is_empty() {
        return rsx! {};
    }

    if crops.is_empty() {
        return rsx! { NoData {} };
    }

    let header_bg = if dark { "#263238" } else { "#E0F2F1" };
    let row_border = if dark { "#37474F" } else { "#ECEFF1" };
    let th_style = "padding: 10px 14px; text-align: left; font-size: 13px; text-transform: uppercase;";

    rsx! {
        div {
            h2 {
                style: "font-size: 20px; margin: 16px 0 8px 0;",
                "Crop Suggestions for {selected_district}, {selected_state}"
            }
            table {
                style: "width: 100%; border-collapse: collapse;",
                thead {
                    style: "background: {header_bg};",
                    tr {
                        th { style: "{th_style}", "Crop" }
                        th { style: "{th_style}", "Season" }
                        th { style: "{th_style}", "Area" }
                        th { style: "{th_style}", "Production" }
                        th { style: "{th_style}", "Yield" }
                    }
                }
                tbody {
                    for summary in crops.iter() {
                        tr {
                            style: "border-bottom: 1px solid {row_border};",
                            td {
                                style: "padding: 10px 14px; font-weight: 500;",
                                "{summary.crop}"
                            }
                            td { style: "padding: 10px 14px;", "{summary.season}" }
                            td {
                                style: "padding: 10px 14px;",
                                {format!("{:.2} {}", summary.area, summary.area_units)}
                            }
                            td {
                                style: "padding: 10px 14px;",
                                {format!("{:.2} {}", summary.production, summary.production_units)}
                            }
                            td {
                                style: "padding: 10px 14px; color: #00897B; font-weight: 500;",
                                {format!("{:.2}", summary.yield_value)}
                            }
                        }
                    }
                }
            }
        }
    }
}
