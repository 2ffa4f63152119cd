//! Crop recommendation viewer.
//!
//! Given the regional agricultural dataset, the user picks a state and a
//! district and sees the top crops grown there in the most recent
//! available year, ranked by cultivated area.
//!
//! Data flow:
//! 1. On mount: fetch `crop_data.csv`, parse it once into signals
//!    (records, state list, resolved year). A failed fetch degrades to
//!    an empty dataset plus an error banner.
//! 2. State selection change: recompute district options and clear the
//!    district selection and the summaries.
//! 3. District selection change: recompute the top-crop summaries.
//!
//! All derivations are the pure functions from `crop-core`; the effects
//! here only move their results in and out of signals.

use crop_core::aggregate::{district_options, top_crops};
use crop_core::dataset::Dataset;
use crop_ui::components::{
    CropTable, DistrictSelector, ErrorDisplay, LoadingSpinner, PageHeader, StateSelector,
    ThemeToggle,
};
use crop_ui::state::AppState;
use crop_ui::{fetch, prefs};
use dioxus::prelude::*;

/// Fixed, well-known location of the dataset.
const DATA_URL: &str = "/crop_data.csv";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("crop-viewer-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the dataset once on mount. Nothing renders below the header
    // until this resolves.
    use_effect(move || {
        spawn(async move {
            match fetch::fetch_text(DATA_URL).await {
                Ok(text) => {
                    let dataset = Dataset::from_csv(&text);
                    if dataset.records.is_empty() {
                        log::warn!("dataset at {DATA_URL} contained no parseable rows");
                    }
                    state.states.set(dataset.states);
                    state.current_year.set(dataset.current_year);
                    state.records.set(dataset.records);
                }
                Err(e) => {
                    // degrade to an empty dataset rather than crash
                    log::error!("failed to load {DATA_URL}: {e}");
                    state.error_msg.set(Some(e));
                }
            }
            state.loading.set(false);
        });
    });

    // A state change (or a dataset arrival) rescopes the district
    // options and invalidates everything downstream of the state.
    use_effect(move || {
        let selected = (state.selected_state)();
        let districts = district_options(&state.records.read(), &selected);
        state.districts.set(districts);
        state.selected_district.set(String::new());
        state.crops.set(Vec::new());
    });

    // Recompute the summaries whenever the full selection changes.
    use_effect(move || {
        let crops = top_crops(
            &state.records.read(),
            &(state.selected_state)(),
            &(state.selected_district)(),
            &(state.current_year)(),
        );
        state.crops.set(crops);
    });

    // Apply and persist the theme choice.
    use_effect(move || {
        let dark = (state.dark_mode)();
        prefs::apply_theme(dark);
        prefs::store_dark_mode(dark);
    });

    let dark = (state.dark_mode)();
    let loading = (state.loading)();
    let error = (state.error_msg)();

    let page_style = if dark {
        "max-width: 900px; margin: 0 auto; padding: 24px; font-family: sans-serif; background: #1B262C; color: #ECEFF1; min-height: 100vh;"
    } else {
        "max-width: 900px; margin: 0 auto; padding: 24px; font-family: sans-serif; background: #FFFFFF; color: #263238; min-height: 100vh;"
    };

    rsx! {
        div {
            style: "{page_style}",
            ThemeToggle {}
            PageHeader {}
            if loading {
                LoadingSpinner {}
            } else {
                if let Some(message) = error {
                    ErrorDisplay { message }
                }
                div {
                    style: "display: flex; gap: 16px;",
                    StateSelector {}
                    DistrictSelector {}
                }
                CropTable {}
            }
        }
    }
}
