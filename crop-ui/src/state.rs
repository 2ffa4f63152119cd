//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided
//! via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use crop_core::aggregate::CropSummary;
use crop_core::record::CropRecord;
use dioxus::prelude::*;

use crate::prefs;

/// Shared application state for the crop viewer.
#[derive(Clone, Copy)]
pub struct AppState {
    /// All dataset rows; read-only once loaded
    pub records: Signal<Vec<CropRecord>>,
    /// Distinct sorted state names
    pub states: Signal<Vec<String>>,
    /// District options for the selected state
    pub districts: Signal<Vec<String>>,
    /// Currently selected state name (empty = none)
    pub selected_state: Signal<String>,
    /// Currently selected district name (empty = none)
    pub selected_district: Signal<String>,
    /// The year resolved once at load time
    pub current_year: Signal<String>,
    /// Crop summaries for the current selection
    pub crops: Signal<Vec<CropSummary>>,
    /// Whether the dataset is still loading
    pub loading: Signal<bool>,
    /// Error message if the dataset could not be loaded
    pub error_msg: Signal<Option<String>>,
    /// Dark mode preference
    pub dark_mode: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    ///
    /// The dark-mode signal starts from the persisted preference (or the
    /// system color-scheme when no preference is stored).
    pub fn new() -> Self {
        Self {
            records: Signal::new(Vec::new()),
            states: Signal::new(Vec::new()),
            districts: Signal::new(Vec::new()),
            selected_state: Signal::new(String::new()),
            selected_district: Signal::new(String::new()),
            current_year: Signal::new(String::new()),
            crops: Signal::new(Vec::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            dark_mode: Signal::new(prefs::load_dark_mode()),
        }
    }
}
