//! Synchronous selection state machine over a loaded dataset.
//!
//! This is the presentation boundary expressed as plain data: the
//! display layer (CLI, tests, or a reactive shell that prefers to own
//! its own signals) feeds selection changes in and reads the derived
//! lists back out. Derivations are recomputed eagerly on every change;
//! nothing is cached across selections.

use crate::aggregate::{district_options, top_crops, CropSummary};
use crate::dataset::Dataset;

/// Current selection plus everything derived from it.
///
/// Hard invariant: changing the state always clears the selected
/// district and the crop summaries, whether or not the new state has
/// districts. Summaries are always scoped to exactly one
/// (state, district, resolved year) triple.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    dataset: Dataset,
    selected_state: String,
    selected_district: String,
    districts: Vec<String>,
    crops: Vec<CropSummary>,
}

impl SelectionState {
    /// Wrap a loaded dataset with an empty selection.
    pub fn new(dataset: Dataset) -> Self {
        SelectionState {
            dataset,
            ..Default::default()
        }
    }

    /// Distinct sorted state names of the dataset.
    pub fn states(&self) -> &[String] {
        &self.dataset.states
    }

    /// District options for the currently selected state.
    pub fn districts(&self) -> &[String] {
        &self.districts
    }

    /// Crop summaries for the current (state, district, year) triple.
    pub fn crops(&self) -> &[CropSummary] {
        &self.crops
    }

    /// The year resolved once at load time; display-only.
    pub fn current_year(&self) -> &str {
        &self.dataset.current_year
    }

    pub fn selected_state(&self) -> &str {
        &self.selected_state
    }

    pub fn selected_district(&self) -> &str {
        &self.selected_district
    }

    /// Select a state (empty string clears the selection).
    ///
    /// Recomputes the district options and unconditionally invalidates
    /// the selected district and the summaries.
    pub fn select_state(&mut self, state: &str) {
        self.selected_state = state.to_string();
        self.districts = district_options(&self.dataset.records, state);
        self.selected_district.clear();
        self.crops.clear();
    }

    /// Select a district within the current state (empty string clears).
    ///
    /// Recomputes the summaries against the resolved year.
    pub fn select_district(&mut self, district: &str) {
        self.selected_district = district.to_string();
        self.crops = top_crops(
            &self.dataset.records,
            &self.selected_state,
            &self.selected_district,
            &self.dataset.current_year,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn fixture() -> SelectionState {
        let csv = "State,District,Year,Crop,Season,Area,Area Units,Production,Production Units,Yield\n\
                   Punjab,Ludhiana,2025,Wheat,Rabi,100,Hectare,400,Tonnes,4.0\n\
                   Punjab,Ludhiana,2025,Wheat,Rabi,50,Hectare,210,Tonnes,4.2\n\
                   Punjab,Ludhiana,2025,Rice,Kharif,80,Hectare,200,Tonnes,2.5\n\
                   Punjab,Amritsar,2025,Rice,Kharif,60,Hectare,150,Tonnes,2.5\n\
                   Assam,Jorhat,2025,Tea,Whole Year,30,Hectare,45,Tonnes,1.5\n";
        SelectionState::new(Dataset::from_csv(csv))
    }

    #[test]
    fn full_selection_produces_ranked_crops() {
        let mut selection = fixture();
        selection.select_state("Punjab");
        assert_eq!(selection.districts(), ["Amritsar", "Ludhiana"]);
        selection.select_district("Ludhiana");
        let crops = selection.crops();
        assert_eq!(crops.len(), 2);
        assert_eq!(crops[0].crop, "Wheat");
        assert_eq!(crops[0].area, 150.0);
        assert_eq!(crops[1].crop, "Rice");
        assert_eq!(crops[1].area, 80.0);
    }

    #[test]
    fn state_change_invalidates_district_and_crops() {
        let mut selection = fixture();
        selection.select_state("Punjab");
        selection.select_district("Ludhiana");
        assert!(!selection.crops().is_empty());

        selection.select_state("Assam");
        assert_eq!(selection.selected_district(), "");
        assert!(selection.crops().is_empty());
        assert_eq!(selection.districts(), ["Jorhat"]);
    }

    #[test]
    fn clearing_state_clears_everything_downstream() {
        let mut selection = fixture();
        selection.select_state("Punjab");
        selection.select_district("Amritsar");
        selection.select_state("");
        assert!(selection.districts().is_empty());
        assert_eq!(selection.selected_district(), "");
        assert!(selection.crops().is_empty());
    }

    #[test]
    fn district_without_data_for_year_yields_empty() {
        let csv = "State,District,Year,Crop,Season,Area,Area Units,Production,Production Units,Yield\n\
                   Punjab,Ludhiana,2025,Wheat,Rabi,100,Hectare,400,Tonnes,4.0\n\
                   Punjab,Patiala,2023,Wheat,Rabi,100,Hectare,400,Tonnes,4.0\n";
        let mut selection = SelectionState::new(Dataset::from_csv(csv));
        selection.select_state("Punjab");
        // Patiala only has 2023 data; the resolved year is 2025
        selection.select_district("Patiala");
        assert!(selection.crops().is_empty());
    }

    #[test]
    fn empty_dataset_is_tolerated() {
        let mut selection = SelectionState::new(Dataset::from_csv(""));
        assert!(selection.states().is_empty());
        selection.select_state("Punjab");
        selection.select_district("Ludhiana");
        assert!(selection.crops().is_empty());
        assert_eq!(selection.current_year(), "");
    }
}
