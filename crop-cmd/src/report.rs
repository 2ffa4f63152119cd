//! Read-only dataset reports: states, district options, top crops.
//!
//! These drive the same `SelectionState` machine the viewer's boundary
//! exposes, so the CLI output always agrees with what the browser app
//! would display for the same selection.

use anyhow::Context;
use crop_core::aggregate::CropSummary;
use crop_core::dataset::Dataset;
use crop_core::selection::SelectionState;
use log::info;

fn load_dataset(path: &str) -> anyhow::Result<Dataset> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset at {path}"))?;
    let dataset = Dataset::from_csv(&raw);
    info!(
        "Loaded {} records ({} states), resolved year {:?}",
        dataset.records.len(),
        dataset.states.len(),
        dataset.current_year
    );
    Ok(dataset)
}

/// Print the distinct states, one per line.
pub fn run_states(path: &str) -> anyhow::Result<()> {
    let dataset = load_dataset(path)?;
    for state in &dataset.states {
        println!("{state}");
    }
    Ok(())
}

/// Print the district options for a state, one per line.
pub fn run_districts(path: &str, state: &str) -> anyhow::Result<()> {
    let dataset = load_dataset(path)?;
    let mut selection = SelectionState::new(dataset);
    selection.select_state(state);
    for district in selection.districts() {
        println!("{district}");
    }
    Ok(())
}

/// Print the top-crop table for a (state, district) selection.
///
/// Uses the dataset's resolved year unless overridden.
pub fn run_crops(
    path: &str,
    state: &str,
    district: &str,
    year: Option<&str>,
) -> anyhow::Result<()> {
    let mut dataset = load_dataset(path)?;
    if let Some(year) = year {
        dataset.current_year = year.to_string();
    }
    let year_label = dataset.current_year.clone();

    let mut selection = SelectionState::new(dataset);
    selection.select_state(state);
    selection.select_district(district);

    if selection.crops().is_empty() {
        println!("No crop data for {district}, {state} in {year_label}.");
        return Ok(());
    }

    println!("Top crops for {district}, {state} ({year_label}):");
    print!("{}", format_crop_table(selection.crops()));
    Ok(())
}

/// Fixed-width text rendering of the summary table.
fn format_crop_table(crops: &[CropSummary]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<20} {:<12} {:>18} {:>20} {:>8}\n",
        "Crop", "Season", "Area", "Production", "Yield"
    ));
    for summary in crops {
        out.push_str(&format!(
            "{:<20} {:<12} {:>18} {:>20} {:>8.2}\n",
            summary.crop,
            summary.season,
            format!("{:.2} {}", summary.area, summary.area_units),
            format!("{:.2} {}", summary.production, summary.production_units),
            summary.yield_value
        ));
    }
    out
}
