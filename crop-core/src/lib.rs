//! Core data layer for the crop region viewer.
//!
//! This crate is the whole non-presentation surface of the viewer:
//! - `record`: one parsed row of the agricultural dataset
//! - `dataset`: CSV loading plus the derived state list and resolved year
//! - `aggregate`: district derivation and top-crop summaries
//! - `selection`: the synchronous selection state machine the display
//!   layer (web or CLI) drives
//!
//! Everything here is plain in-memory data; no IO beyond parsing a CSV
//! string handed in by the caller. The loaders degrade to empty
//! collections on malformed input rather than erroring, because the
//! viewer has no one to surface a fatal error to beyond the screen.
//!
//! # Usage
//!
//! ```rust
//! use crop_core::dataset::Dataset;
//! use crop_core::selection::SelectionState;
//!
//! let csv = "State,District,Year,Crop,Season,Area,Area Units,Production,Production Units,Yield\n\
//!            Punjab,Ludhiana,2025,Wheat,Rabi,100,Hectare,400,Tonnes,4.0\n";
//! let dataset = Dataset::from_csv(csv);
//! assert_eq!(dataset.states, vec!["Punjab"]);
//! assert_eq!(dataset.current_year, "2025");
//!
//! let mut selection = SelectionState::new(dataset);
//! selection.select_state("Punjab");
//! selection.select_district("Ludhiana");
//! assert_eq!(selection.crops()[0].crop, "Wheat");
//! ```

pub mod aggregate;
pub mod dataset;
pub mod record;
pub mod selection;
