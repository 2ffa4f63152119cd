//! Shared Dioxus components and reactive state for the crop viewer app.
//!
//! This crate provides:
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `fetch`: browser-side fetch of the dataset CSV
//! - `prefs`: dark-mode preference persistence (silent-failure)
//! - `components`: reusable RSX components (selectors, table, toggle)

pub mod components;
pub mod fetch;
pub mod prefs;
pub mod state;
