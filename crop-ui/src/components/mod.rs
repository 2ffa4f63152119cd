//! Reusable Dioxus RSX components for the crop viewer.

mod crop_table;
mod district_selector;
mod error_display;
mod loading_spinner;
mod no_data;
mod page_header;
mod state_selector;
mod theme_toggle;

pub use crop_table::CropTable;
pub use district_selector::DistrictSelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use no_data::NoData;
pub use page_header::PageHeader;
pub use state_selector::StateSelector;
pub use theme_toggle::ThemeToggle;
