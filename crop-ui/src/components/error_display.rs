//! Error banner for dataset-load failures.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Banner shown when the crop dataset could not be loaded.
///
/// The viewer keeps running against an empty dataset; this banner only
/// tells the user why every dropdown is empty. Colors follow the
/// current theme instead of a fixed light palette.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let state = use_context::<AppState>();
    let style = banner_style((state.dark_mode)());

    rsx! {
        div {
            style: "{style}",
            strong { "Dataset unavailable: " }
            "{props.message}"
        }
    }
}

fn banner_style(dark: bool) -> String {
    let (bg, fg, border) = if dark {
        ("#4E342E", "#FFCCBC", "#6D4C41")
    } else {
        ("#FBE9E7", "#BF360C", "#FFAB91")
    };
    format!(
        "padding: 12px 16px; margin: 8px 0; border-radius: 4px; background: {bg}; color: {fg}; border: 1px solid {border};"
    )
}

#[cfg(test)]
mod tests {
    use super::banner_style;

    #[test]
    fn banner_follows_theme() {
        let light = banner_style(false);
        let dark = banner_style(true);
        assert_ne!(light, dark);
        assert!(light.contains("background: #FBE9E7"));
        assert!(dark.contains("background: #4E342E"));
    }
}
