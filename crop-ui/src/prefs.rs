//! Dark-mode preference persistence.
//!
//! The preference lives in browser local storage under a single key,
//! serialized as a JSON boolean. Every access tolerates a missing or
//! failing storage (private browsing, sandboxed frames): reads fall back
//! to the system color scheme, writes are simply dropped.

const DARK_MODE_KEY: &str = "darkMode";

/// Resolve the initial dark-mode value: stored preference first, then
/// the `prefers-color-scheme` media query, then light.
pub fn load_dark_mode() -> bool {
    stored_dark_mode().unwrap_or_else(system_prefers_dark)
}

fn stored_dark_mode() -> Option<bool> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(DARK_MODE_KEY).ok()??;
    serde_json::from_str::<bool>(&raw).ok()
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|list| list.matches())
        .unwrap_or(false)
}

/// Persist the preference. Storage failures are ignored; the in-memory
/// value still applies for the session.
pub fn store_dark_mode(enabled: bool) {
    if let Some(storage) = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
    {
        let _ = storage.set_item(DARK_MODE_KEY, if enabled { "true" } else { "false" });
    }
}

/// Apply or remove the `dark` class on the document root so page-level
/// CSS can follow the preference.
pub fn apply_theme(dark: bool) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        root.set_class_name(if dark { "dark" } else { "" });
    }
}
