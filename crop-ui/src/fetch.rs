//! Browser-side fetch of the dataset CSV.
//!
//! Errors are plain strings for the caller to log or display; the app
//! treats a failed fetch as an empty dataset, never a crash.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetch a text resource from the given URL via the browser `fetch` API.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "window object not found".to_string())?;

    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|_| format!("network error fetching {url}"))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "fetch returned a non-Response value".to_string())?;

    if !resp.ok() {
        return Err(format!("HTTP {} fetching {url}", resp.status()));
    }

    let text_promise = resp
        .text()
        .map_err(|_| "response body unavailable".to_string())?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|_| "failed reading response body".to_string())?;

    let body = text
        .as_string()
        .ok_or_else(|| "response body was not text".to_string())?;
    log::info!("fetch: {} bytes from {url}", body.len());
    Ok(body)
}
