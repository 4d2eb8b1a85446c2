//! Package download via `data:` URL navigation.
//!
//! Pointing the window at a `data:application/zip;base64,...` URL makes
//! the browser save the archive instead of rendering it. Unlike a Blob
//! object URL there is nothing to revoke afterwards.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsValue;

/// Errors that can occur when triggering a download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Navigate the current window to `data_url`.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if there is no window or the
/// browser rejects the navigation.
pub fn navigate_to_data_url(data_url: &str) -> Result<(), DownloadError> {
    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".into()))?;
    window.location().set_href(data_url)?;
    Ok(())
}
