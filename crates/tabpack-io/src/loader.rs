//! Turning browser files and same-origin assets into `data:` URLs.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use dioxus::html::FileData;
use tabpack_manifest::{DataUrl, mime_for_filename};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// MIME type assumed when a response carries no `Content-Type`.
const FALLBACK_MIME: &str = "image/png";

/// `accept` list for the icon file picker: every image type
/// [`mime_for_filename`] recognises.
pub const ACCEPTED_IMAGE_TYPES: &str =
    "image/png,image/jpeg,image/gif,image/bmp,image/webp,image/svg+xml";

/// Errors that can occur while loading an image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),

    /// The selected file could not be read.
    #[error("failed to read file: {0}")]
    Read(String),

    /// The asset request completed with a non-success status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u16 },
}

impl From<JsValue> for LoadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Read a user-selected file and encode it as a data URL.
///
/// The MIME type is taken from the file extension.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the browser fails to read the file.
#[allow(clippy::future_not_send)] // WASM is single-threaded; FileData is !Send
pub async fn read_file_as_data_url(file: &FileData) -> Result<String, LoadError> {
    let name = file.name();
    let bytes = file
        .read_bytes()
        .await
        .map_err(|e| LoadError::Read(format!("{name}: {e}")))?;
    tracing::debug!(file = %name, bytes = bytes.len(), "read selected file");
    Ok(DataUrl::encode(mime_for_filename(&name), bytes.to_vec()).to_string())
}

/// Fetch a same-origin asset and encode it as a data URL.
///
/// Used at startup to load the bundled default icons.
///
/// # Errors
///
/// Returns [`LoadError::Http`] for a non-2xx response and
/// [`LoadError::JsError`] if the fetch or body read fails.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Response is !Send
pub async fn fetch_as_data_url(url: &str) -> Result<String, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::JsError("no global window".into()))?;

    let response: web_sys::Response = JsFuture::from(window.fetch_with_str(url))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(LoadError::Http {
            url: url.to_owned(),
            status: response.status(),
        });
    }

    let content_type = response.headers().get("content-type")?;
    let mime = essence(content_type.as_deref());

    let buffer = JsFuture::from(response.array_buffer()?).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    tracing::debug!(url, mime, bytes = bytes.len(), "fetched asset");

    Ok(DataUrl::encode(mime, bytes).to_string())
}

/// Strip parameters from a `Content-Type` value, e.g.
/// `image/png; charset=binary` becomes `image/png`.
fn essence(content_type: Option<&str>) -> &str {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .filter(|mime| !mime.is_empty())
        .unwrap_or(FALLBACK_MIME)
}
