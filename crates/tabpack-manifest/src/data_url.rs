//! `data:` URL encoding and decoding.
//!
//! Icons travel through the form as base64 data URLs (the same string an
//! `<img src>` accepts), and are only turned back into bytes when the
//! archive is written.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Marker separating the MIME type from the base64 payload.
const BASE64_MARKER: &str = ";base64,";

/// Errors from parsing or decoding a data URL.
#[derive(Debug, thiserror::Error)]
pub enum DataUrlError {
    /// The string does not start with `data:<mime>;base64,`.
    #[error("not a base64 data URL")]
    MissingPrefix,

    /// The payload is not valid base64.
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// A decoded `data:<mime>;base64,<payload>` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    mime: String,
    data: Vec<u8>,
}

impl DataUrl {
    /// Wrap raw bytes with their MIME type.
    #[must_use]
    pub fn encode(mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            data,
        }
    }

    /// Parse a data URL string.
    ///
    /// # Errors
    ///
    /// Returns [`DataUrlError::MissingPrefix`] if the string lacks a
    /// `data:<mime>;base64,` prefix, or [`DataUrlError::Base64`] if the
    /// payload does not decode.
    pub fn parse(s: &str) -> Result<Self, DataUrlError> {
        let (mime, payload) = split_prefix(s).ok_or(DataUrlError::MissingPrefix)?;
        Ok(Self {
            mime: mime.to_owned(),
            data: STANDARD.decode(payload)?,
        })
    }

    /// The MIME type, e.g. `image/png`.
    #[must_use]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// The decoded bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the URL and returns the decoded bytes.
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{}{BASE64_MARKER}{}", self.mime, STANDARD.encode(&self.data))
    }
}

/// Split `data:<mime>;base64,<payload>` into `(mime, payload)`.
///
/// The MIME segment must be non-empty and extends to the *last*
/// `;base64,` marker.
fn split_prefix(s: &str) -> Option<(&str, &str)> {
    let rest = s.strip_prefix("data:")?;
    let idx = rest.rfind(BASE64_MARKER)?;
    if idx == 0 {
        return None;
    }
    Some((&rest[..idx], &rest[idx + BASE64_MARKER.len()..]))
}

/// Remove a leading `data:<mime>;base64,` prefix, if present.
///
/// Strings without the prefix are returned unchanged so that bare base64
/// payloads pass straight through.
#[must_use]
pub fn strip_data_url_prefix(s: &str) -> &str {
    split_prefix(s).map_or(s, |(_, payload)| payload)
}

/// Strip the prefix (if any) and base64-decode the remainder.
///
/// # Errors
///
/// Returns [`DataUrlError::Base64`] if the payload is not valid base64.
pub fn decode_data_url(s: &str) -> Result<Vec<u8>, DataUrlError> {
    Ok(STANDARD.decode(strip_data_url_prefix(s))?)
}

/// Guess a MIME type from a filename's extension.
#[must_use]
pub fn mime_for_filename(name: &str) -> &'static str {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return "application/octet-stream";
    };
    match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
