//! Teams app package writer.
//!
//! A package is a zip with exactly three entries, in this order:
//!
//! | entry           | contents                              |
//! |-----------------|---------------------------------------|
//! | `manifest.json` | compact UTF-8 JSON of the [`Manifest`] |
//! | `color.png`     | decoded color icon                    |
//! | `outline.png`   | decoded outline icon                  |
//!
//! Icons arrive as `data:` URLs (or bare base64); the prefix is stripped
//! and the payload stored as binary. Entries carry the zip epoch
//! timestamp so identical input yields identical bytes.
//!
//! This is a pure function with no I/O -- it returns a `Vec<u8>`.

use std::io::{Cursor, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tabpack_manifest::{
    DataUrlError, FormFields, IconKind, Manifest, ManifestTemplate, decode_data_url,
};
use zip::DateTime;
use zip::write::SimpleFileOptions;

/// Name of the manifest entry.
pub const MANIFEST_ENTRY: &str = "manifest.json";

/// Entry names in archive order.
pub const ENTRY_NAMES: [&str; 3] = [
    MANIFEST_ENTRY,
    IconKind::Color.filename(),
    IconKind::Outline.filename(),
];

/// MIME type of the finished package.
pub const ARCHIVE_MIME: &str = "application/zip";

/// Errors that can occur while writing a package.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// An icon has not been loaded.
    #[error("{0} icon is missing")]
    MissingIcon(IconKind),

    /// An icon's data URL could not be decoded.
    #[error("{kind} icon is not valid base64: {source}")]
    InvalidIcon {
        kind: IconKind,
        #[source]
        source: DataUrlError,
    },

    /// The manifest could not be serialized.
    #[error("failed to serialize manifest: {0}")]
    Json(#[from] serde_json::Error),

    /// The zip writer failed.
    #[error("failed to write archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("failed to write archive entry: {0}")]
    Io(#[from] std::io::Error),
}

/// Build a package from a manifest and the two icon data URLs.
///
/// # Errors
///
/// Returns [`ExportError::InvalidIcon`] if either icon payload is not
/// valid base64, or a [`ExportError::Zip`] / [`ExportError::Io`] if the
/// archive cannot be written.
pub fn build_archive(
    manifest: &Manifest,
    color_icon: &str,
    outline_icon: &str,
) -> Result<Vec<u8>, ExportError> {
    let manifest_json = manifest.to_json()?;
    let color = decode_icon(IconKind::Color, color_icon)?;
    let outline = decode_icon(IconKind::Outline, outline_icon)?;

    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, bytes) in ENTRY_NAMES
        .iter()
        .zip([manifest_json.as_bytes(), color.as_slice(), outline.as_slice()])
    {
        zip.start_file(*name, options)?;
        zip.write_all(bytes)?;
    }
    let archive = zip.finish()?.into_inner();

    tracing::debug!(
        id = %manifest.id,
        bytes = archive.len(),
        "built app package"
    );
    Ok(archive)
}

/// Derive the manifest from `form` and package it with the form's icons.
///
/// # Errors
///
/// Returns [`ExportError::MissingIcon`] if either icon is `None`, plus
/// everything [`build_archive`] can return.
pub fn build_archive_from_form(
    form: &FormFields,
    template: &ManifestTemplate,
) -> Result<Vec<u8>, ExportError> {
    let color = form
        .icon(IconKind::Color)
        .ok_or(ExportError::MissingIcon(IconKind::Color))?;
    let outline = form
        .icon(IconKind::Outline)
        .ok_or(ExportError::MissingIcon(IconKind::Outline))?;
    build_archive(&form.manifest(template), color, outline)
}

/// Encode a finished package as a `data:application/zip;base64,` URL.
#[must_use]
pub fn archive_data_url(archive: &[u8]) -> String {
    format!("data:{ARCHIVE_MIME};base64,{}", STANDARD.encode(archive))
}

fn decode_icon(kind: IconKind, data_url: &str) -> Result<Vec<u8>, ExportError> {
    decode_data_url(data_url).map_err(|source| ExportError::InvalidIcon { kind, source })
}
