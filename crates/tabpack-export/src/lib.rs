//! tabpack-export: Teams app package writer (sans-IO)
//!
//! Turns a manifest and two icons into the zip Teams accepts for
//! sideloading, and encodes it as a `data:` URL for download.

pub mod archive;

pub use archive::{
    ARCHIVE_MIME, ENTRY_NAMES, ExportError, MANIFEST_ENTRY, archive_data_url, build_archive,
    build_archive_from_form,
};
