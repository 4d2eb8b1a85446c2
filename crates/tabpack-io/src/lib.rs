//! tabpack-io: Browser I/O and Dioxus component library.
//!
//! Handles file reads, asset fetches, data-URL downloads, and provides
//! the UI components for the tabpack web application.

pub mod components;
pub mod download;
pub mod generation;
pub mod loader;

pub use components::{ExportPanel, ImageInput, ManifestForm, ManifestPreview};
