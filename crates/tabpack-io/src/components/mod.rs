//! Dioxus UI components for tabpack.
//!
//! Provides the form (text fields and icon pickers), the manifest
//! preview, and the export panel.

mod export;
mod form;
mod image_input;
mod preview;

pub use export::ExportPanel;
pub use form::ManifestForm;
pub use image_input::ImageInput;
pub use preview::ManifestPreview;
