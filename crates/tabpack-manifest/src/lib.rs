//! tabpack-manifest: form state and manifest derivation (sans-IO).
//!
//! Holds the user-editable fields, projects them into a Teams app
//! manifest, and converts icons between bytes and `data:` URLs.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! strings and byte slices. Browser interaction lives in `tabpack-io`,
//! archive assembly in `tabpack-export`.

pub mod data_url;
pub mod form;
pub mod icon;
pub mod manifest;
pub mod template;

pub use data_url::{DataUrl, DataUrlError, decode_data_url, mime_for_filename, strip_data_url_prefix};
pub use form::{FormEdit, FormFields};
pub use icon::{IconError, IconInfo, IconKind, inspect_icon};
pub use manifest::{Manifest, StaticTab, content_url};
pub use template::{Developer, ManifestTemplate};

/// Re-export so downstream crates can name session ids without
/// depending on `uuid` directly.
pub use uuid::Uuid;
