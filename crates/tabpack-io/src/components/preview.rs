//! Read-only view of the manifest that will be packaged.

use dioxus::prelude::*;
use tabpack_manifest::Manifest;

/// Props for the [`ManifestPreview`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ManifestPreviewProps {
    /// The derived manifest to display.
    manifest: Manifest,
}

/// Renders the manifest as indented JSON.
#[component]
pub fn ManifestPreview(props: ManifestPreviewProps) -> Element {
    let json = props
        .manifest
        .to_json_pretty()
        .unwrap_or_else(|e| format!("failed to render manifest: {e}"));

    rsx! {
        div { class: "panel",
            h3 { class: "panel-heading", "manifest.json" }
            pre { class: "manifest-preview", "{json}" }
        }
    }
}
