//! Export panel with the package download button.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdDownload;
use tabpack_manifest::{FormFields, IconKind, ManifestTemplate};

use crate::download;

/// Props for the [`ExportPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ExportPanelProps {
    /// Fields to package.
    form: FormFields,
    /// Fixed manifest values.
    template: ManifestTemplate,
}

/// Download button for the app package.
///
/// The button stays disabled until both icons are present. Packaging or
/// navigation failures are shown below the button.
#[component]
pub fn ExportPanel(props: ExportPanelProps) -> Element {
    let mut export_error = use_signal(|| Option::<String>::None);

    let missing: Vec<IconKind> = IconKind::ALL
        .into_iter()
        .filter(|kind| props.form.icon(*kind).is_none())
        .collect();
    let ready = missing.is_empty();
    let missing_label = missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let create_click = {
        let form = props.form.clone();
        let template = props.template;
        move |_| {
            let outcome = tabpack_export::build_archive_from_form(&form, &template)
                .map_err(|e| e.to_string())
                .and_then(|archive| {
                    tracing::info!(id = %form.id(), bytes = archive.len(), "downloading package");
                    download::navigate_to_data_url(&tabpack_export::archive_data_url(&archive))
                        .map_err(|e| format!("Download failed: {e}"))
                });
            match outcome {
                Ok(()) => export_error.set(None),
                Err(e) => {
                    tracing::error!("{e}");
                    export_error.set(Some(e));
                }
            }
        }
    };

    let enabled_class = "btn btn-primary";
    let disabled_class = "btn btn-disabled";

    rsx! {
        div { class: "panel",
            h3 { class: "panel-heading", "Package" }

            if !ready {
                p { class: "field-hint", "Waiting for icons: {missing_label}" }
            }

            if let Some(ref err) = export_error() {
                p { class: "field-error", "{err}" }
            }

            button {
                class: if ready { enabled_class } else { disabled_class },
                disabled: !ready,
                onclick: create_click,
                Icon { icon: LdDownload, width: 16, height: 16 }
                "Create"
            }
        }
    }
}
