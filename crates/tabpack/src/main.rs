use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use tabpack_io::{ExportPanel, ManifestForm, ManifestPreview};
use tabpack_manifest::{FormEdit, FormFields, IconKind, ManifestTemplate};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the form state in a single signal and wires together the form,
/// the manifest preview, and the export panel.
fn app() -> Element {
    // --- Application state ---
    // The app id inside FormFields is generated here, once per page load.
    let mut form = use_signal(FormFields::new);
    let template = use_hook(ManifestTemplate::default);

    // --- Default icons ---
    // Fetched once at startup. A default never replaces an icon the user
    // picked while the fetch was in flight.
    use_future(move || async move {
        for kind in IconKind::ALL {
            match tabpack_io::loader::fetch_as_data_url(kind.default_asset_path()).await {
                Ok(url) => {
                    if form.peek().icon(kind).is_none() {
                        form.write().set_icon(kind, Some(url));
                        info!(icon = %kind, "loaded default icon");
                    }
                }
                Err(e) => warn!(icon = %kind, "default icon unavailable: {e}"),
            }
        }
    });

    // --- Edit handler ---
    let on_edit = move |edit: FormEdit| {
        form.write().apply(edit);
    };

    let manifest = form.read().manifest(&template);

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/style.css") }

        div { class: "page",
            header { class: "page-header",
                h1 { "Teams Tab Packager" }
                p { "Turn a URL into a Microsoft Teams app you can upload." }
            }

            div { class: "page-body",
                div { class: "page-main",
                    ManifestForm {
                        form: form(),
                        on_edit: on_edit,
                    }
                    ExportPanel {
                        form: form(),
                        template: template.clone(),
                    }
                }

                div { class: "page-side",
                    ManifestPreview { manifest: manifest }
                }
            }
        }
    }
}
