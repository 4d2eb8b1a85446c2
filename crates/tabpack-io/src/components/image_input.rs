//! Icon picker with inline preview.

use dioxus::html::HasFileData;
use dioxus::prelude::*;
use tabpack_manifest::{IconKind, decode_data_url, inspect_icon};

use crate::generation::Generation;
use crate::loader;

/// Props for the [`ImageInput`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ImageInputProps {
    /// Which icon this input edits.
    kind: IconKind,
    /// Current icon as a data URL, if any.
    value: Option<String>,
    /// Called with the new data URL, or `None` when the selection is cleared.
    on_change: EventHandler<Option<String>>,
}

/// A clickable tile that opens the file picker and previews the icon.
///
/// Cancelling the picker (no file selected) clears the icon rather than
/// keeping the previous one. Reads that finish after a newer selection
/// are dropped.
#[component]
pub fn ImageInput(props: ImageInputProps) -> Element {
    let mut generation = use_signal(Generation::default);
    let mut error = use_signal(|| Option::<String>::None);

    let kind = props.kind;
    let on_change = props.on_change;
    let id = format!("{}-icon", kind.to_string().to_lowercase());

    let handle_files = move |evt: FormEvent| async move {
        let my_generation = generation.write().begin();

        let files = evt.files();
        let Some(file) = files.first() else {
            error.set(None);
            on_change.call(None);
            return;
        };

        let outcome = loader::read_file_as_data_url(file).await;
        if !generation.peek().is_current(my_generation) {
            return;
        }

        match outcome {
            Ok(url) => {
                error.set(None);
                on_change.call(Some(url));
            }
            Err(e) => {
                tracing::warn!(icon = %kind, "{e}");
                error.set(Some(e.to_string()));
            }
        }
    };

    let hint = props.value.as_deref().and_then(|url| size_hint(kind, url));

    rsx! {
        div { class: "field",
            label { r#for: "{id}", class: "field-label", "{kind} Icon" }
            label { class: "image-input",
                if let Some(ref src) = props.value {
                    img { class: "image-input-preview", src: "{src}", alt: "{kind} icon" }
                    span { "Click to change" }
                } else {
                    span { "Select File" }
                }
                input {
                    r#type: "file",
                    id: "{id}",
                    accept: loader::ACCEPTED_IMAGE_TYPES,
                    class: "hidden",
                    onchange: handle_files,
                }
            }
            if let Some(ref hint) = hint {
                p { class: "field-hint", "{hint}" }
            }
            if let Some(ref err) = error() {
                p { class: "field-error", "{err}" }
            }
        }
    }
}

/// Advisory note when an icon is not the PNG size Teams expects.
fn size_hint(kind: IconKind, data_url: &str) -> Option<String> {
    let size = kind.expected_size();
    let info = decode_data_url(data_url)
        .ok()
        .and_then(|bytes| inspect_icon(&bytes).ok());
    match info {
        Some(info) if info.matches(kind) => None,
        Some(info) => Some(format!(
            "Teams expects a {size}x{size} PNG; this image is {}x{} {:?}.",
            info.width, info.height, info.format
        )),
        None => Some(format!("Could not read this image; Teams expects a {size}x{size} PNG.")),
    }
}
