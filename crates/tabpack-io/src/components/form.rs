//! Editable form for the app details and icons.

use dioxus::prelude::*;
use tabpack_manifest::{FormEdit, FormFields, IconKind};

use super::ImageInput;

/// Props for the [`ManifestForm`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ManifestFormProps {
    /// Current field values (read-only).
    form: FormFields,
    /// Callback fired with each individual edit.
    on_edit: EventHandler<FormEdit>,
}

/// Text inputs for name, description and URL, plus both icon pickers.
///
/// Edits are reported one field at a time rather than as a whole new
/// [`FormFields`], so an icon read that resolves late cannot roll back
/// text typed in the meantime.
///
/// The "full" variants show the short value as placeholder, since an
/// empty full field falls back to it.
#[component]
pub fn ManifestForm(props: ManifestFormProps) -> Element {
    let form = &props.form;
    let on_edit = props.on_edit;

    let edit = move |wrap: fn(String) -> FormEdit| move |value: String| on_edit.call(wrap(value));
    let edit_icon = move |kind: IconKind| move |value: Option<String>| on_edit.call(FormEdit::Icon(kind, value));

    rsx! {
        div { class: "form-grid",
            {render_text_field(
                "name",
                "Name",
                "Shown in the app bar and as the tab title.",
                &form.name,
                "",
                edit(FormEdit::Name),
            )}
            {render_text_field(
                "full-name",
                "Full Name",
                "Optional; defaults to the name.",
                &form.full_name,
                &form.name,
                edit(FormEdit::FullName),
            )}
            {render_text_field(
                "description",
                "Description",
                "",
                &form.description,
                "",
                edit(FormEdit::Description),
            )}
            {render_text_field(
                "full-description",
                "Full Description",
                "Optional; defaults to the description.",
                &form.full_description,
                &form.description,
                edit(FormEdit::FullDescription),
            )}
            {render_text_field(
                "url",
                "URL",
                "Page the tab opens.",
                &form.url,
                "https://",
                edit(FormEdit::Url),
            )}

            div { class: "icon-row",
                ImageInput {
                    kind: IconKind::Color,
                    value: form.color_icon.clone(),
                    on_change: edit_icon(IconKind::Color),
                }
                ImageInput {
                    kind: IconKind::Outline,
                    value: form.outline_icon.clone(),
                    on_change: edit_icon(IconKind::Outline),
                }
            }
        }
    }
}

/// Render a labeled single-line text input with an optional description.
fn render_text_field(
    id: &str,
    label: &str,
    description: &str,
    value: &str,
    placeholder: &str,
    on_input: impl Fn(String) + 'static,
) -> Element {
    let id = id.to_string();
    let label = label.to_string();
    let description = description.to_string();
    let value = value.to_string();
    let placeholder = placeholder.to_string();

    rsx! {
        div { class: "field",
            label { r#for: "{id}", class: "field-label", "{label}" }
            input {
                r#type: "text",
                id: "{id}",
                value: "{value}",
                placeholder: "{placeholder}",
                class: "field-input",
                oninput: move |e| on_input(e.value()),
            }
            if !description.is_empty() {
                p { class: "field-hint", "{description}" }
            }
        }
    }
}
