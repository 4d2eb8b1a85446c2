//! User-editable form state.

use uuid::Uuid;

use crate::icon::IconKind;
use crate::manifest::Manifest;
use crate::template::ManifestTemplate;

/// A single change to the form, as produced by one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEdit {
    Name(String),
    FullName(String),
    Description(String),
    FullDescription(String),
    Url(String),
    /// Replace an icon, or clear it with `None`.
    Icon(IconKind, Option<String>),
}

/// Everything the user can set, plus the session's app id.
///
/// The id is assigned once at construction and never regenerated, so
/// repeated exports from one session describe the same app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    id: Uuid,
    pub name: String,
    /// Falls back to `name` when empty.
    pub full_name: String,
    pub description: String,
    /// Falls back to `description` when empty.
    pub full_description: String,
    /// Page the static tab redirects to.
    pub url: String,
    /// Color icon as a data URL. `None` until loaded or after clearing.
    pub color_icon: Option<String>,
    /// Outline icon as a data URL.
    pub outline_icon: Option<String>,
}

impl FormFields {
    /// Empty form with a fresh random id.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Empty form with a caller-chosen id.
    #[must_use]
    pub const fn with_id(id: Uuid) -> Self {
        Self {
            id,
            name: String::new(),
            full_name: String::new(),
            description: String::new(),
            full_description: String::new(),
            url: String::new(),
            color_icon: None,
            outline_icon: None,
        }
    }

    /// The session's app id.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// `full_name`, or `name` if that is empty.
    #[must_use]
    pub fn effective_full_name(&self) -> &str {
        or_fallback(&self.full_name, &self.name)
    }

    /// `full_description`, or `description` if that is empty.
    #[must_use]
    pub fn effective_full_description(&self) -> &str {
        or_fallback(&self.full_description, &self.description)
    }

    /// Current data URL for one of the icons.
    #[must_use]
    pub fn icon(&self, kind: IconKind) -> Option<&str> {
        match kind {
            IconKind::Color => self.color_icon.as_deref(),
            IconKind::Outline => self.outline_icon.as_deref(),
        }
    }

    /// Replace (or clear, with `None`) one of the icons.
    pub fn set_icon(&mut self, kind: IconKind, data_url: Option<String>) {
        match kind {
            IconKind::Color => self.color_icon = data_url,
            IconKind::Outline => self.outline_icon = data_url,
        }
    }

    /// Apply one edit in place.
    pub fn apply(&mut self, edit: FormEdit) {
        match edit {
            FormEdit::Name(v) => self.name = v,
            FormEdit::FullName(v) => self.full_name = v,
            FormEdit::Description(v) => self.description = v,
            FormEdit::FullDescription(v) => self.full_description = v,
            FormEdit::Url(v) => self.url = v,
            FormEdit::Icon(kind, data_url) => self.set_icon(kind, data_url),
        }
    }

    /// Derive the manifest for the current field values.
    #[must_use]
    pub fn manifest(&self, template: &ManifestTemplate) -> Manifest {
        Manifest::from_form(self, template)
    }
}

impl Default for FormFields {
    fn default() -> Self {
        Self::new()
    }
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_falls_back_to_name() {
        let mut form = FormFields::new();
        form.name = "Wiki".to_owned();
        assert_eq!(form.effective_full_name(), "Wiki");

        form.full_name = "Team Wiki".to_owned();
        assert_eq!(form.effective_full_name(), "Team Wiki");
    }

    #[test]
    fn full_description_falls_back_to_description() {
        let mut form = FormFields::new();
        form.description = "Docs".to_owned();
        assert_eq!(form.effective_full_description(), "Docs");
    }

    #[test]
    fn whitespace_does_not_trigger_fallback() {
        let mut form = FormFields::new();
        form.name = "Wiki".to_owned();
        form.full_name = " ".to_owned();
        assert_eq!(form.effective_full_name(), " ");
    }

    #[test]
    fn id_is_stable() {
        let form = FormFields::new();
        let first = form.id();
        let cloned = form.clone();
        assert_eq!(first, form.id());
        assert_eq!(first, cloned.id());
    }

    #[test]
    fn new_forms_get_distinct_ids() {
        assert_ne!(FormFields::new().id(), FormFields::new().id());
    }

    #[test]
    fn edits_touch_only_their_field() {
        let mut form = FormFields::new();
        let id = form.id();
        form.apply(FormEdit::Name("Wiki".to_owned()));
        form.apply(FormEdit::Url("https://wiki.example".to_owned()));
        form.apply(FormEdit::Icon(
            IconKind::Outline,
            Some("data:image/png;base64,AAAA".to_owned()),
        ));

        assert_eq!(form.name, "Wiki");
        assert_eq!(form.url, "https://wiki.example");
        assert!(form.full_name.is_empty());
        assert_eq!(form.icon(IconKind::Color), None);
        assert!(form.icon(IconKind::Outline).is_some());
        assert_eq!(form.id(), id);
    }

    #[test]
    fn clearing_an_icon_drops_the_old_value() {
        let mut form = FormFields::new();
        form.set_icon(IconKind::Color, Some("data:image/png;base64,AAAA".to_owned()));
        assert!(form.icon(IconKind::Color).is_some());

        form.set_icon(IconKind::Color, None);
        assert_eq!(form.icon(IconKind::Color), None);
        assert_eq!(form.icon(IconKind::Outline), None);
    }
}
