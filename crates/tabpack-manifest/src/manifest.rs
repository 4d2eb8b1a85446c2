//! Teams app manifest (schema v1.16) derived from the form.
//!
//! Only the keys tabpack fills in are modelled. Field order matches the
//! order keys appear in the emitted JSON.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::form::FormFields;
use crate::icon::IconKind;
use crate::template::{Developer, ManifestTemplate};

/// Scope every tab is registered under.
pub const PERSONAL_SCOPE: &str = "personal";

/// `entityId` of the built-in About tab.
pub const ABOUT_ENTITY_ID: &str = "about";

/// Characters escaped in a query component: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, the same set browsers leave alone
/// in `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A short/full text pair, used for both `name` and `description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortFull {
    pub short: String,
    pub full: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icons {
    pub outline: String,
    pub color: String,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            outline: IconKind::Outline.filename().to_owned(),
            color: IconKind::Color.filename().to_owned(),
        }
    }
}

/// One entry of `staticTabs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticTab {
    pub entity_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    pub scopes: Vec<String>,
}

impl StaticTab {
    /// The built-in About tab.
    #[must_use]
    pub fn about() -> Self {
        Self {
            entity_id: ABOUT_ENTITY_ID.to_owned(),
            name: None,
            content_url: None,
            scopes: vec![PERSONAL_SCOPE.to_owned()],
        }
    }
}

/// The `manifest.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub version: String,
    pub manifest_version: String,
    pub id: Uuid,
    pub package_name: String,
    pub name: ShortFull,
    pub developer: Developer,
    pub description: ShortFull,
    pub icons: Icons,
    pub accent_color: String,
    pub static_tabs: Vec<StaticTab>,
    pub valid_domains: Vec<String>,
    pub is_full_screen: bool,
}

impl Manifest {
    /// Project the form through the template.
    #[must_use]
    pub fn from_form(form: &FormFields, template: &ManifestTemplate) -> Self {
        tracing::debug!(id = %form.id(), name = %form.name, "deriving manifest");

        let link_tab = StaticTab {
            entity_id: template.tab_entity_id.clone(),
            name: Some(format!("{} - Link", form.name)),
            content_url: Some(content_url(&template.content_base_url, &form.url)),
            scopes: vec![PERSONAL_SCOPE.to_owned()],
        };

        Self {
            schema: template.schema.clone(),
            version: template.version.clone(),
            manifest_version: template.manifest_version.clone(),
            id: form.id(),
            package_name: template.package_name.clone(),
            name: ShortFull {
                short: form.name.clone(),
                full: form.effective_full_name().to_owned(),
            },
            developer: template.developer.clone(),
            description: ShortFull {
                short: form.description.clone(),
                full: form.effective_full_description().to_owned(),
            },
            icons: Icons::default(),
            accent_color: template.accent_color.clone(),
            static_tabs: vec![link_tab, StaticTab::about()],
            valid_domains: template.valid_domains.clone(),
            is_full_screen: template.is_full_screen,
        }
    }

    /// Compact JSON, as written into the archive.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors. The manifest contains only strings,
    /// booleans and a UUID, so this does not fail in practice.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Indented JSON for display.
    ///
    /// # Errors
    ///
    /// See [`Manifest::to_json`].
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Redirect page URL carrying `target` as its `url` query parameter.
#[must_use]
pub fn content_url(base: &str, target: &str) -> String {
    format!("{base}?url={}", utf8_percent_encode(target, COMPONENT))
}
