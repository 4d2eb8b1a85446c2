//! Fixed manifest values that the form does not expose.

use serde::{Deserialize, Serialize};

/// Publisher block embedded verbatim in every manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Developer {
    pub name: String,
    /// Microsoft Partner Network id. Empty when unregistered.
    pub mpn_id: String,
    pub website_url: String,
    pub privacy_url: String,
    pub terms_of_use_url: String,
}

impl Default for Developer {
    fn default() -> Self {
        const SITE: &str =
            "https://rawcdn.githack.com/LeonardoZivieri/MicrosoftTeamsSimpleTabRedirect/main";
        Self {
            name: "Leonardo Zivieri".to_owned(),
            mpn_id: String::new(),
            website_url: format!("{SITE}/build.html"),
            privacy_url: format!("{SITE}/privacy.html"),
            terms_of_use_url: format!("{SITE}/termsofuse.html"),
        }
    }
}

/// The non-editable half of a manifest.
///
/// [`Default`] yields the values the web app ships with. Every field has
/// a serde default, so a JSON override only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManifestTemplate {
    /// Value of the `$schema` key.
    pub schema: String,
    /// App package version.
    pub version: String,
    pub manifest_version: String,
    pub package_name: String,
    pub developer: Developer,
    pub accent_color: String,
    /// Redirect page the static tab loads; the target URL is appended as
    /// the `url` query parameter.
    pub content_base_url: String,
    /// `entityId` of the link tab.
    pub tab_entity_id: String,
    pub valid_domains: Vec<String>,
    pub is_full_screen: bool,
}

impl ManifestTemplate {
    pub const DEFAULT_SCHEMA: &'static str =
        "https://developer.microsoft.com/en-us/json-schemas/teams/v1.16/MicrosoftTeams.schema.json";
    pub const DEFAULT_VERSION: &'static str = "1.0.0";
    pub const DEFAULT_MANIFEST_VERSION: &'static str = "1.16";
    pub const DEFAULT_PACKAGE_NAME: &'static str = "com.zivieri.leonardo.link";
    pub const DEFAULT_ACCENT_COLOR: &'static str = "#FFFFFF";
    pub const DEFAULT_CONTENT_BASE_URL: &'static str = "https://rawcdn.githack.com/FunctionOneCorporate/MicrosoftTeamsSimpleTabRedirect/main/index.html";
    pub const DEFAULT_TAB_ENTITY_ID: &'static str = "ebc288fb-3745-4c0f-9caa-44d2841000c0";
    pub const DEFAULT_VALID_DOMAIN: &'static str = "rawcdn.githack.com";
}

impl Default for ManifestTemplate {
    fn default() -> Self {
        Self {
            schema: Self::DEFAULT_SCHEMA.to_owned(),
            version: Self::DEFAULT_VERSION.to_owned(),
            manifest_version: Self::DEFAULT_MANIFEST_VERSION.to_owned(),
            package_name: Self::DEFAULT_PACKAGE_NAME.to_owned(),
            developer: Developer::default(),
            accent_color: Self::DEFAULT_ACCENT_COLOR.to_owned(),
            content_base_url: Self::DEFAULT_CONTENT_BASE_URL.to_owned(),
            tab_entity_id: Self::DEFAULT_TAB_ENTITY_ID.to_owned(),
            valid_domains: vec![Self::DEFAULT_VALID_DOMAIN.to_owned()],
            is_full_screen: true,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_other_defaults() {
        let template: ManifestTemplate =
            serde_json::from_str(r##"{"accentColor": "#123456", "version": "2.0.0"}"##).unwrap();
        assert_eq!(template.accent_color, "#123456");
        assert_eq!(template.version, "2.0.0");
        assert_eq!(template.package_name, ManifestTemplate::DEFAULT_PACKAGE_NAME);
        assert_eq!(template.developer, Developer::default());
    }

    #[test]
    fn empty_json_is_default() {
        let template: ManifestTemplate = serde_json::from_str("{}").unwrap();
        assert_eq!(template, ManifestTemplate::default());
    }

    #[test]
    fn default_developer_urls() {
        let dev = Developer::default();
        assert!(dev.website_url.ends_with("/main/build.html"));
        assert!(dev.privacy_url.ends_with("/main/privacy.html"));
        assert!(dev.terms_of_use_url.ends_with("/main/termsofuse.html"));
        assert!(dev.mpn_id.is_empty());
    }
}
