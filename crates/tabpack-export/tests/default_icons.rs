//! Integration test: package the bundled default icons and read the archive back.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::{Cursor, Read};
use std::path::PathBuf;

use tabpack_manifest::{DataUrl, FormFields, IconKind, ManifestTemplate, inspect_icon};

fn default_icon(kind: IconKind) -> Vec<u8> {
    let workspace_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf();
    let path = workspace_root
        .join("crates/tabpack/public")
        .join(kind.default_asset_path().trim_start_matches('/'));
    assert!(path.exists(), "default icon not found at {path:?}");
    std::fs::read(&path).unwrap()
}

#[test]
fn bundled_icons_have_teams_sizes() {
    for kind in IconKind::ALL {
        let info = inspect_icon(&default_icon(kind)).unwrap();
        assert!(info.matches(kind), "{kind} icon is {info:?}");
    }
}

#[test]
fn default_icons_package_end_to_end() {
    let color = default_icon(IconKind::Color);
    let outline = default_icon(IconKind::Outline);

    let mut form = FormFields::new();
    form.name = "Test".to_owned();
    form.url = "https://example.com".to_owned();
    form.set_icon(
        IconKind::Color,
        Some(DataUrl::encode("image/png", color.clone()).to_string()),
    );
    form.set_icon(
        IconKind::Outline,
        Some(DataUrl::encode("image/png", outline.clone()).to_string()),
    );

    let template = ManifestTemplate::default();
    let archive = tabpack_export::build_archive_from_form(&form, &template)
        .expect("packaging should succeed");
    eprintln!("Package: {} bytes", archive.len());

    let mut zip = zip::ZipArchive::new(Cursor::new(archive.as_slice())).unwrap();
    let names: Vec<String> = zip.file_names().map(str::to_owned).collect();
    let mut names_sorted = names;
    names_sorted.sort();
    assert_eq!(names_sorted, ["color.png", "manifest.json", "outline.png"]);

    let mut manifest_json = String::new();
    zip.by_name("manifest.json")
        .unwrap()
        .read_to_string(&mut manifest_json)
        .unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&manifest_json).unwrap();
    assert_eq!(manifest["name"]["short"], "Test");
    assert_eq!(manifest["id"], form.id().to_string());
    let content_url = manifest["staticTabs"][0]["contentUrl"].as_str().unwrap();
    assert!(content_url.contains("url=https%3A%2F%2Fexample.com"));

    let mut stored = Vec::new();
    zip.by_name("color.png")
        .unwrap()
        .read_to_end(&mut stored)
        .unwrap();
    assert_eq!(stored, color);

    let mut stored = Vec::new();
    zip.by_name("outline.png")
        .unwrap()
        .read_to_end(&mut stored)
        .unwrap();
    assert_eq!(stored, outline);
}
