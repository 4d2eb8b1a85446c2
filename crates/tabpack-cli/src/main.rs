//! tabpack-cli: build a Teams app package from the command line.
//!
//! Produces the same `manifest.json` + `color.png` + `outline.png` zip as
//! the web app, reading the icons from disk instead of a file picker.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin tabpack-cli -- --name Wiki --url https://wiki.example \
//!     --color color.png --outline outline.png -o wiki.zip
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tabpack_manifest::{
    DataUrl, FormFields, IconKind, ManifestTemplate, Uuid, inspect_icon, mime_for_filename,
};
use tracing_subscriber::EnvFilter;

/// Package a URL and two icons into a Microsoft Teams static-tab app.
#[derive(Parser)]
#[command(name = "tabpack-cli", version)]
struct Cli {
    /// App name shown in Teams.
    #[arg(long)]
    name: String,

    /// Full app name. Defaults to `--name`.
    #[arg(long, default_value = "")]
    full_name: String,

    /// Short description.
    #[arg(long, default_value = "")]
    description: String,

    /// Full description. Defaults to `--description`.
    #[arg(long, default_value = "")]
    full_description: String,

    /// Page the static tab opens.
    #[arg(long)]
    url: String,

    /// Color icon (192x192 PNG).
    #[arg(long, required_unless_present = "print_manifest")]
    color: Option<PathBuf>,

    /// Outline icon (32x32 transparent PNG).
    #[arg(long, required_unless_present = "print_manifest")]
    outline: Option<PathBuf>,

    /// Where to write the package.
    #[arg(short, long, default_value = "manifest.zip")]
    output: PathBuf,

    /// App id. A random UUID is generated when omitted.
    #[arg(long)]
    id: Option<Uuid>,

    /// Manifest template overrides as a JSON file.
    #[arg(long, conflicts_with = "config_json")]
    config: Option<PathBuf>,

    /// Manifest template overrides as a JSON string.
    ///
    /// Keys not present keep their default values.
    #[arg(long)]
    config_json: Option<String>,

    /// Print the manifest JSON to stdout instead of writing a package.
    #[arg(long)]
    print_manifest: bool,

    /// Print the package as a `data:application/zip;base64,` URL instead
    /// of writing a file.
    #[arg(long, conflicts_with = "print_manifest")]
    data_url: bool,

    /// Log at debug level (overridden by `RUST_LOG`).
    #[arg(short, long)]
    verbose: bool,
}

/// Errors surfaced to the user.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("error reading {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error writing {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error parsing template config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("{0} icon path is required")]
    MissingIcon(IconKind),

    #[error("error serializing manifest: {0}")]
    Json(#[source] serde_json::Error),

    #[error(transparent)]
    Export(#[from] tabpack_export::ExportError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let template = template_from_cli(cli)?;
    let mut form = form_from_cli(cli);

    if cli.print_manifest {
        let json = form
            .manifest(&template)
            .to_json_pretty()
            .map_err(CliError::Json)?;
        println!("{json}");
        return Ok(());
    }

    for (kind, path) in [
        (IconKind::Color, cli.color.as_deref()),
        (IconKind::Outline, cli.outline.as_deref()),
    ] {
        let path = path.ok_or(CliError::MissingIcon(kind))?;
        form.set_icon(kind, Some(load_icon(kind, path)?));
    }

    let archive = tabpack_export::build_archive_from_form(&form, &template)?;

    if cli.data_url {
        println!("{}", tabpack_export::archive_data_url(&archive));
        return Ok(());
    }

    std::fs::write(&cli.output, &archive).map_err(|source| CliError::Write {
        path: cli.output.clone(),
        source,
    })?;
    tracing::info!(
        path = %cli.output.display(),
        id = %form.id(),
        bytes = archive.len(),
        "package written"
    );
    Ok(())
}

/// Build the manifest template from `--config` / `--config-json`, or the
/// built-in default when neither is given.
fn template_from_cli(cli: &Cli) -> Result<ManifestTemplate, CliError> {
    if let Some(ref json) = cli.config_json {
        return serde_json::from_str(json).map_err(CliError::Config);
    }
    if let Some(ref path) = cli.config {
        let json = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        return serde_json::from_str(&json).map_err(CliError::Config);
    }
    Ok(ManifestTemplate::default())
}

/// Copy the text fields from the command line into a fresh form.
fn form_from_cli(cli: &Cli) -> FormFields {
    let mut form = cli.id.map_or_else(FormFields::new, FormFields::with_id);
    form.name.clone_from(&cli.name);
    form.full_name.clone_from(&cli.full_name);
    form.description.clone_from(&cli.description);
    form.full_description.clone_from(&cli.full_description);
    form.url.clone_from(&cli.url);
    form
}

/// Read an icon from disk as a data URL, warning if it is not the size
/// Teams expects.
fn load_icon(kind: IconKind, path: &Path) -> Result<String, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match inspect_icon(&bytes) {
        Ok(info) if info.matches(kind) => {
            tracing::debug!(icon = %kind, path = %path.display(), "icon ok");
        }
        Ok(info) => {
            let size = kind.expected_size();
            tracing::warn!(
                icon = %kind,
                path = %path.display(),
                "expected a {size}x{size} PNG, got {}x{} {:?}",
                info.width,
                info.height,
                info.format,
            );
        }
        Err(e) => {
            tracing::warn!(icon = %kind, path = %path.display(), "could not inspect icon: {e}");
        }
    }

    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    Ok(DataUrl::encode(mime_for_filename(name), bytes).to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tabpack-cli").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn icons_required_unless_printing_manifest() {
        let err = Cli::try_parse_from(["tabpack-cli", "--name", "Test", "--url", "https://x"]);
        assert!(err.is_err());

        let cli = parse(&["--name", "Test", "--url", "https://x", "--print-manifest"]);
        assert!(cli.color.is_none());
    }

    #[test]
    fn form_copies_fields_and_id() {
        let id = "0b7e5a3c-3c2e-4d1e-9b43-2f0f5f6c1a11";
        let cli = parse(&[
            "--name",
            "Test",
            "--url",
            "https://example.com",
            "--id",
            id,
            "--print-manifest",
        ]);
        let form = form_from_cli(&cli);
        assert_eq!(form.name, "Test");
        assert_eq!(form.url, "https://example.com");
        assert_eq!(form.id().to_string(), id);
        assert_eq!(form.effective_full_name(), "Test");
    }

    #[test]
    fn config_json_overrides_template() {
        let cli = parse(&[
            "--name",
            "Test",
            "--url",
            "https://x",
            "--print-manifest",
            "--config-json",
            r#"{"packageName": "com.example.wiki"}"#,
        ]);
        let template = template_from_cli(&cli).unwrap();
        assert_eq!(template.package_name, "com.example.wiki");
        assert_eq!(template.version, ManifestTemplate::DEFAULT_VERSION);
    }

    #[test]
    fn bad_config_json_is_an_error() {
        let cli = parse(&[
            "--name",
            "Test",
            "--url",
            "https://x",
            "--print-manifest",
            "--config-json",
            "{not json",
        ]);
        assert!(matches!(template_from_cli(&cli), Err(CliError::Config(_))));
    }

    #[test]
    fn default_template_without_config() {
        let cli = parse(&["--name", "Test", "--url", "https://x", "--print-manifest"]);
        assert_eq!(template_from_cli(&cli).unwrap(), ManifestTemplate::default());
    }

    #[test]
    fn missing_icon_file_is_a_read_error() {
        let result = load_icon(IconKind::Color, Path::new("/nonexistent/color.png"));
        assert!(matches!(result, Err(CliError::Read { .. })));
    }
}
