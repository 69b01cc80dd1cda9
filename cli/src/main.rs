use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use clap::{Args, Parser, Subcommand};
use crdr::links::QUICK_LINKS;
use crdr::registry::ManifestError;
use crdr::{Document, ImageRegistry, image, quicklinks};

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read manifest {}: {source}", path.display())]
    ReadManifest { path: PathBuf, source: std::io::Error },
    #[error("invalid manifest {}: {source}", path.display())]
    Manifest { path: PathBuf, source: ManifestError },
    #[error("invalid attribute `{0}`; expected name=value")]
    InvalidAttribute(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "crdr-cli", about = "Render CRDR image and quick-link widgets to static HTML")]
struct Cli {
    /// JSON object of extra kinds (kind → image source) to register.
    #[arg(long, global = true, env = "CRDR_MANIFEST")]
    manifest: Option<PathBuf>,

    /// Log registry and render activity to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a `<crdr-img>` element.
    Img(ImgArgs),
    /// Render the `<crdr-quicklinks>` bar.
    Links(LinksArgs),
    /// List registered image kinds.
    Kinds,
    /// Print the quick-link descriptors as JSON.
    Descriptors,
}

#[derive(Args, Debug)]
struct ImgArgs {
    #[arg(long)]
    kind: String,

    /// Extra attribute, repeatable (e.g. `--attr alt=CRDR --attr width=32`).
    #[arg(long = "attr", value_name = "NAME=VALUE")]
    attrs: Vec<String>,
}

#[derive(Args, Debug)]
struct LinksArgs {
    /// Class list applied to every anchor.
    #[arg(long, env = "CRDR_CLASSPASS")]
    classpass: Option<String>,

    /// Show a text label next to each icon.
    #[arg(long)]
    uselabel: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::error!(error = %e, "crdr-cli failed");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).init();
}

fn run(cli: Cli) -> Result<String, CliError> {
    let registry = Rc::new(ImageRegistry::with_builtins());
    if let Some(path) = &cli.manifest {
        load_manifest(&registry, path)?;
    }
    let document = Document::with_widgets(Rc::clone(&registry));

    match cli.command {
        Command::Img(args) => render_img(&document, &args),
        Command::Links(args) => Ok(render_links(&document, &args)),
        Command::Kinds => Ok(registry.kinds().join("\n")),
        Command::Descriptors => Ok(serde_json::to_string_pretty(&QUICK_LINKS)?),
    }
}

fn load_manifest(registry: &ImageRegistry, path: &Path) -> Result<usize, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::ReadManifest { path: path.to_path_buf(), source })?;
    let count = registry
        .load_manifest_str(&raw)
        .map_err(|source| CliError::Manifest { path: path.to_path_buf(), source })?;
    tracing::info!(path = %path.display(), count, "manifest loaded");
    Ok(count)
}

fn render_img(document: &Document, args: &ImgArgs) -> Result<String, CliError> {
    let mut attrs = vec![("kind", args.kind.as_str())];
    for raw in &args.attrs {
        let (name, value) = parse_attr(raw)?;
        attrs.push((name, value));
    }
    Ok(document.render_html(image::TAG, &attrs))
}

fn render_links(document: &Document, args: &LinksArgs) -> String {
    let mut attrs = Vec::new();
    if let Some(classpass) = &args.classpass {
        attrs.push(("classpass", classpass.as_str()));
    }
    if args.uselabel {
        attrs.push(("uselabel", ""));
    }
    document.render_html(quicklinks::TAG, &attrs)
}

/// Split `name=value`; a bare `name` is a boolean attribute.
fn parse_attr(raw: &str) -> Result<(&str, &str), CliError> {
    let (name, value) = raw.split_once('=').unwrap_or((raw, ""));
    let name = name.trim();
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(CliError::InvalidAttribute(raw.to_owned()));
    }
    Ok((name, value))
}
