//! CLI logic for the godiagram tool.
//!
//! This module turns parsed [`Args`] into rendering options and load
//! options, loads the packages, renders the requested diagram and writes it
//! out.

pub mod config;
pub mod notes;

mod args;
mod error;

pub use args::{Args, ClassArgs, Command, PackageArgs, SourceArgs};
pub use error::CliError;

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};

use config::{FileConfig, LoadSection};
use godiagram::{ClassDiagram, PackageDiagram, RenderingOptions};
use godiagram_api::{json, LoadOptions, PackageLoader, SemanticPackage};
use godiagram_go::GoLoader;

/// Run the godiagram CLI application
///
/// Configuration is validated before any package is loaded.
///
/// # Errors
///
/// Returns `CliError` for:
/// - Invalid directories or ignore lists
/// - Configuration file and rendering option errors
/// - Package load failures
/// - Output write failures
pub fn run(args: &Args) -> Result<(), CliError> {
    let file = config::load_config(args.config.as_ref())?;
    let source = args.command.source();

    let options = match &args.command {
        Command::Class(class) => class_options(class, &file)?,
        Command::Package(package) => package_options(&package.source, &file)?,
    };
    debug!(options:?; "Rendering options");

    let document = match &args.command {
        Command::Class(_) => class_diagram(source, &file.load, options)?.render(),
        Command::Package(_) => package_diagram(source, &file.load, options)?.render(),
    };

    write_document(source.output.as_deref(), &document)?;
    Ok(())
}

/// Rendering options of the `class` subcommand: file settings, then flags
pub fn class_options(args: &ClassArgs, file: &FileConfig) -> Result<RenderingOptions, CliError> {
    let mut options = package_options(&args.source, file)?;

    if !args.notes.is_empty() {
        options.notes = notes::user_notes(&args.notes);
    }
    if args.hide_fields {
        options.fields = false;
    }
    if args.hide_methods {
        options.methods = false;
    }
    if args.hide_private_members {
        options.private_members = false;
    }
    if args.show_connection_labels {
        options.connection_labels = true;
    }
    if args.aggregate_private_members {
        options.aggregate_private_members = true;
    }

    if args.hide_connections {
        options.compositions = args.show_compositions;
        options.implementations = args.show_implementations;
        options.aggregations = args.show_aggregations;
        options.aliases = args.show_aliases;
    } else {
        options.compositions |= args.show_compositions;
        options.implementations |= args.show_implementations;
        options.aggregations |= args.show_aggregations;
        options.aliases |= args.show_aliases;
    }

    if args.show_options_as_notes {
        let mut lines = notes::options_legend(&options);
        lines.append(&mut options.notes);
        options.notes = lines;
    }
    Ok(options)
}

/// Rendering options shared by both subcommands: title and theme
pub fn package_options(
    source: &SourceArgs,
    file: &FileConfig,
) -> Result<RenderingOptions, CliError> {
    let mut options = RenderingOptions::default();
    file.apply(&mut options)?;

    if let Some(title) = &source.title {
        options.title = title.clone();
    }
    if let Some(theme) = &source.theme {
        options.theme = theme.clone();
    }
    Ok(options)
}

/// Validate directories and build the load options
///
/// Flags take precedence over the `[load]` table.
pub fn load_options(source: &SourceArgs, load: &LoadSection) -> Result<LoadOptions, CliError> {
    if source.directories.is_empty() {
        return Err(CliError::Usage("DIR missing".to_string()));
    }
    let directories = source
        .directories
        .iter()
        .map(|dir| existing_directory(dir))
        .collect::<Result<Vec<_>, _>>()?;

    let ignore = if source.ignore.is_empty() {
        &load.ignore
    } else {
        &source.ignore
    };
    let ignored = ignore
        .iter()
        .map(|dir| dir.trim())
        .filter(|dir| !dir.is_empty())
        .map(existing_directory)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LoadOptions::new(directories)
        .recursive(source.recursive || load.recursive)
        .with_ignored(ignored))
}

/// Canonical path of an existing directory
fn existing_directory(dir: &str) -> Result<PathBuf, CliError> {
    let path = Path::new(dir);
    if !path.exists() {
        return Err(CliError::Usage(format!("could not find directory {dir}")));
    }
    if !path.is_dir() {
        return Err(CliError::Usage(format!("{dir} is not a directory")));
    }
    Ok(fs::canonicalize(path)?)
}

fn class_diagram(
    source: &SourceArgs,
    load: &LoadSection,
    options: RenderingOptions,
) -> Result<ClassDiagram, CliError> {
    if let Some(path) = &source.from_json {
        return Ok(ClassDiagram::from_packages(&read_model(path)?, options));
    }
    let loader = GoLoader::new();
    let diagram = ClassDiagram::load(&loader, &load_options(source, load)?, options)?;
    log_metrics(&loader);
    Ok(diagram)
}

fn package_diagram(
    source: &SourceArgs,
    load: &LoadSection,
    options: RenderingOptions,
) -> Result<PackageDiagram, CliError> {
    if let Some(path) = &source.from_json {
        return Ok(PackageDiagram::from_packages(&read_model(path)?, options));
    }
    let loader = GoLoader::new();
    let diagram = PackageDiagram::load(&loader, &load_options(source, load)?, options)?;
    log_metrics(&loader);
    Ok(diagram)
}

fn read_model(path: &str) -> Result<Vec<SemanticPackage>, CliError> {
    info!(path = path; "Reading semantic model");
    Ok(json::from_path(Path::new(path))?)
}

fn log_metrics(loader: &GoLoader) {
    let metrics = loader.metrics();
    info!(
        packages = metrics.packages_loaded,
        files = metrics.files_succeeded,
        parse_ms = metrics.total_parse_time.as_millis() as u64;
        "Loaded Go sources"
    );
}

fn write_document(output: Option<&str>, document: &str) -> Result<(), CliError> {
    match output {
        Some(path) => {
            fs::write(path, document)?;
            info!(output_file = path; "Diagram written");
        }
        None => io::stdout().write_all(document.as_bytes())?,
    }
    Ok(())
}
