//! Command-line argument definitions for the godiagram CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. The `class` and `package` subcommands share the source
//! selection and output arguments; only `class` carries the rendering flags.

use clap::{Parser, Subcommand};

/// Command-line arguments for the godiagram tool
#[derive(Parser, Debug)]
#[command(name = "godiagram", author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

/// Diagram to generate
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Class diagram of structs, interfaces, defined types and aliases
    Class(ClassArgs),
    /// Import graph between packages
    Package(PackageArgs),
}

impl Command {
    /// Arguments shared by every subcommand
    pub fn source(&self) -> &SourceArgs {
        match self {
            Command::Class(args) => &args.source,
            Command::Package(args) => &args.source,
        }
    }
}

/// Where packages come from and where the document goes
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directories containing Go packages
    #[arg(value_name = "DIR")]
    pub directories: Vec<String>,

    /// Comma-separated directories excluded from traversal
    #[arg(long, value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Walk subdirectories, skipping hidden and vendor-like directories
    #[arg(long)]
    pub recursive: bool,

    /// Render a serialized semantic model (JSON) instead of Go sources
    #[arg(long, value_name = "FILE")]
    pub from_json: Option<String>,

    /// Diagram title
    #[arg(long)]
    pub title: Option<String>,

    /// Write to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<String>,

    /// Diagram theme
    #[arg(long)]
    pub theme: Option<String>,
}

/// Arguments of the `class` subcommand
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ClassArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Comma-separated legend lines
    #[arg(long, value_delimiter = ',')]
    pub notes: Vec<String>,

    /// Include aggregations found through private fields
    #[arg(long)]
    pub aggregate_private_members: bool,

    /// Render aggregations even when connections are hidden
    #[arg(long)]
    pub show_aggregations: bool,

    /// Render compositions even when connections are hidden
    #[arg(long)]
    pub show_compositions: bool,

    /// Render implementations even when connections are hidden
    #[arg(long)]
    pub show_implementations: bool,

    /// Render alias edges even when connections are hidden
    #[arg(long)]
    pub show_aliases: bool,

    /// Label every connection with its role
    #[arg(long)]
    pub show_connection_labels: bool,

    /// Omit fields
    #[arg(long)]
    pub hide_fields: bool,

    /// Omit methods
    #[arg(long)]
    pub hide_methods: bool,

    /// Omit all connections not forced by a --show-* flag
    #[arg(long)]
    pub hide_connections: bool,

    /// Omit private fields and methods
    #[arg(long)]
    pub hide_private_members: bool,

    /// Prepend a legend listing the rendering options
    #[arg(long)]
    pub show_options_as_notes: bool,
}

/// Arguments of the `package` subcommand
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PackageArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}
