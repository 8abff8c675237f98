//! godiagram CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{debug, info, LevelFilter};

use godiagram_cli::Args;

const USAGE_HINT: &str = "usage: godiagram <class|package> [OPTIONS] <DIR>...\n\
                          Run 'godiagram --help' for more information.";

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting godiagram");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = godiagram_cli::run(&args) {
        eprintln!("Error: {err}");
        if err.is_usage() {
            eprintln!("{USAGE_HINT}");
        }
        process::exit(1);
    }

    info!("Completed successfully");
}
