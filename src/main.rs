//! Heartgen - procedural heart app-icon generator.

mod bundle;
mod cli;
mod config;
mod curve;
mod error;
mod heart;
mod iconset;
mod raster;

use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::config::{Config, Settings};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), error::IconError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(error::IconError::Config)?;
    let settings = Settings::resolve(cli, &config);

    if cli.verbose {
        eprintln!("Iconset dir: {}", settings.iconset_dir.display());
        eprintln!("Bundle: {}", settings.output.display());
        eprintln!("Tool: {}", settings.tool);
    }

    // Render and stage every resolution variant
    let written = iconset::stage_iconset(&settings.iconset_dir)?;
    if cli.verbose {
        for path in &written {
            eprintln!("Staged: {}", path.display());
        }
    }

    // Compile the bundle; on failure the staging directory is left behind
    bundle::compile_icns(&settings.tool, &settings.iconset_dir, &settings.output)?;
    eprintln!("Icon created: {}", settings.output.display());

    if settings.keep_iconset {
        if cli.verbose {
            eprintln!("Keeping iconset: {}", settings.iconset_dir.display());
        }
    } else {
        std::fs::remove_dir_all(&settings.iconset_dir)?;
    }

    Ok(())
}
