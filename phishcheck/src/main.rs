// phishcheck/src/main.rs
//! phishcheck entry point.
//!
//! Builds the engine (optionally from a scoring configuration), obtains the
//! URL and prints the verdict.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use phishcheck::cli::Cli;
use phishcheck::commands::check::{error_msg, info_msg, prompt_for_url, run_check, warn_msg, CheckOptions};
use phishcheck::logger;
use phishcheck::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use phishcheck_core::{PhishingEngine, ScoringConfig};

/// Exit status when no URL was supplied.
const EXIT_NO_INPUT: u8 = 2;

/// Builds the engine from `--config` / `PHISHCHECK_CONFIG`, or the built-in scoring.
fn build_engine(args: &Cli, theme_map: &ThemeMap) -> Result<PhishingEngine> {
    let Some(path) = &args.config else {
        return Ok(PhishingEngine::new());
    };
    let config = ScoringConfig::load_from_file(path)?;
    if !args.quiet {
        info_msg(format!("Using scoring configuration: {}", path.display()), theme_map);
    }
    PhishingEngine::with_config(&config)
        .with_context(|| format!("Invalid scoring configuration {}", path.display()))
}

fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }
    info!("phishcheck started. Version: {}", env!("CARGO_PKG_VERSION"));

    let theme_map = match build_theme_map(args.theme.as_ref()).context("Theme error") {
        Ok(map) => map,
        Err(e) => {
            error_msg(format!("{e:#}"), &ThemeStyle::default_theme_map());
            return Ok(ExitCode::FAILURE);
        }
    };

    let engine = match build_engine(&args, &theme_map) {
        Ok(engine) => engine,
        Err(e) => {
            error_msg(format!("{e:#}"), &theme_map);
            return Ok(ExitCode::FAILURE);
        }
    };

    let url = match args.url {
        Some(url) if !url.is_empty() => Some(url),
        Some(_) => None,
        None => prompt_for_url(&theme_map)?,
    };

    let Some(url) = url else {
        warn_msg("Enter the URL", &theme_map);
        return Ok(ExitCode::from(EXIT_NO_INPUT));
    };

    let opts = CheckOptions {
        url,
        json: args.json,
        show_features: args.features,
    };
    run_check(&engine, &opts, &theme_map)?;

    Ok(ExitCode::SUCCESS)
}
