//! This file defines the command-line interface (CLI) for the phishcheck application.
//! License: MIT OR Apache-2.0

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "phishcheck",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Check a URL for phishing indicators",
    long_about = "phishcheck classifies a single URL as LEGIT, SUSPICIOUS or PHISHING from lexical signals alone (length, separators, IP literals, lure keywords, risky TLDs, character entropy). It never contacts the URL or any other network service.",
)]
pub struct Cli {
    /// The URL to check. Reads a single line from stdin if omitted.
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Print the full report as JSON on stdout.
    #[arg(long, short = 'j', help = "Print the full report as JSON.")]
    pub json: bool,

    /// Include the extracted feature table in text output.
    #[arg(long, short = 'f', conflicts_with = "json", help = "Also print every extracted feature.")]
    pub features: bool,

    /// Path to a YAML scoring configuration overriding weights and thresholds.
    #[arg(long = "config", short = 'c', value_name = "FILE", env = "PHISHCHECK_CONFIG", help = "Path to a YAML scoring configuration.")]
    pub config: Option<PathBuf>,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Disable informational messages
    #[arg(long, short = 'q', conflicts_with = "debug", help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_url_and_flags() {
        let cli = Cli::try_parse_from(["phishcheck", "-j", "http://a.xyz"]).unwrap();
        assert_eq!(cli.url.as_deref(), Some("http://a.xyz"));
        assert!(cli.json);
        assert!(!cli.features);
    }

    #[test]
    fn json_and_features_conflict() {
        assert!(Cli::try_parse_from(["phishcheck", "-j", "-f", "http://a.xyz"]).is_err());
    }
}
