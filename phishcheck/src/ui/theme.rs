//! Module for managing the application's command-line interface (CLI) theme.
//!
//! This module defines the structure for theme configuration, allowing users
//! to customize the colors of the verdict, the rule listing and the status
//! messages. It supports 16-color ANSI named colors for foreground styling
//! and can load themes from YAML files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Style for section titles such as "Triggered rules".
    Header,
    /// Style for general informational messages.
    Info,
    /// Style for warning messages.
    Warn,
    /// Style for error messages.
    Error,
    /// Style for the interactive URL prompt.
    Prompt,
    /// Style for the `RISK SCORE` line.
    Score,
    /// Verdict colors.
    VerdictLegit,
    VerdictSuspicious,
    VerdictPhishing,
    /// Style for rule ids in the triggered-rule listing.
    RuleName,
    /// Style for rule weights in the triggered-rule listing.
    RuleWeight,
    /// Style for feature names in the feature table.
    FeatureName,
    /// Style for feature values in the feature table.
    FeatureValue,
    /// Style for the embellishment printed under a LEGIT verdict.
    Celebration,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 14] = [
        ThemeEntry::Header,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::Prompt,
        ThemeEntry::Score,
        ThemeEntry::VerdictLegit,
        ThemeEntry::VerdictSuspicious,
        ThemeEntry::VerdictPhishing,
        ThemeEntry::RuleName,
        ThemeEntry::RuleWeight,
        ThemeEntry::FeatureName,
        ThemeEntry::FeatureValue,
        ThemeEntry::Celebration,
    ];
}

/// Represents an ANSI color that can be used in the theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ThemeColor {
    /// A named ANSI color (e.g., "red", "brightgreen").
    Named(String),
}

/// Error type for parsing an invalid `ThemeColor` string.
#[derive(Debug, Clone, Error)]
#[error(
    "Invalid theme color; expected one of: black, red, green, yellow, blue, \
    magenta, cyan, white, brightblack, brightred, brightgreen, brightyellow, \
    brightblue, brightmagenta, brightcyan, brightwhite."
)]
pub struct ParseThemeColorError;

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    /// Attempts to parse a string into a `ThemeColor`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "black" | "red" | "green" | "yellow" | "blue" | "magenta" | "cyan" | "white" |
            "brightblack" | "brightred" | "brightgreen" | "brightyellow" | "brightblue" |
            "brightmagenta" | "brightcyan" | "brightwhite" => Ok(ThemeColor::Named(lower)),
            _ => Err(ParseThemeColorError),
        }
    }
}

impl ThemeColor {
    /// Converts the `ThemeColor` enum variant into its corresponding `owo_colors::AnsiColors`.
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => match name.as_str() {
                "black" => AnsiColors::Black,
                "red" => AnsiColors::Red,
                "green" => AnsiColors::Green,
                "yellow" => AnsiColors::Yellow,
                "blue" => AnsiColors::Blue,
                "magenta" => AnsiColors::Magenta,
                "cyan" => AnsiColors::Cyan,
                "white" => AnsiColors::White,
                "brightblack" => AnsiColors::BrightBlack,
                "brightred" => AnsiColors::BrightRed,
                "brightgreen" => AnsiColors::BrightGreen,
                "brightyellow" => AnsiColors::BrightYellow,
                "brightblue" => AnsiColors::BrightBlue,
                "brightmagenta" => AnsiColors::BrightMagenta,
                "brightcyan" => AnsiColors::BrightCyan,
                "brightwhite" => AnsiColors::BrightWhite,
                _ => AnsiColors::White,
            },
        }
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

fn named(color: &str) -> ThemeStyle {
    ThemeStyle { fg: Some(ThemeColor::Named(color.into())) }
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    if let Some(path) = theme_path {
        ThemeStyle::load_from_file(path)
    } else {
        Ok(ThemeStyle::default_theme_map())
    }
}

impl ThemeStyle {
    /// Loads a theme configuration from a YAML file on disk and fills gaps with default styles.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        for (entry, style) in ThemeStyle::default_theme_map() {
            custom.entry(entry).or_insert(style);
        }
        Ok(custom)
    }

    /// Returns a default theme map with predefined color mappings.
    pub fn default_theme_map() -> ThemeMap {
        let mut default_theme = HashMap::new();
        default_theme.insert(ThemeEntry::Warn, named("yellow"));
        default_theme.insert(ThemeEntry::Error, named("red"));
        default_theme.insert(ThemeEntry::Prompt, named("cyan"));
        default_theme.insert(ThemeEntry::Score, named("brightwhite"));

        // Verdict colors
        default_theme.insert(ThemeEntry::VerdictLegit, named("green"));
        default_theme.insert(ThemeEntry::VerdictSuspicious, named("yellow"));
        default_theme.insert(ThemeEntry::VerdictPhishing, named("brightred"));
        default_theme.insert(ThemeEntry::Celebration, named("brightmagenta"));

        default_theme.insert(ThemeEntry::RuleWeight, named("brightblack"));
        default_theme.insert(ThemeEntry::FeatureValue, named("cyan"));

        for entry in ThemeEntry::ALL {
            default_theme.entry(entry).or_insert_with(|| named("white"));
        }
        default_theme
    }
}
