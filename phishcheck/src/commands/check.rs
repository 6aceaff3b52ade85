//! The `phishcheck` command: read a URL, check it, render the report.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};

use phishcheck_core::PhishingEngine;

use crate::ui::output_format;
use crate::ui::report;
use crate::ui::theme::ThemeMap;

/// Options for a single check.
pub struct CheckOptions {
    pub url: String,
    pub json: bool,
    pub show_features: bool,
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Reads one line from `reader`, without its line terminator.
///
/// Returns `None` when nothing was entered. Only the terminator is removed;
/// other whitespace is part of the URL.
pub fn read_url_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    reader.read_line(&mut line).context("Failed to read URL from stdin")?;

    let url = line.strip_suffix('\n').unwrap_or(&line);
    let url = url.strip_suffix('\r').unwrap_or(url);

    if url.is_empty() {
        Ok(None)
    } else {
        Ok(Some(url.to_string()))
    }
}

/// Prompts on stderr when stdin is interactive, then reads a URL line.
pub fn prompt_for_url(theme_map: &ThemeMap) -> Result<Option<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let stderr_supports_color = io::stderr().is_terminal();
        output_format::print_prompt(&mut io::stderr(), "Enter URL: ", theme_map, stderr_supports_color)?;
    } else {
        debug!("Reading URL from stdin...");
    }
    read_url_line(&mut stdin.lock())
}

/// The main operation runner for the phishcheck CLI.
pub fn run_check(engine: &PhishingEngine, opts: &CheckOptions, theme_map: &ThemeMap) -> Result<()> {
    info!("Starting phishcheck operation.");

    let report = engine.check(&opts.url);

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    if opts.json {
        serde_json::to_writer_pretty(&mut writer, &report).context("Failed to serialize report")?;
        writeln!(writer)?;
    } else {
        report::print_report(&report, &mut writer, theme_map, supports_color, opts.show_features)
            .context("Failed to write report")?;
    }

    info!("phishcheck operation completed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_url_line_strips_terminator_only() {
        let mut input = Cursor::new("  http://a.xyz \r\nsecond line\n");
        assert_eq!(read_url_line(&mut input).unwrap().as_deref(), Some("  http://a.xyz "));
    }

    #[test]
    fn read_url_line_without_newline() {
        let mut input = Cursor::new("http://a.xyz");
        assert_eq!(read_url_line(&mut input).unwrap().as_deref(), Some("http://a.xyz"));
    }

    #[test]
    fn blank_line_is_no_input() {
        assert_eq!(read_url_line(&mut Cursor::new("\n")).unwrap(), None);
        assert_eq!(read_url_line(&mut Cursor::new("")).unwrap(), None);
    }
}
