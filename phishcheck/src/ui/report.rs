//! Renders a [`UrlReport`] as human-readable text.

use std::io::{self, Write};

use phishcheck_core::rules::rule;
use phishcheck_core::{FeatureName, UrlReport, Verdict};

use crate::ui::output_format::styled;
use crate::ui::theme::{ThemeEntry, ThemeMap};

const CELEBRATION: &str = "🎈🎈🎈  No phishing indicators worth worrying about.  🎈🎈🎈";

fn verdict_entry(verdict: Verdict) -> ThemeEntry {
    match verdict {
        Verdict::Legit => ThemeEntry::VerdictLegit,
        Verdict::Suspicious => ThemeEntry::VerdictSuspicious,
        Verdict::Phishing => ThemeEntry::VerdictPhishing,
    }
}

fn format_feature_value(name: FeatureName, value: f64) -> String {
    if name == FeatureName::EntropyScore {
        format!("{:.4}", value)
    } else {
        format!("{}", value as u64)
    }
}

/// Prints score, verdict, triggered rules and optionally the feature table.
pub fn print_report<W: Write>(
    report: &UrlReport,
    writer: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
    show_features: bool,
) -> io::Result<()> {
    let paint = |text: &str, entry: ThemeEntry| styled(text, entry, theme_map, supports_color);

    writeln!(writer, "{}", paint(&format!("RISK SCORE = {}", report.score), ThemeEntry::Score))?;
    writeln!(
        writer,
        "RESULT = {}",
        paint(report.verdict.as_str(), verdict_entry(report.verdict))
    )?;

    if !report.triggered_rules.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "{}", paint("Triggered rules:", ThemeEntry::Header))?;
        for hit in &report.triggered_rules {
            writeln!(
                writer,
                "  {} {:<22} {}",
                paint(&format!("+{:<4}", hit.weight), ThemeEntry::RuleWeight),
                paint(hit.rule.as_str(), ThemeEntry::RuleName),
                rule(hit.rule).description,
            )?;
        }
    }

    if show_features {
        writeln!(writer)?;
        writeln!(writer, "{}", paint("--- URL ANALYSIS ---", ThemeEntry::Header))?;
        for (name, value) in report.features.iter() {
            writeln!(
                writer,
                "  {:<20} {}",
                paint(name.as_str(), ThemeEntry::FeatureName),
                paint(&format_feature_value(name, value), ThemeEntry::FeatureValue),
            )?;
        }
    }

    if report.verdict == Verdict::Legit {
        writeln!(writer)?;
        writeln!(writer, "{}", paint(CELEBRATION, ThemeEntry::Celebration))?;
    }

    Ok(())
}
