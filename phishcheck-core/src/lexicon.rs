//! Fixed denylists and the compiled matchers built from them.
//!
//! Every matcher is built once per process on first use and shared
//! read-only afterwards.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use phishcheck_entropy::keywords::KeywordScanner;
use regex::Regex;

/// Words commonly used to lure users into credential entry.
pub const SUSPICIOUS_KEYWORDS: [&str; 8] = [
    "verify", "update", "login", "secure", "bank", "free", "confirm", "alert",
];

/// Top-level domains over-represented in phishing campaigns.
pub const SUSPICIOUS_TLDS: [&str; 6] = ["xyz", "top", "club", "info", "shop", "click"];

/// Characters typical of encoded or parameter-heavy URLs.
pub const SUSPICIOUS_CHARS: [char; 4] = ['%', '=', '?', '_'];

static KEYWORD_SCANNER: Lazy<KeywordScanner> = Lazy::new(|| {
    KeywordScanner::new(SUSPICIOUS_KEYWORDS)
        .expect("Failed to build Aho-Corasick automaton for suspicious keywords")
});

// Loose IPv4 literal: octets are not range-checked.
static DOTTED_QUAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\d{1,3}\.){3}\d{1,3}").expect("dotted-quad pattern is valid")
});

// `\n?\z` mirrors a `$` anchor, which also accepts one final newline.
static SUSPICIOUS_TLD: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"\.(?:{})\n?\z", SUSPICIOUS_TLDS.join("|"));
    Regex::new(&pattern).expect("suspicious TLD pattern is valid")
});

static DECIMAL_DIGIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d").expect("digit pattern is valid")
});

/// True if a dotted-quad pattern appears anywhere in `url`.
pub fn has_dotted_quad(url: &str) -> bool {
    DOTTED_QUAD.is_match(url)
}

/// True if `url` as a whole ends in one of [`SUSPICIOUS_TLDS`].
pub fn has_suspicious_tld(url: &str) -> bool {
    SUSPICIOUS_TLD.is_match(url)
}

/// True if any of [`SUSPICIOUS_KEYWORDS`] occurs in `url`, ignoring case.
pub fn has_suspicious_keyword(url: &str) -> bool {
    KEYWORD_SCANNER.contains_any(url)
}

/// The suspicious keywords present in `url`, in list order.
pub fn matched_keywords(url: &str) -> Vec<&'static str> {
    KEYWORD_SCANNER.matched_keywords(url)
}

/// Number of Unicode decimal digits in `url`.
pub fn count_decimal_digits(url: &str) -> usize {
    DECIMAL_DIGIT.find_iter(url).count()
}

pub fn is_suspicious_char(c: char) -> bool {
    SUSPICIOUS_CHARS.contains(&c)
}
