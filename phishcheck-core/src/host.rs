//! Authority (host component) extraction following generic URI syntax.
//!
//! The extractor only needs the raw `netloc` text: userinfo, port and the
//! original letter case are all preserved. Nothing is normalized, so
//! `http://www.example.com:80` keeps its `:80` and `HTTP://WWW.X.com` keeps
//! its capitals.

use std::borrow::Cow;
use std::net::Ipv6Addr;
use std::ops::Range;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::errors::PhishcheckError;

static IPV_FUTURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\Av[a-fA-F0-9]+\..+\z").expect("IPvFuture pattern is valid")
});

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

fn is_removed_control(c: char) -> bool {
    matches!(c, '\t' | '\r' | '\n')
}

/// Byte range of the authority inside an already-cleaned URL, if any.
fn authority_range(url: &str) -> Option<Range<usize>> {
    let mut rest_start = 0;

    if let Some(colon) = url.find(':') {
        let scheme = &url[..colon];
        let starts_alpha = scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if starts_alpha && scheme.chars().all(is_scheme_char) {
            rest_start = colon + 1;
        }
    }

    let rest = &url[rest_start..];
    if !rest.starts_with("//") {
        return None;
    }

    let start = rest_start + 2;
    let end = url[start..]
        .find(['/', '?', '#'])
        .map_or(url.len(), |offset| start + offset);

    Some(start..end)
}

/// Rejects bracket usage that cannot denote an IP literal.
fn check_brackets(authority: &str) -> Result<(), PhishcheckError> {
    let malformed = |reason: String| PhishcheckError::MalformedAuthority {
        authority: authority.to_string(),
        reason,
    };

    let has_open = authority.contains('[');
    let has_close = authority.contains(']');

    if has_open != has_close {
        return Err(malformed("unbalanced IPv6 brackets".to_string()));
    }
    if !has_open {
        return Ok(());
    }

    let after_open = authority.split_once('[').map_or("", |(_, r)| r);
    let literal = after_open.split_once(']').map_or(after_open, |(l, _)| l);

    if literal.starts_with('v') {
        if IPV_FUTURE.is_match(literal) {
            return Ok(());
        }
        return Err(malformed(format!("'{literal}' is not a valid IPvFuture literal")));
    }

    let (address, zone) = match literal.split_once('%') {
        Some((address, zone)) => (address, Some(zone)),
        None => (literal, None),
    };
    let zone_ok = zone.map_or(true, |z| !z.is_empty() && !z.contains('%'));

    if zone_ok && address.parse::<Ipv6Addr>().is_ok() {
        Ok(())
    } else {
        Err(malformed(format!("'{literal}' is not an IPv6 address")))
    }
}

/// Rejects non-ASCII authorities whose compatibility form smuggles in a
/// delimiter, e.g. `www.\u{FF20}evil.com` (FULLWIDTH COMMERCIAL AT).
fn check_compatibility_delimiters(authority: &str) -> Result<(), PhishcheckError> {
    if authority.is_ascii() {
        return Ok(());
    }

    let stripped: String = authority.chars().filter(|c| !matches!(c, '@' | ':' | '#' | '?')).collect();
    let normalized: String = stripped.nfkc().collect();

    match normalized.chars().find(|c| matches!(c, '/' | '?' | '#' | '@' | ':')) {
        Some(delimiter) => Err(PhishcheckError::MalformedAuthority {
            authority: authority.to_string(),
            reason: format!("contains '{delimiter}' under NFKC normalization"),
        }),
        None => Ok(()),
    }
}

/// Extracts the authority substring of `url`.
///
/// Leading control characters and spaces are ignored and TAB/CR/LF are
/// dropped before splitting. Returns `Ok(None)` when the URL has no `//`
/// authority at all, and an error when the authority contains an invalid
/// bracketed IP literal or a character whose NFKC form is a URL delimiter.
pub fn parse_authority(url: &str) -> Result<Option<Cow<'_, str>>, PhishcheckError> {
    let trimmed = url.trim_start_matches(|c: char| c <= ' ');

    let authority: Cow<'_, str> = if trimmed.contains(is_removed_control) {
        let cleaned: String = trimmed.chars().filter(|c| !is_removed_control(*c)).collect();
        match authority_range(&cleaned) {
            Some(range) => Cow::Owned(cleaned[range].to_string()),
            None => return Ok(None),
        }
    } else {
        match authority_range(trimmed) {
            Some(range) => Cow::Borrowed(&trimmed[range]),
            None => return Ok(None),
        }
    };

    check_brackets(&authority)?;
    check_compatibility_delimiters(&authority)?;
    Ok(Some(authority))
}

/// The host component used by the feature extractor.
///
/// Any parse failure or missing authority degrades to an empty string.
pub fn host_component(url: &str) -> Cow<'_, str> {
    match parse_authority(url) {
        Ok(Some(authority)) => authority,
        Ok(None) => Cow::Borrowed(""),
        Err(e) => {
            debug!("Treating host as empty: {}", e);
            Cow::Borrowed("")
        }
    }
}
