// phishcheck-entropy/src/keywords/mod.rs
extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use daachorse::errors::DaachorseError;
use daachorse::DoubleArrayAhoCorasick;

/// Case-insensitive substring scanner over a fixed keyword list.
///
/// Keywords and haystacks are both folded with Unicode lowercasing before
/// matching. There is no word-boundary check: "freebies" contains "free".
pub struct KeywordScanner {
    automaton: DoubleArrayAhoCorasick<usize>,
    keywords: Vec<String>,
}

impl fmt::Debug for KeywordScanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordScanner")
         .field("automaton", &"<DoubleArrayAhoCorasick>")
         .field("keywords", &self.keywords)
         .finish()
    }
}

impl KeywordScanner {
    /// Builds the automaton for the given keywords.
    ///
    /// Fails if the list is empty or contains duplicates after lowercasing.
    pub fn new<I, S>(keywords: I) -> Result<Self, DaachorseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();

        let automaton = DoubleArrayAhoCorasick::new(keywords.iter().map(String::as_str))?;

        Ok(Self { automaton, keywords })
    }

    /// The lowercased keywords, in construction order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True if any keyword occurs anywhere in `text`, ignoring case.
    pub fn contains_any(&self, text: &str) -> bool {
        let folded = text.to_lowercase();
        self.automaton.find_overlapping_iter(&folded).next().is_some()
    }

    /// Distinct keywords found in `text`, reported in construction order.
    pub fn matched_keywords(&self, text: &str) -> Vec<&str> {
        let folded = text.to_lowercase();
        let mut seen = alloc::vec![false; self.keywords.len()];

        for m in self.automaton.find_overlapping_iter(&folded) {
            seen[m.value()] = true;
        }

        self.keywords
            .iter()
            .zip(seen)
            .filter(|(_, hit)| *hit)
            .map(|(k, _)| k.as_str())
            .collect()
    }
}
