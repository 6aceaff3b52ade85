// phishcheck-entropy/src/entropy/mod.rs
use alloc::collections::BTreeMap;
use libm::log2;

use crate::EntropyScore;

/// Calculates the Shannon entropy of a string over its characters.
///
/// Every Unicode scalar value counts as one symbol, so multi-byte characters
/// are not split into their UTF-8 bytes. Returns the entropy in bits per
/// character.
///
/// Frequencies are summed in code point order rather than in order of first
/// appearance, which makes the result bit-identical for every permutation of
/// the same characters.
pub fn calculate_char_entropy(text: &str) -> EntropyScore {
    if text.is_empty() {
        return 0.0;
    }

    let mut ascii = [0usize; 128];
    let mut wide: BTreeMap<char, usize> = BTreeMap::new();
    let mut total = 0usize;

    for ch in text.chars() {
        total += 1;
        if ch.is_ascii() {
            ascii[ch as usize] += 1;
        } else {
            *wide.entry(ch).or_insert(0) += 1;
        }
    }

    entropy_from_counts(ascii.iter().copied().chain(wide.values().copied()), total)
}

/// Shannon entropy for a distribution given as raw symbol counts.
///
/// Zero counts are skipped. A `total` of zero yields `0.0`.
pub fn entropy_from_counts<I>(counts: I, total: usize) -> EntropyScore
where
    I: IntoIterator<Item = usize>,
{
    if total == 0 {
        return 0.0;
    }

    let len = total as f64;
    let mut entropy = 0.0;

    for count in counts {
        if count > 0 {
            let p = count as f64 / len;
            entropy -= p * log2(p);
        }
    }

    entropy
}
