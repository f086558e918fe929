use std::collections::BTreeMap;

use crate::dictionary::Dictionary;
use crate::token::normalize_word;

/// Normalized word to its ascending 1-based positions in the token stream.
pub type WordMap = BTreeMap<String, Vec<usize>>;

/// Known and unknown words of one token stream.
///
/// Every distinct normalized word of the stream is a key of exactly one of
/// the two maps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordMaps {
    known: WordMap,
    unknown: WordMap,
}

impl WordMaps {
    /// Classify and index `tokens` in a single pass.
    pub fn build<S: AsRef<str>>(tokens: &[S], dictionary: &Dictionary) -> Self {
        let mut maps = Self::default();
        for (idx, token) in tokens.iter().enumerate() {
            let word = normalize_word(token.as_ref());
            let target = if dictionary.contains(&word) {
                &mut maps.known
            } else {
                &mut maps.unknown
            };
            target.entry(word).or_default().push(idx + 1);
        }
        maps
    }

    pub fn known(&self) -> &WordMap {
        &self.known
    }

    pub fn unknown(&self) -> &WordMap {
        &self.unknown
    }

    /// Total occurrences across both maps, equal to the stream length.
    pub fn token_count(&self) -> usize {
        occurrences(&self.known) + occurrences(&self.unknown)
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty() && self.unknown.is_empty()
    }
}

/// Tuple form of [`WordMaps::build`].
pub fn build_word_maps<S: AsRef<str>>(
    tokens: &[S],
    dictionary: &Dictionary,
) -> (WordMap, WordMap) {
    let maps = WordMaps::build(tokens, dictionary);
    (maps.known, maps.unknown)
}

fn occurrences(map: &WordMap) -> usize {
    map.values().map(Vec::len).sum()
}
