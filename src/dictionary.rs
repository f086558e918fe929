use std::collections::BTreeSet;
use std::path::Path;

use tracing::info;

use crate::error::StatsError;
use crate::token::{normalize_word, read_tokens};

/// Number of words shown by the dictionary preview.
pub const PREVIEW_LEN: usize = 20;

/// Immutable set of normalized known words, kept in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, StatsError> {
        let path_ref = path.as_ref();
        let tokens = read_tokens(path_ref)?;
        let dictionary = Self::from_tokens(&tokens);
        info!(
            "{} words read from dictionary {}",
            dictionary.len(),
            path_ref.display()
        );
        Ok(dictionary)
    }

    /// Normalize each token and collect the distinct results.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let words = tokens
            .iter()
            .map(|token| normalize_word(token.as_ref()))
            .collect();
        Self { words }
    }

    /// Membership test against an already normalized word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Up to `limit` words in sorted order.
    pub fn preview(&self, limit: usize) -> Vec<&str> {
        self.iter().take(limit).collect()
    }

    /// Exactly `limit` words, or `InsufficientDictionary` when there are fewer.
    pub fn try_preview(&self, limit: usize) -> Result<Vec<&str>, StatsError> {
        if self.len() < limit {
            return Err(StatsError::InsufficientDictionary {
                required: limit,
                available: self.len(),
            });
        }
        Ok(self.preview(limit))
    }
}
