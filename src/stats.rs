use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::dictionary::Dictionary;
use crate::error::StatsError;
use crate::index::WordMaps;
use crate::token::read_tokens;

/// Dictionary and word maps of one run. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct WordStats {
    dictionary: Dictionary,
    maps: WordMaps,
}

impl WordStats {
    /// Load the dictionary, then classify the text file against it.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        dictionary_path: P,
        text_path: Q,
    ) -> Result<Self, StatsError> {
        let dictionary = Dictionary::load_from_file(dictionary_path)?;

        let start = Instant::now();
        let text_ref = text_path.as_ref();
        let tokens = read_tokens(text_ref)?;
        let stats = Self::from_parts(dictionary, &tokens);
        info!(
            "classified {} tokens from {} in {} ms",
            tokens.len(),
            text_ref.display(),
            start.elapsed().as_millis()
        );
        info!("{} known words read", stats.maps.known().len());
        info!("{} unknown words read", stats.maps.unknown().len());
        Ok(stats)
    }

    pub fn from_parts<S: AsRef<str>>(dictionary: Dictionary, tokens: &[S]) -> Self {
        let maps = WordMaps::build(tokens, &dictionary);
        Self { dictionary, maps }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn maps(&self) -> &WordMaps {
        &self.maps
    }
}
