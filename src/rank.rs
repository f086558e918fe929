use std::cmp::Reverse;

use serde::Serialize;

use crate::error::StatsError;
use crate::index::WordMap;

/// Default length of a frequency ranking.
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedWord<'a> {
    pub word: &'a str,
    pub count: usize,
}

/// Up to `n` words ordered by descending count, ties by ascending word.
///
/// Returns fewer than `n` entries when the map holds fewer distinct words.
pub fn top_frequent(map: &WordMap, n: usize) -> Vec<RankedWord<'_>> {
    let mut ranked: Vec<RankedWord<'_>> = map
        .iter()
        .map(|(word, positions)| RankedWord {
            word: word.as_str(),
            count: positions.len(),
        })
        .collect();
    ranked.sort_by_key(|entry| (Reverse(entry.count), entry.word));
    ranked.truncate(n);
    ranked
}

/// Like [`top_frequent`] but fails with `InsufficientData` instead of truncating.
pub fn try_top_frequent(map: &WordMap, n: usize) -> Result<Vec<RankedWord<'_>>, StatsError> {
    if map.len() < n {
        return Err(StatsError::InsufficientData {
            requested: n,
            available: map.len(),
        });
    }
    Ok(top_frequent(map, n))
}
