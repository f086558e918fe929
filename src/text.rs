use std::collections::BTreeMap;

use crate::index::WordMap;

/// Rebuild the normalized token sequence from both word maps.
///
/// Positions are inverted into one position-ordered map. If two entries claim
/// the same position the first one inserted is kept: `known` is visited
/// before `unknown`, each in ascending word order.
pub fn reconstruct<'a>(known: &'a WordMap, unknown: &'a WordMap) -> Vec<&'a str> {
    let mut by_position: BTreeMap<usize, &'a str> = BTreeMap::new();
    for (word, positions) in known.iter().chain(unknown.iter()) {
        for &position in positions {
            by_position.entry(position).or_insert(word.as_str());
        }
    }
    by_position.into_values().collect()
}
