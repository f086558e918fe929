use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::StatsError;

/// Canonical form of a raw token.
///
/// The token is lowercased. An all-digit token is returned as is; anything
/// else keeps only ASCII letters, apostrophes and hyphens, in order. The
/// result may be empty.
pub fn normalize_word(raw: &str) -> String {
    let lowered = raw.to_ascii_lowercase();
    if lowered.chars().all(|c| c.is_ascii_digit()) {
        return lowered;
    }
    lowered
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == '\'' || *c == '-')
        .collect()
}

/// Split text on runs of ASCII space, `\t`, `\n`, `\v`, `\f` or `\r`,
/// keeping token order. Other Unicode whitespace stays inside a token.
pub fn split_tokens(text: &str) -> Vec<String> {
    text.split(is_separator)
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect()
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Read every whitespace-delimited token of a file, in order.
///
/// The file is closed before this returns. Invalid UTF-8 is decoded lossily.
pub fn read_tokens<P: AsRef<Path>>(path: P) -> Result<Vec<String>, StatsError> {
    let path_ref = path.as_ref();
    let file = File::open(path_ref).map_err(|source| StatsError::FileNotFound {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|source| StatsError::Read {
            path: path_ref.to_path_buf(),
            source,
        })?;

    Ok(split_tokens(&String::from_utf8_lossy(&bytes)))
}
