//! Plain-text rendering of the word statistics.
//!
//! Column widths follow the classic layout of the tool: words right-aligned
//! in 15 columns, counts in 11, frequencies in 13.

use std::io::{self, Write};

use crate::dictionary::Dictionary;
use crate::index::{WordMap, WordMaps};
use crate::rank::RankedWord;

pub fn write_load_summary<W: Write>(
    out: &mut W,
    dictionary: &Dictionary,
    maps: &WordMaps,
) -> io::Result<()> {
    writeln!(out, "{} words read from dictionary.", dictionary.len())?;
    writeln!(out)?;
    writeln!(out, "{} known words read.", maps.known().len())?;
    writeln!(out, "{} unknown words read.", maps.unknown().len())?;
    writeln!(out)
}

pub fn write_dictionary_preview<W: Write>(out: &mut W, words: &[&str]) -> io::Result<()> {
    writeln!(out, "Displaying the first twenty words in the Dictionary ... ")?;
    for word in words {
        writeln!(out, "{word}")?;
    }
    writeln!(out)
}

pub fn write_word_map<W: Write>(out: &mut W, map: &WordMap) -> io::Result<()> {
    writeln!(out, "{:>15}{:>14}  Position(s)", "Word", "Count\t")?;
    for (word, positions) in map {
        write!(out, "{:>15}{:>11}\t  ", word, positions.len())?;
        for position in positions {
            write!(out, "{position} ")?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

pub fn write_top_frequent<W: Write>(out: &mut W, ranked: &[RankedWord<'_>]) -> io::Result<()> {
    writeln!(out, "{:>13}\tWord", "Frequency")?;
    for entry in ranked {
        writeln!(out, "{:>13}\t{}", entry.count, entry.word)?;
    }
    writeln!(out)
}

pub fn write_text<W: Write>(out: &mut W, words: &[&str]) -> io::Result<()> {
    writeln!(out, "{}", words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::top_frequent;
    use crate::token::split_tokens;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample() -> (Dictionary, WordMaps) {
        let dictionary = Dictionary::from_tokens(&["the", "fox"]);
        let tokens = split_tokens("The fox saw the fox");
        let maps = WordMaps::build(&tokens, &dictionary);
        (dictionary, maps)
    }

    #[test]
    fn summary_lists_sizes() {
        let (dictionary, maps) = sample();
        let text = render(|out| write_load_summary(out, &dictionary, &maps));
        assert!(text.starts_with("2 words read from dictionary.\n"));
        assert!(text.contains("2 known words read.\n"));
        assert!(text.contains("1 unknown words read.\n"));
    }

    #[test]
    fn word_map_rows_are_aligned() {
        let (_, maps) = sample();
        let text = render(|out| write_word_map(out, maps.known()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "           Word        Count\t  Position(s)");
        assert_eq!(lines[1], "            fox          2\t  2 5 ");
        assert_eq!(lines[2], "            the          2\t  1 4 ");
        assert_eq!(lines[3], "");
    }

    #[test]
    fn ranking_rows_are_aligned() {
        let (_, maps) = sample();
        let ranked = top_frequent(maps.known(), 10);
        let text = render(|out| write_top_frequent(out, &ranked));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "    Frequency\tWord");
        assert_eq!(lines[1], "            2\tfox");
        assert_eq!(lines[2], "            2\tthe");
    }

    #[test]
    fn preview_and_text() {
        let preview = render(|out| write_dictionary_preview(out, &["a", "b"]));
        assert_eq!(
            preview,
            "Displaying the first twenty words in the Dictionary ... \na\nb\n\n"
        );
        let text = render(|out| write_text(out, &["the", "fox"]));
        assert_eq!(text, "the fox\n");
    }
}
