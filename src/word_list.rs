//! `word_list`: loading the candidate words the puzzle generator draws from.
//!
//! Input is one entry per line, either a bare `word` or `word;score`. The
//! browser build receives the contents as a string (no filesystem there), so
//! parsing and reading are kept apart:
//! - `parse_from_str(...)` works everywhere, including WASM.
//! - `load_from_path(...)` is native-only.
//!
//! Entries are uppercased, restricted to letters, deduplicated and sorted by
//! length first, then alphabetically.

use log::debug;

use crate::letters::PuzzleChar;

/// Processed, ready-to-use word list; `words` is sorted by (length, alphabetical).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Uppercase words, e.g. `["AND", "CAT", "MONEY", ...]`
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a word list from an in-memory string.
    ///
    /// Lines that are blank, carry a score that is not an integer, or contain
    /// anything other than letters are skipped. A bare `word` line has no
    /// score and is always kept; a `word;score` line is kept when
    /// `score >= min_score`.
    #[must_use]
    pub fn parse_from_str(contents: &str, min_score: i32) -> WordList {
        let mut skipped = 0usize;
        let mut words: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() {
                    return None;
                }

                let word = match line.split_once(';') {
                    Some((word_raw, score_raw)) => {
                        let score: i32 = score_raw.trim().parse().ok()?;
                        if score < min_score {
                            return None;
                        }
                        word_raw.trim()
                    }
                    None => line,
                };

                if word.is_empty() || !word.chars().all(|c| c.is_puzzle_letter()) {
                    skipped += 1;
                    return None;
                }
                Some(word.to_ascii_uppercase())
            })
            .collect();

        // dedup only removes adjacent duplicates
        words.sort();
        words.dedup();
        words.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        if skipped > 0 {
            debug!("word list: skipped {skipped} entries with non-letter characters");
        }
        WordList { words }
    }

    /// Native-only: read `path` and parse it with [`WordList::parse_from_str`].
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P, min_score: i32) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(e.kind(), format!("failed to read word list from '{}': {}", path_ref.display(), e))
        })?;

        Ok(Self::parse_from_str(&data, min_score))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Borrowed view, the shape the generator takes.
    #[must_use]
    pub fn as_strs(&self) -> Vec<&str> {
        self.words.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_words() {
        let list = WordList::parse_from_str("send\nmore\nmoney", 0);
        assert_eq!(list.words, vec!["MORE", "SEND", "MONEY"]);
    }

    #[test]
    fn test_parse_filters_low_scores() {
        let list = WordList::parse_from_str("apple;100\nbanana;20\ncherry;80", 50);
        assert_eq!(list.words, vec!["APPLE", "CHERRY"]);
    }

    #[test]
    fn test_bare_words_ignore_min_score() {
        let list = WordList::parse_from_str("cat\ndog;10", 50);
        assert_eq!(list.words, vec!["CAT"]);
    }

    #[test]
    fn test_parse_deduplicates_case_insensitively() {
        let list = WordList::parse_from_str("cat;50\nDOG;60\nCat;70\ncat", 45);
        assert_eq!(list.words, vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_sorts_by_length_then_alpha() {
        let list = WordList::parse_from_str("dog\napple\ncat\nab\nzebra", 0);
        assert_eq!(list.words, vec!["AB", "CAT", "DOG", "APPLE", "ZEBRA"]);
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let list = WordList::parse_from_str("cat;50\nice cream\ndog;60\nx-ray\napple;bad_score\nr2d2\n;40", 45);
        assert_eq!(list.words, vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_empty_input() {
        let list = WordList::parse_from_str("\n\n  \n", 0);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_parse_handles_whitespace() {
        let list = WordList::parse_from_str("  cat  ;  50  \n\t dog  ", 45);
        assert_eq!(list.words, vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_negative_scores() {
        let list = WordList::parse_from_str("cat;-10\ndog;60\nbird;-5", 0);
        assert_eq!(list.words, vec!["DOG"]);
    }

    #[test]
    fn test_as_strs() {
        let list = WordList::parse_from_str("to\ngo\nout", 0);
        assert_eq!(list.as_strs(), vec!["GO", "TO", "OUT"]);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_from_missing_path() {
        let err = WordList::load_from_path("/definitely/not/here.txt", 0).unwrap_err();
        assert!(err.to_string().contains("failed to read word list"));
    }
}
