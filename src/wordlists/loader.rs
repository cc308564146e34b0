//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use crate::game::{Dictionary, LengthBounds};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Blank lines, `#` comments and invalid entries are
/// skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_clone::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse words from text, one per line
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_clone::wordlists::loader::words_from_slice;
/// use wordle_clone::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Dictionary over the embedded word list
#[must_use]
pub fn embedded_dictionary(bounds: LengthBounds) -> Dictionary {
    Dictionary::new(words_from_slice(super::WORDS), bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::WordSource;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "t00th", "", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_lines_skips_comments_and_blanks() {
        let content = "# list\ncrane\n\n  Slate  \nno way\n";
        let words = words_from_lines(content);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }

    #[test]
    fn embedded_dictionary_respects_bounds() {
        let all = embedded_dictionary(LengthBounds::default());
        assert_eq!(all.len(), crate::wordlists::WORDS_COUNT);

        let fives = embedded_dictionary(LengthBounds::new(5, 5));
        assert!(fives.len() < all.len());
        assert!(fives.words().iter().all(|w| w.len() == 5));
    }
}
