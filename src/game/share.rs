//! Shareable result text
//!
//! The format is fixed so that anything parsing shared results keeps working:
//! a header line, then one row of glyphs per guess in submission order.

use crate::core::GuessResult;

/// Header line of shared results
pub const SHARE_HEADER: &str = "https://danielwinfield.uk/wordle-clone/";

/// Render a guess history as share text
///
/// Every line, the header included, ends with `\n`.
///
/// # Examples
/// ```
/// use wordle_clone::core::GuessResult;
/// use wordle_clone::game::{SHARE_HEADER, render_share_text};
///
/// let history = vec![
///     GuessResult::evaluate("crane", "trace").unwrap(),
///     GuessResult::evaluate("crane", "crane").unwrap(),
/// ];
/// let text = render_share_text(SHARE_HEADER, &history);
///
/// assert_eq!(text.lines().count(), 3);
/// assert!(text.ends_with("🟩🟩🟩🟩🟩\n"));
/// ```
#[must_use]
pub fn render_share_text(header: &str, history: &[GuessResult]) -> String {
    let mut text = String::with_capacity(header.len() + 1 + history.len() * 24);
    text.push_str(header);
    text.push('\n');

    for result in history {
        text.push_str(&result.share_row());
        text.push('\n');
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;

    #[test]
    fn empty_history_is_header_only() {
        let text = render_share_text(SHARE_HEADER, &[]);
        assert_eq!(text, "https://danielwinfield.uk/wordle-clone/\n");
    }

    #[test]
    fn exact_bytes_for_two_rows() {
        let history = [
            GuessResult::evaluate("crane", "trace").unwrap(),
            GuessResult::evaluate("crane", "crane").unwrap(),
        ];
        let text = render_share_text(SHARE_HEADER, &history);

        assert_eq!(
            text,
            "https://danielwinfield.uk/wordle-clone/\n\
             \u{2b1b}\u{fe0f}\u{1f7e9}\u{1f7e9}\u{1f7e8}\u{1f7e9}\n\
             \u{1f7e9}\u{1f7e9}\u{1f7e9}\u{1f7e9}\u{1f7e9}\n"
        );
    }

    #[test]
    fn glyph_counts_match_outcomes() {
        let history = [
            GuessResult::evaluate("allow", "allow").unwrap(),
            GuessResult::evaluate("allow", "llama").unwrap(),
        ];
        let text = render_share_text("title", &history);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "title");

        for (line, result) in lines[1..].iter().zip(&history) {
            for state in [LetterState::Correct, LetterState::Present] {
                let glyph = state.share_glyph().chars().next().unwrap();
                let shown = line.chars().filter(|&c| c == glyph).count();
                assert_eq!(shown, result.count(state));
            }
            let blacks = line.matches(LetterState::Absent.share_glyph()).count();
            assert_eq!(blacks, result.count(LetterState::Absent));
        }
    }

    #[test]
    fn rows_keep_submission_order() {
        let history = [
            GuessResult::evaluate("crane", "slate").unwrap(),
            GuessResult::evaluate("crane", "crane").unwrap(),
        ];
        let text = render_share_text(SHARE_HEADER, &history);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], history[0].share_row());
        assert_eq!(lines[2], history[1].share_row());
    }
}
