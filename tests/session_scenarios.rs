//! End-to-end game scenarios against the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_clone::core::{GuessResult, KeyboardKnowledge, LetterState, Word};
use wordle_clone::game::{
    Dictionary, GameSession, GameStatus, GuessError, LengthBounds, SHARE_HEADER, WordSource,
};
use wordle_clone::wordlists::loader::{embedded_dictionary, words_from_slice};

fn dictionary(words: &[&str]) -> Dictionary {
    Dictionary::new(words_from_slice(words), LengthBounds::default())
}

fn session<'a>(target: &str, words: &'a Dictionary) -> GameSession<'a> {
    GameSession::new(Word::new(target).unwrap(), words)
}

#[test]
fn crane_scenario() {
    let words = dictionary(&["crane", "trace"]);
    let mut game = session("crane", &words);

    assert_eq!(game.submit_guess("trace"), Ok(GameStatus::InProgress));
    assert_eq!(
        game.history()[0].states(),
        vec![
            LetterState::Absent,
            LetterState::Correct,
            LetterState::Correct,
            LetterState::Present,
            LetterState::Correct,
        ]
    );

    assert_eq!(game.submit_guess("crane"), Ok(GameStatus::Won));
    assert!(game.history()[1].is_win());
    assert_eq!(game.history().len(), 2);
}

#[test]
fn six_misses_lose_and_seventh_is_refused() {
    let words = dictionary(&[
        "crane", "trace", "slate", "llama", "allow", "below", "bulky", "mound",
    ]);
    let mut game = session("crane", &words);
    assert_eq!(game.max_attempts(), 6);

    for guess in ["trace", "slate", "llama", "allow", "below"] {
        assert_eq!(game.submit_guess(guess), Ok(GameStatus::InProgress));
    }
    assert_eq!(game.submit_guess("bulky"), Ok(GameStatus::Lost));

    let keyboard = game.keyboard().clone();
    assert_eq!(game.submit_guess("mound"), Err(GuessError::SessionAlreadyLost));
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.keyboard(), &keyboard);
}

#[test]
fn typed_input_drives_a_whole_game() {
    let words = dictionary(&["cake", "lake", "bake"]);
    let mut game = session("cake", &words);

    // Extra keystrokes beyond the word length are dropped
    for c in "LAKES".chars() {
        game.append_char(c);
    }
    assert_eq!(game.pending_input(), "lake");
    assert_eq!(game.submit_pending(), Ok(GameStatus::InProgress));
    assert_eq!(game.pending_input(), "");

    for c in "cake".chars() {
        game.append_char(c);
    }
    assert_eq!(game.submit_pending(), Ok(GameStatus::Won));
    assert_eq!(game.keyboard().get('l'), Some(LetterState::Absent));
    assert_eq!(game.keyboard().get('c'), Some(LetterState::Correct));
}

#[test]
fn rejected_guesses_change_nothing() {
    let words = dictionary(&["crane", "trace"]);
    let mut game = session("crane", &words);
    game.submit_guess("trace").unwrap();
    game.append_char('x');

    let history = game.history().to_vec();
    let keyboard = game.keyboard().clone();

    for bad in ["cranes", "xyzzy", ""] {
        assert!(game.submit_guess(bad).is_err(), "{bad} should be rejected");
        assert_eq!(game.history(), history.as_slice());
        assert_eq!(game.keyboard(), &keyboard);
        assert_eq!(game.pending_input(), "x");
        assert_eq!(game.status(), GameStatus::InProgress);
    }
}

#[test]
fn keyboard_matches_fold_of_history() {
    let words = dictionary(&["allow", "llama", "below", "world"]);
    let mut game = session("allow", &words);
    for guess in ["llama", "below", "world"] {
        game.submit_guess(guess).unwrap();
    }

    let mut expected = KeyboardKnowledge::new();
    for result in game.history() {
        expected.merge(result);
    }
    assert_eq!(game.keyboard(), &expected);
}

#[test]
fn share_text_for_mixed_game() {
    let words = dictionary(&["crane", "trace"]);
    let mut game = session("crane", &words);
    game.submit_guess("trace").unwrap();
    game.submit_guess("crane").unwrap();

    let text = game.share_text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec![SHARE_HEADER, "⬛️🟩🟩🟨🟩", "🟩🟩🟩🟩🟩"]);
}

#[test]
fn seeded_games_on_embedded_list() {
    let words = embedded_dictionary(LengthBounds::default());
    assert!(!words.is_empty());

    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..25 {
        let mut game = GameSession::start(&words, &mut rng).unwrap();
        let target = game.target().clone();

        assert!((4..=6).contains(&target.len()));
        assert_eq!(game.max_attempts(), target.len() + 1);
        assert_eq!(game.submit_guess(target.text()), Ok(GameStatus::Won));
    }
}

#[test]
fn evaluation_properties_over_embedded_list() {
    let words = embedded_dictionary(LengthBounds::new(5, 5));
    let sample: Vec<&Word> = words.words().iter().step_by(37).collect();

    for target in &sample {
        for guess in &sample {
            let result = GuessResult::evaluate(target.text(), guess.text()).unwrap();
            assert_eq!(result.len(), target.len());
            assert_eq!(result.is_win(), target == guess);

            let target_counts = target.letter_counts();
            for letter in guess.letters() {
                let credited = result
                    .tiles()
                    .iter()
                    .filter(|t| t.letter == letter && t.state != LetterState::Absent)
                    .count();
                assert!(credited <= target_counts.get(&letter).copied().unwrap_or(0));
            }

            if !guess.letters().any(|c| target.has_letter(c)) {
                assert_eq!(result.count(LetterState::Absent), result.len());
            }
        }
    }
}
