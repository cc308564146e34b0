//! TUI application state and logic

use crate::config::GameConfig;
use crate::game::{Dictionary, GameError, GameSession, GameStatus};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::io;

/// Application state
pub struct App<'a> {
    pub words: &'a Dictionary,
    pub config: GameConfig,
    pub session: GameSession<'a>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    pub fn new(words: &'a Dictionary, config: GameConfig) -> Result<Self, GameError> {
        let mut rng = config.rng();
        let session = config.new_session(words, &mut rng)?;

        let mut app = Self {
            words,
            config,
            session,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };
        app.announce();
        Ok(app)
    }

    fn announce(&mut self) {
        let text = format!(
            "Guess the {}-letter word in {} tries.",
            self.session.word_length(),
            self.session.max_attempts()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        match self.config.new_session(self.words, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
                self.announce();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Submit the typed letters as a guess
    pub fn submit(&mut self) {
        match self.session.submit_pending() {
            Ok(GameStatus::InProgress) => {
                let remaining = self.session.attempts_remaining();
                self.add_message(
                    &format!(
                        "{remaining} {} left",
                        if remaining == 1 { "guess" } else { "guesses" }
                    ),
                    MessageStyle::Info,
                );
            }
            Ok(GameStatus::Won) => {
                let guesses = self.session.attempts_used();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                *self.stats.guess_distribution.entry(guesses).or_insert(0) += 1;

                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Ok(GameStatus::Lost) => {
                self.stats.total_games += 1;
                let reveal = format!(
                    "Out of guesses! The word was {}.",
                    self.session.target().text().to_uppercase()
                );
                self.add_message(&reveal, MessageStyle::Error);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        if self.session.status().is_over() {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        match key.code {
            // Ctrl/Alt chords are shortcuts, not letters
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.session.append_char(c);
            }
            KeyCode::Backspace => {
                self.session.remove_char();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(share)) => print!("{share}"),
        Ok(None) => {}
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

/// Event loop; returns the share text of the last finished game, if any
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    let share = app
        .session
        .status()
        .is_over()
        .then(|| app.session.share_text());
    Ok(share)
}
