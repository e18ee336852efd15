//! TUI application state and logic

use crate::core::WORD_LEN;
use crate::game::{
    GameError, GameService, GuessError, GuessRecord, Reveal, SessionId, SessionStore, StatusReport,
};
use crate::transliterate::Transliterator;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest input the buffer accepts
const INPUT_LIMIT: usize = WORD_LEN * 2;

/// Application state
pub struct App<S, T> {
    service: GameService<S, T>,
    game_id: SessionId,
    pub snapshot: StatusReport,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results across the games of one TUI run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by attempt number; index 0 is unused
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, snapshot: &StatusReport) {
        self.total_games += 1;
        if snapshot.won {
            self.games_won += 1;
            let slot = snapshot.attempts as usize;
            if self.guess_distribution.len() <= slot {
                self.guess_distribution.resize(slot + 1, 0);
            }
            self.guess_distribution[slot] += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<S: SessionStore, T: Transliterator> App<S, T> {
    /// Create the app and start its first game
    ///
    /// # Errors
    ///
    /// Returns an error if the first game cannot be started.
    pub fn new(service: GameService<S, T>) -> Result<Self> {
        let started = service.start()?;
        let snapshot = service.status(&started.game_id)?;

        let mut app = Self {
            service,
            game_id: started.game_id,
            snapshot,
            input_mode: InputMode::Guessing,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message("Welcome! Guess the four-character word.", MessageStyle::Info);
        app.add_message(
            "Characters, pinyin letters and tones are scored separately.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = self.input_buffer.trim().to_string();
        if input.is_empty() {
            return;
        }

        match self.service.guess(&self.game_id, &input) {
            Ok(report) => {
                self.input_buffer.clear();
                if report.is_won() {
                    let celebration = match report.attempts {
                        1 => "🎯 First try! Extraordinary! 🌟".to_string(),
                        2 => "🔥 Magnificent! Two guesses! 🔥".to_string(),
                        3 => "✨ Splendid! Three guesses! ✨".to_string(),
                        n => format!("🎉 Solved on attempt {n}! 🎉"),
                    };
                    self.add_message(&celebration, MessageStyle::Success);
                } else if let Some(reveal) = &report.reveal {
                    let text = format!("😞 Out of attempts! The answer was {}", reveal.target_word);
                    self.add_message(&text, MessageStyle::Error);
                } else {
                    let text = format!("{} attempts left", report.remaining());
                    self.add_message(&text, MessageStyle::Info);
                }
            }
            Err(GameError::Guess(GuessError::InvalidLength(err))) => {
                self.add_message(&format!("Invalid guess: {err}"), MessageStyle::Error);
            }
            Err(GameError::Guess(err @ GuessError::Processing { .. })) => {
                self.input_buffer.clear();
                self.add_message(&format!("{err} (attempt counted)"), MessageStyle::Error);
                if let GuessError::Processing {
                    reveal: Some(reveal),
                    ..
                } = &err
                {
                    let text = format!("😞 Out of attempts! The answer was {}", reveal.target_word);
                    self.add_message(&text, MessageStyle::Error);
                }
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }

        self.refresh();
    }

    /// Abandon the current game and start another
    pub fn new_game(&mut self) {
        let started = match self.service.start() {
            Ok(started) => started,
            Err(err) => {
                self.add_message(&format!("Cannot start a game: {err}"), MessageStyle::Error);
                return;
            }
        };

        self.service.end(&self.game_id);
        self.game_id = started.game_id;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!("New game! You have {} attempts.", started.max_attempts),
            MessageStyle::Info,
        );
        self.refresh();
    }

    fn refresh(&mut self) {
        match self.service.status(&self.game_id) {
            Ok(snapshot) => {
                if snapshot.finished && self.input_mode == InputMode::Guessing {
                    self.stats.record(&snapshot);
                    self.input_mode = InputMode::GameOver;
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
                self.snapshot = snapshot;
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
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

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.snapshot.history
    }

    #[must_use]
    pub fn reveal(&self) -> Option<&Reveal> {
        self.snapshot.reveal.as_ref()
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match (self.input_mode, key.code) {
            (_, KeyCode::Esc) => self.should_quit = true,
            (_, KeyCode::Char('c')) if ctrl => self.should_quit = true,
            (_, KeyCode::Char('n')) if ctrl => self.new_game(),
            (InputMode::GameOver, KeyCode::Char('q')) => self.should_quit = true,
            (InputMode::GameOver, KeyCode::Char('n')) => self.new_game(),
            (InputMode::Guessing, KeyCode::Char(c)) => {
                if self.input_buffer.chars().count() < INPUT_LIMIT && !c.is_control() {
                    self.input_buffer.push(c);
                }
            }
            (InputMode::Guessing, KeyCode::Backspace) => {
                self.input_buffer.pop();
            }
            (InputMode::Guessing, KeyCode::Enter) => self.submit_guess(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SessionStore, T: Transliterator>(app: App<S, T>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S, T>(terminal: &mut Terminal<B>, mut app: App<S, T>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: SessionStore,
    T: Transliterator,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
