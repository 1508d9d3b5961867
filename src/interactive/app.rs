//! TUI application state and logic

use crate::core::Feedback;
use crate::engine::{GuessSession, SessionError, SessionState};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: GuessSession,
    /// Cell whose color Space and 1/2/3 change
    pub color_cursor: usize,
    /// Highlighted entry of the candidate list
    pub highlight: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
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

impl App {
    #[must_use]
    pub fn new(session: GuessSession) -> Self {
        let mut app = Self {
            session,
            color_cursor: 0,
            highlight: 0,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Type your guess, color each letter, then press Enter.",
            MessageStyle::Info,
        );
        app
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn report(&mut self, result: Result<(), SessionError>) {
        if let Err(err) = result {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('r') if ctrl => self.random_word(),
            KeyCode::Char(' ') => {
                let result = self
                    .session
                    .cycle_cell_color(self.color_cursor)
                    .map(|_| ());
                self.report(result);
            }
            KeyCode::Char(digit @ '1'..='3') => {
                let color = match digit {
                    '1' => Feedback::Absent,
                    '2' => Feedback::Present,
                    _ => Feedback::Correct,
                };
                let result = self.session.set_cell_color(self.color_cursor, color);
                self.report(result);
            }
            KeyCode::Char(c) if !ctrl => {
                let result = self.session.edit_cell(c);
                self.report(result);
            }
            KeyCode::Backspace => {
                let result = self.session.delete_cell();
                self.report(result);
            }
            KeyCode::Left => self.color_cursor = self.color_cursor.saturating_sub(1),
            KeyCode::Right => {
                let last = self.session.config().word_length.saturating_sub(1);
                self.color_cursor = (self.color_cursor + 1).min(last);
            }
            KeyCode::Up => self.highlight = self.highlight.saturating_sub(1),
            KeyCode::Down => {
                let last = self.session.candidates().len().saturating_sub(1);
                self.highlight = (self.highlight + 1).min(last);
            }
            KeyCode::Tab => self.select_highlighted(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn select_highlighted(&mut self) {
        let Some(word) = self.session.candidates().get(self.highlight).cloned() else {
            self.add_message("No candidate to select", MessageStyle::Error);
            return;
        };
        let result = self.session.select_word(&word);
        self.report(result);
    }

    fn random_word(&mut self) {
        match self.session.choose_random(&mut rand::rng()) {
            Ok(word) => self.add_message(&format!("Picked {word}"), MessageStyle::Info),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn submit(&mut self) {
        match self.session.submit_row() {
            Ok(state) => {
                self.color_cursor = 0;
                self.highlight = 0;
                match state {
                    SessionState::Active => {
                        let count = self.session.candidates().len();
                        self.add_message(
                            &format!("{count} candidates remaining"),
                            MessageStyle::Info,
                        );
                    }
                    SessionState::Solved => {
                        let text = self
                            .session
                            .solution()
                            .map_or_else(|| "Solved!".to_string(), |w| format!("Solved: {w}"));
                        self.add_message(&text, MessageStyle::Success);
                        self.add_message("Press Ctrl-N for a new game.", MessageStyle::Info);
                    }
                    SessionState::Empty => {
                        warn!("no dictionary word matches the entered feedback");
                        self.add_message(
                            "No words match, check the colors. Ctrl-N starts over.",
                            MessageStyle::Error,
                        );
                    }
                    SessionState::Exhausted => {
                        self.add_message(
                            "Out of tries. Ctrl-N starts over.",
                            MessageStyle::Error,
                        );
                    }
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.color_cursor = 0;
        self.highlight = 0;
        self.messages.clear();
        self.add_message("New game started.", MessageStyle::Info);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
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
