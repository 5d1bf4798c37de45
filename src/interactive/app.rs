//! TUI application state and logic

use crate::associations::AssociationSource;
use crate::game::{ActionOutcome, Feedback, GameSession, Highlight};
use crate::generator::Generator;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, A: AssociationSource> {
    pub generator: Generator<'a, A>,
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Word to highlight on the next frame, consumed from the session
    pub highlight: Option<Highlight>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    WinCelebration,
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
    pub puzzles: usize,
    pub solved: usize,
    pub hints: usize,
    pub reveals: usize,
}

impl<'a, A: AssociationSource> App<'a, A> {
    #[must_use]
    pub fn new(generator: Generator<'a, A>, session: GameSession, rng: StdRng) -> Self {
        let welcome = session.message().to_string();
        let mut app = Self {
            generator,
            input_buffer: String::new(),
            messages: Vec::new(),
            highlight: None,
            stats: Statistics {
                puzzles: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Guessing,
            session,
            rng,
        };
        app.add_message(&welcome, MessageStyle::Info);
        app.add_message(
            "Type a word and press Enter. Tab: hint, Ctrl+R: answers, Ctrl+N: new puzzle",
            MessageStyle::Info,
        );
        app
    }

    /// Submit the input buffer as a guess
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let outcome = self.session.submit(&input);
        self.apply(&outcome);
    }

    pub fn hint(&mut self) {
        let outcome = self.session.hint();
        self.apply(&outcome);
    }

    pub fn reveal(&mut self) {
        let outcome = self.session.reveal_all();
        self.apply(&outcome);
    }

    pub fn new_game(&mut self) {
        match self.session.reset(&self.generator, &mut self.rng) {
            Ok(outcome) => self.apply(&outcome),
            Err(err) => {
                warn!("Could not generate a new puzzle: {err}");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn apply(&mut self, outcome: &ActionOutcome) {
        self.highlight = self.session.take_highlight();

        let style = match outcome.feedback {
            Feedback::Ignored => return,
            Feedback::Accepted | Feedback::Won => MessageStyle::Success,
            Feedback::UnknownWord | Feedback::AlreadyRevealed | Feedback::NothingToHint => {
                MessageStyle::Error
            }
            Feedback::HintShown | Feedback::Revealed | Feedback::NewPuzzle => MessageStyle::Info,
        };

        match outcome.feedback {
            Feedback::Won => {
                self.stats.solved += 1;
                self.input_mode = InputMode::WinCelebration;
            }
            Feedback::HintShown => self.stats.hints += 1,
            Feedback::Revealed => self.stats.reveals += 1,
            Feedback::NewPuzzle => {
                self.stats.puzzles += 1;
                self.input_mode = InputMode::Guessing;
                self.input_buffer.clear();
            }
            _ => {}
        }

        self.add_message(&outcome.message, style);
        if outcome.feedback == Feedback::Won {
            self.add_message("Press 'n' for a new puzzle or 'q' to quit.", MessageStyle::Info);
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

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.reveal();
                }
                KeyCode::Tab => self.hint(),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<A: AssociationSource>(app: App<'_, A>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, A: AssociationSource>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, A>,
) -> Result<()> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::associations::PairTable;
    use crate::core::{AssociationTree, Orientation};
    use crate::game::{GameStatus, HighlightKind};
    use crate::generator::GeneratorConfig;
    use rand::SeedableRng;

    fn session() -> GameSession {
        let tree = AssociationTree::from_words(
            1,
            vec!["море".into(), "волна".into(), "пляж".into()],
        )
        .unwrap();
        GameSession::new(&tree, Orientation::RootFirst)
    }

    fn app(table: &PairTable) -> App<'_, PairTable> {
        App::new(
            Generator::new(table, GeneratorConfig::default()),
            session(),
            StdRng::seed_from_u64(0),
        )
    }

    fn type_word<A: AssociationSource>(app: &mut App<'_, A>, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    }

    #[test]
    fn typing_and_submitting_reveals_word() {
        let table = PairTable::embedded();
        let mut app = app(&table);

        type_word(&mut app, "волна");
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.display().get(0, 1), "волна");
        assert_eq!(
            app.highlight.as_ref().map(|h| h.kind),
            Some(HighlightKind::New)
        );
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn solving_enters_celebration() {
        let table = PairTable::embedded();
        let mut app = app(&table);

        type_word(&mut app, "волна");
        type_word(&mut app, "пляж");
        assert_eq!(app.session.status(), GameStatus::Won);
        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.solved, 1);

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.session.status(), GameStatus::Fresh);
        assert_eq!(app.stats.puzzles, 2);
    }

    #[test]
    fn tab_hints_and_ctrl_r_reveals() {
        let table = PairTable::embedded();
        let mut app = app(&table);

        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert_eq!(app.session.status(), GameStatus::HintShown);
        assert_eq!(app.stats.hints, 1);

        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(app.session.status(), GameStatus::Revealed);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn unknown_word_is_an_error_message() {
        let table = PairTable::embedded();
        let mut app = app(&table);

        type_word(&mut app, "гора");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert!(app.highlight.is_none());
    }

    #[test]
    fn empty_enter_adds_no_message() {
        let table = PairTable::embedded();
        let mut app = app(&table);
        let before = app.messages.len();

        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.messages.len(), before);
    }

    #[test]
    fn failed_reset_keeps_puzzle() {
        let table = PairTable::new([("море", "волна")]);
        let config = GeneratorConfig::default().with_max_attempts(Some(2));
        let mut app = App::new(
            Generator::new(&table, config),
            session(),
            StdRng::seed_from_u64(0),
        );

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(app.session.solution().get(0, 0), "море");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let table = PairTable::embedded();
        let mut app = app(&table);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = self::app(&table);
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);
    }
}
