//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. The session is saved after every action so
//! a game can be resumed later under the same id.

use crate::associations::AssociationSource;
use crate::core::Orientation;
use crate::game::{ActionOutcome, Feedback, GameSession};
use crate::generator::{GenerationError, Generator};
use crate::output::display::print_board;
use crate::store::SessionStore;
use colored::Colorize;
use log::{info, warn};
use rand::Rng;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleCommand<'a> {
    Submit(&'a str),
    Hint,
    Reveal,
    Reset,
    Help,
    Quit,
}

impl<'a> SimpleCommand<'a> {
    /// Parse a trimmed input line
    ///
    /// Anything that is not a known command is treated as a word guess.
    #[must_use]
    pub fn parse(input: &'a str) -> Self {
        match input.trim() {
            "?" | ":hint" => Self::Hint,
            "!" | ":answers" | ":reveal" => Self::Reveal,
            ":new" | ":reset" => Self::Reset,
            ":help" | ":h" => Self::Help,
            ":quit" | ":q" | ":exit" => Self::Quit,
            word => Self::Submit(word),
        }
    }
}

/// Apply a game action to a session
///
/// Returns `None` for commands that do not touch the session.
///
/// # Errors
///
/// Returns the generator's error if a reset could not build a new puzzle.
pub fn apply_command<A, R>(
    session: &mut GameSession,
    generator: &Generator<'_, A>,
    command: SimpleCommand<'_>,
    rng: &mut R,
) -> Result<Option<ActionOutcome>, GenerationError>
where
    A: AssociationSource,
    R: Rng + ?Sized,
{
    let outcome = match command {
        SimpleCommand::Submit(word) => session.submit(word),
        SimpleCommand::Hint => session.hint(),
        SimpleCommand::Reveal => session.reveal_all(),
        SimpleCommand::Reset => session.reset(generator, rng)?,
        SimpleCommand::Help | SimpleCommand::Quit => return Ok(None),
    };
    Ok(Some(outcome))
}

/// Resume the stored session `id`, or generate and store a new one
///
/// A stored session of a different depth is replaced.
///
/// # Errors
///
/// Returns an error if the store fails or no puzzle could be generated.
pub fn load_or_create<A, S, R>(
    store: &mut S,
    id: &str,
    generator: &Generator<'_, A>,
    steps: u32,
    orientation: Orientation,
    rng: &mut R,
) -> Result<GameSession, String>
where
    A: AssociationSource,
    S: SessionStore,
    R: Rng + ?Sized,
{
    match store.load(id).map_err(|e| e.to_string())? {
        Some(session) if session.steps() == steps => {
            info!("Resuming session '{id}'");
            return Ok(session);
        }
        Some(session) => warn!(
            "Stored session '{id}' has {} steps, starting a new {steps}-step puzzle",
            session.steps()
        ),
        None => {}
    }

    let session =
        GameSession::generate(generator, steps, orientation, rng).map_err(|e| e.to_string())?;
    store.save(id, &session).map_err(|e| e.to_string())?;
    Ok(session)
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input, generating a puzzle, or saving the
/// session fails.
pub fn run_simple<A, S, R>(
    generator: &Generator<'_, A>,
    store: &mut S,
    id: &str,
    steps: u32,
    orientation: Orientation,
    rng: &mut R,
) -> Result<(), String>
where
    A: AssociationSource,
    S: SessionStore,
    R: Rng + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Olympiika - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut session = load_or_create(store, id, generator, steps, orientation, rng)?;

    loop {
        print_board(&session);
        let (found, total) = session.progress();
        println!(
            "{} {}  {}",
            format!("[{}]", session.status().label()).bright_black(),
            format!("{found}/{total}").bright_cyan(),
            session.message()
        );
        session.take_highlight();

        let input = get_user_input("\nWord")?;
        if input.is_empty() {
            continue;
        }

        let command = SimpleCommand::parse(&input);
        match command {
            SimpleCommand::Quit => {
                println!("\n👋 Progress saved as '{id}'.\n");
                return Ok(());
            }
            SimpleCommand::Help => {
                print_help();
                continue;
            }
            _ => {}
        }

        match apply_command(&mut session, generator, command, rng) {
            Ok(Some(outcome)) if outcome.feedback == Feedback::Won => {
                println!("\n{}", "═".repeat(60).bright_cyan());
                println!("{}", "    🎉  O L Y M P I I K A   S O L V E D !  🎉    ".bright_green().bold());
                println!("{}", "═".repeat(60).bright_cyan());
            }
            Ok(_) => {}
            Err(err) => println!("{}", format!("❌ {err}").red()),
        }

        store.save(id, &session).map_err(|e| e.to_string())?;
    }
}

fn print_help() {
    println!("Type a word to guess it. Commands:");
    println!("  ?        hint: show letter counts in the next column");
    println!("  !        reveal the whole solution");
    println!("  :new     start a new puzzle");
    println!("  :help    show this help");
    println!("  :quit    save and exit\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(":quit".to_string());
    }

    Ok(input.trim().to_string())
}
