//! Game session state machine
//!
//! Holds the solution and the player's view of it, and applies player actions:
//! submit a word, ask for a hint, reveal everything, or start over.

mod session;
mod state;

pub use session::{GameSession, WELCOME_MESSAGE};
pub use state::{
    ActionOutcome, Feedback, GameStatus, Highlight, HighlightKind, MASK_CHAR, mask_word,
};
