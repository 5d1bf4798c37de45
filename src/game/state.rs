//! Game status, action outcomes, and hint masking

use serde::{Deserialize, Serialize};

/// Character that replaces hidden letters in a hint
pub const MASK_CHAR: char = '*';

/// Where a puzzle stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Just created or reset: only column 0 is shown
    #[default]
    Fresh,
    /// Some words found
    InProgress,
    /// Masked hints are on the board
    HintShown,
    /// The full solution was shown
    Revealed,
    /// Every word found by the player
    Won,
}

impl GameStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fresh => "new",
            Self::InProgress => "in progress",
            Self::HintShown => "hints shown",
            Self::Revealed => "revealed",
            Self::Won => "solved",
        }
    }
}

/// How a highlighted word should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HighlightKind {
    /// Freshly revealed by the last submit
    New,
    /// Submitted again although it was already on the board
    Existing,
}

/// A word the presentation layer should highlight once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub word: String,
    pub kind: HighlightKind,
}

/// What an action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Empty input, nothing changed
    Ignored,
    Accepted,
    /// Accepted and the board is now complete
    Won,
    AlreadyRevealed,
    UnknownWord,
    HintShown,
    /// Every column is already solved, no hint to give
    NothingToHint,
    Revealed,
    NewPuzzle,
}

/// Result of one player action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub feedback: Feedback,
    pub message: String,
    pub highlight: Option<Highlight>,
}

impl ActionOutcome {
    pub(crate) fn new(feedback: Feedback, message: impl Into<String>) -> Self {
        Self {
            feedback,
            message: message.into(),
            highlight: None,
        }
    }

    pub(crate) fn with_highlight(mut self, word: &str, kind: HighlightKind) -> Self {
        self.highlight = Some(Highlight {
            word: word.to_string(),
            kind,
        });
        self
    }
}

/// Mask a word for a hint: first letter, one mask per hidden letter, last letter
///
/// A one-letter word has the same first and last letter, so it is shown
/// doubled; a two-letter word comes back unchanged.
///
/// # Examples
/// ```
/// use olympiika::game::mask_word;
///
/// assert_eq!(mask_word("пример"), "п****р");
/// assert_eq!(mask_word("ёж"), "ёж");
/// assert_eq!(mask_word("я"), "яя");
/// ```
#[must_use]
pub fn mask_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let last = chars.next_back().unwrap_or(first);
    let hidden = chars.count();

    let mut masked = String::with_capacity(word.len());
    masked.push(first);
    masked.extend(std::iter::repeat_n(MASK_CHAR, hidden));
    masked.push(last);
    masked
}
