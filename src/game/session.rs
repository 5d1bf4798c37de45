//! Player session: solution, visible board, and the reveal/hint/reset actions

use super::state::{ActionOutcome, Feedback, GameStatus, Highlight, HighlightKind, mask_word};
use crate::associations::AssociationSource;
use crate::core::{AssociationTree, Matrix, Orientation, layout, normalize, resolve_variants};
use crate::generator::{GenerationError, Generator, StartWord};
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Greeting shown on a brand new session
pub const WELCOME_MESSAGE: &str = "Welcome! Find the hidden associations.";

/// One player's puzzle
///
/// Every action takes `&mut self`, so a session is never mutated by two
/// actions at once. Sessions serialize with serde for a [`SessionStore`];
/// deserializing rejects a display grid shaped differently from the solution.
///
/// [`SessionStore`]: crate::store::SessionStore
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSession", into = "RawSession")]
pub struct GameSession {
    solution: Matrix,
    display: Matrix,
    status: GameStatus,
    message: String,
    highlight: Option<Highlight>,
}

/// Stored form of a session
#[derive(Serialize, Deserialize)]
struct RawSession {
    solution: Matrix,
    display: Matrix,
    status: GameStatus,
    message: String,
    highlight: Option<Highlight>,
}

impl TryFrom<RawSession> for GameSession {
    type Error = String;

    fn try_from(raw: RawSession) -> Result<Self, Self::Error> {
        if raw.display.steps() != raw.solution.steps()
            || raw.display.orientation() != raw.solution.orientation()
        {
            return Err(format!(
                "Display grid ({} steps, {:?}) does not match the solution grid ({} steps, {:?})",
                raw.display.steps(),
                raw.display.orientation(),
                raw.solution.steps(),
                raw.solution.orientation()
            ));
        }
        Ok(Self {
            solution: raw.solution,
            display: raw.display,
            status: raw.status,
            message: raw.message,
            highlight: raw.highlight,
        })
    }
}

impl From<GameSession> for RawSession {
    fn from(session: GameSession) -> Self {
        Self {
            solution: session.solution,
            display: session.display,
            status: session.status,
            message: session.message,
            highlight: session.highlight,
        }
    }
}

impl GameSession {
    /// Start a session for an already generated tree
    ///
    /// # Examples
    /// ```
    /// use olympiika::core::{AssociationTree, Orientation};
    /// use olympiika::game::{GameSession, GameStatus};
    ///
    /// let tree = AssociationTree::from_words(1, vec!["море".into(), "волна".into(), "пляж".into()]).unwrap();
    /// let mut session = GameSession::new(&tree, Orientation::RootFirst);
    ///
    /// session.submit("волна");
    /// session.submit("Пляж ");
    /// assert_eq!(session.status(), GameStatus::Won);
    /// ```
    #[must_use]
    pub fn new(tree: &AssociationTree, orientation: Orientation) -> Self {
        let solution = layout(tree, orientation);
        let display = initial_display(&solution);
        Self {
            solution,
            display,
            status: GameStatus::Fresh,
            message: WELCOME_MESSAGE.to_string(),
            highlight: None,
        }
    }

    /// Generate a random puzzle and start a session on it
    ///
    /// # Errors
    /// Returns the generator's error when no tree could be built.
    pub fn generate<A, R>(
        generator: &Generator<'_, A>,
        steps: u32,
        orientation: Orientation,
        rng: &mut R,
    ) -> Result<Self, GenerationError>
    where
        A: AssociationSource,
        R: Rng + ?Sized,
    {
        let generated = generator.generate(steps, &StartWord::Random, rng)?;
        Ok(Self::new(&generated.tree, orientation))
    }

    #[inline]
    #[must_use]
    pub const fn steps(&self) -> u32 {
        self.solution.steps()
    }

    #[inline]
    #[must_use]
    pub const fn solution(&self) -> &Matrix {
        &self.solution
    }

    #[inline]
    #[must_use]
    pub const fn display(&self) -> &Matrix {
        &self.display
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Message from the last action
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Pending highlight, if any
    #[inline]
    #[must_use]
    pub const fn highlight(&self) -> Option<&Highlight> {
        self.highlight.as_ref()
    }

    /// Consume the pending highlight; it is shown only once
    pub fn take_highlight(&mut self) -> Option<Highlight> {
        self.highlight.take()
    }

    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.display == self.solution
    }

    /// Hidden words found so far and the total number of hidden words
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        let mut found = 0;
        let mut total = 0;
        for col in 1..self.solution.cols() {
            for (shown, answer) in self.display.blocks(col).zip(self.solution.blocks(col)) {
                total += 1;
                if shown == answer {
                    found += 1;
                }
            }
        }
        (found, total)
    }

    /// Check a player's word against the puzzle
    ///
    /// The input is normalized and matched to the puzzle's own spelling of letter
    /// variants before comparison.
    pub fn submit(&mut self, text: &str) -> ActionOutcome {
        let mut word = normalize(text);
        if word.is_empty() {
            return ActionOutcome::new(Feedback::Ignored, self.message.clone());
        }
        word = resolve_variants(&word, self.solution_words());

        let outcome = if self.display.contains(&word) {
            ActionOutcome::new(
                Feedback::AlreadyRevealed,
                format!("{word} - already entered."),
            )
            .with_highlight(&word, HighlightKind::Existing)
        } else if self.reveal(&word) {
            let accepted = if self.is_complete() {
                self.status = GameStatus::Won;
                ActionOutcome::new(Feedback::Won, "Congratulations!")
            } else {
                self.status = GameStatus::InProgress;
                ActionOutcome::new(Feedback::Accepted, format!("+{word}"))
            };
            accepted.with_highlight(&word, HighlightKind::New)
        } else {
            ActionOutcome::new(Feedback::UnknownWord, format!("{word} - no such word."))
        };

        self.record(&outcome);
        outcome
    }

    /// Mask every unsolved word of the first column that still has one
    ///
    /// Column 0 is never touched, and only one column is hinted per call.
    pub fn hint(&mut self) -> ActionOutcome {
        let target = (1..self.solution.cols()).find(|&col| {
            (0..self.solution.rows())
                .any(|row| self.display.get(row, col) != self.solution.get(row, col))
        });

        let outcome = if let Some(col) = target {
            for row in 0..self.solution.rows() {
                let answer = self.solution.get(row, col);
                if self.display.get(row, col) != answer {
                    let masked = mask_word(answer);
                    self.display.set(row, col, masked);
                }
            }
            self.status = GameStatus::HintShown;
            ActionOutcome::new(Feedback::HintShown, "Hints show the number of letters.")
        } else {
            ActionOutcome::new(Feedback::NothingToHint, "Nothing left to hint.")
        };

        self.record(&outcome);
        outcome
    }

    /// Show the whole solution
    ///
    /// This does not count as winning.
    pub fn reveal_all(&mut self) -> ActionOutcome {
        self.display = self.solution.clone();
        self.status = GameStatus::Revealed;

        let outcome = ActionOutcome::new(Feedback::Revealed, "This is the full olympiika.");
        self.record(&outcome);
        outcome
    }

    /// Replace the puzzle with a freshly generated one of the same depth
    ///
    /// # Errors
    /// Returns the generator's error when a capped generator runs out of attempts;
    /// the current puzzle is kept in that case.
    pub fn reset<A, R>(
        &mut self,
        generator: &Generator<'_, A>,
        rng: &mut R,
    ) -> Result<ActionOutcome, GenerationError>
    where
        A: AssociationSource,
        R: Rng + ?Sized,
    {
        let generated = generator.generate(self.steps(), &StartWord::Random, rng)?;
        info!(
            "New puzzle from '{}' after {} attempts",
            generated.tree.root(),
            generated.attempts
        );

        *self = Self::new(&generated.tree, self.solution.orientation());

        let outcome = ActionOutcome::new(
            Feedback::NewPuzzle,
            format!(
                "New olympiika. Generated in {:.3} s.",
                generated.duration.as_secs_f64()
            ),
        );
        self.record(&outcome);
        Ok(outcome)
    }

    fn solution_words(&self) -> impl Iterator<Item = &str> + Clone {
        self.solution.cells().iter().flatten().map(String::as_str)
    }

    /// Reveal every hidden cell holding `word`; false if it is not in the puzzle
    fn reveal(&mut self, word: &str) -> bool {
        let mut found = false;
        for row in 0..self.solution.rows() {
            for col in 1..self.solution.cols() {
                if self.solution.get(row, col) == word {
                    self.display.set(row, col, word);
                    found = true;
                }
            }
        }
        found
    }

    fn record(&mut self, outcome: &ActionOutcome) {
        self.message.clone_from(&outcome.message);
        self.highlight.clone_from(&outcome.highlight);
    }
}

/// A board with only column 0 shown
fn initial_display(solution: &Matrix) -> Matrix {
    let mut display = Matrix::blank(solution.steps(), solution.orientation());
    for row in 0..solution.rows() {
        display.set(row, 0, solution.get(row, 0));
    }
    display
}
