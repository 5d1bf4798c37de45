//! Generator configuration
//!
//! Replaces loose keyword options with one explicit structure.

use crate::core::{fold_variants, normalize};
use rustc_hash::FxHashSet;

/// How many associations per direction are eligible before sampling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    /// Only the head of each association list (the strongest associations)
    #[default]
    Easy,
    /// Every association in both directions
    Hard,
}

impl Difficulty {
    /// Create a difficulty from its name
    ///
    /// Supported names: "easy", "hard". Returns `None` otherwise.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Hard => "hard",
        }
    }
}

/// Default cap on whole-tree attempts
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Configuration for tree generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub difficulty: Difficulty,
    /// Associations returned by a single `associate` call
    pub quantity: usize,
    /// Words never used in a puzzle, on top of the moderation blocklist.
    /// Stored normalized and variant-folded.
    pub excluded: FxHashSet<String>,
    /// Forward associations eligible in easy mode
    pub easy_forward: usize,
    /// Backward associations eligible in easy mode
    pub easy_backward: usize,
    /// Whole-tree attempts before giving up; `None` retries forever
    pub max_attempts: Option<usize>,
}

impl GeneratorConfig {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            quantity: 2,
            excluded: FxHashSet::default(),
            easy_forward: 6,
            easy_backward: 4,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: usize) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub fn with_easy_limits(mut self, forward: usize, backward: usize) -> Self {
        self.easy_forward = forward;
        self.easy_backward = backward;
        self
    }

    #[must_use]
    pub fn with_excluded<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded
            .extend(words.into_iter().map(|w| fold_variants(&normalize(w.as_ref()))));
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_from_name() {
        assert_eq!(Difficulty::from_name("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_name(" HARD "), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_name("medium"), None);
        assert_eq!(Difficulty::Hard.name(), "hard");
    }

    #[test]
    fn default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.quantity, 2);
        assert_eq!(config.easy_forward, 6);
        assert_eq!(config.easy_backward, 4);
        assert_eq!(config.max_attempts, Some(DEFAULT_MAX_ATTEMPTS));
        assert!(config.excluded.is_empty());
    }

    #[test]
    fn builder_setters() {
        let config = GeneratorConfig::new(Difficulty::Hard)
            .with_quantity(5)
            .with_max_attempts(None)
            .with_easy_limits(4, 4)
            .with_excluded([" Море", "лес", "Ёлка"]);

        assert_eq!(config.quantity, 5);
        assert_eq!(config.max_attempts, None);
        assert_eq!(config.easy_forward, 4);
        assert!(config.excluded.contains("море"));
        assert!(config.excluded.contains("лес"));
        assert!(config.excluded.contains("елка"));
    }
}
