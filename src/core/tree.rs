//! Association tree
//!
//! A perfect binary tree of words stored in level order.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::word::{fold_variants, is_blank};

/// Error type for trees that break the shape or uniqueness invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    InvalidSteps(u32),
    WrongLength { expected: usize, actual: usize },
    BlankWord(usize),
    DuplicateWord(String),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSteps(steps) => {
                write!(f, "Steps must be between 1 and {MAX_STEPS}, got {steps}")
            }
            Self::WrongLength { expected, actual } => {
                write!(f, "Tree must hold {expected} words, got {actual}")
            }
            Self::BlankWord(index) => write!(f, "Tree word at index {index} is blank"),
            Self::DuplicateWord(word) => write!(f, "Word '{word}' appears twice in the tree"),
        }
    }
}

impl std::error::Error for TreeError {}

/// Largest supported depth; 2^16 rows is already far beyond a readable table
pub const MAX_STEPS: u32 = 16;

/// Number of words in a tree of the given depth: 2^(steps+1) - 1
#[inline]
#[must_use]
pub const fn word_count(steps: u32) -> usize {
    (1 << (steps + 1)) - 1
}

/// Number of words that get expanded into children: 2^steps - 1
#[inline]
#[must_use]
pub const fn inner_count(steps: u32) -> usize {
    (1 << steps) - 1
}

/// Validate a depth value
///
/// # Errors
/// Returns `TreeError::InvalidSteps` when `steps` is 0 or above [`MAX_STEPS`].
pub const fn check_steps(steps: u32) -> Result<u32, TreeError> {
    if steps == 0 || steps > MAX_STEPS {
        Err(TreeError::InvalidSteps(steps))
    } else {
        Ok(steps)
    }
}

/// A complete binary tree of distinct words in level order
///
/// Index 0 is the root; for a 1-based index `k > 1` the parent sits at `k / 2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTree", into = "RawTree")]
pub struct AssociationTree {
    steps: u32,
    words: Vec<String>,
}

#[derive(Serialize, Deserialize)]
struct RawTree {
    steps: u32,
    words: Vec<String>,
}

impl TryFrom<RawTree> for AssociationTree {
    type Error = TreeError;

    fn try_from(raw: RawTree) -> Result<Self, Self::Error> {
        Self::from_words(raw.steps, raw.words)
    }
}

impl From<AssociationTree> for RawTree {
    fn from(tree: AssociationTree) -> Self {
        Self {
            steps: tree.steps,
            words: tree.words,
        }
    }
}

impl AssociationTree {
    /// Build a tree from level-order words, checking every invariant
    ///
    /// # Errors
    /// Returns `TreeError` if:
    /// - `steps` is out of range
    /// - the word count is not 2^(steps+1) - 1
    /// - a word is blank
    /// - a word appears twice, counting variant spellings (`ёж`, `еж`) as one
    ///
    /// # Examples
    /// ```
    /// use olympiika::core::AssociationTree;
    ///
    /// let tree = AssociationTree::from_words(1, vec!["море".into(), "волна".into(), "пляж".into()]).unwrap();
    /// assert_eq!(tree.root(), "море");
    ///
    /// assert!(AssociationTree::from_words(1, vec!["море".into()]).is_err());
    /// ```
    pub fn from_words(steps: u32, words: Vec<String>) -> Result<Self, TreeError> {
        check_steps(steps)?;

        let expected = word_count(steps);
        if words.len() != expected {
            return Err(TreeError::WrongLength {
                expected,
                actual: words.len(),
            });
        }

        let mut seen: FxHashSet<String> = FxHashSet::default();
        for (index, word) in words.iter().enumerate() {
            if is_blank(word) {
                return Err(TreeError::BlankWord(index));
            }
            if !seen.insert(fold_variants(word)) {
                return Err(TreeError::DuplicateWord(word.clone()));
            }
        }

        Ok(Self { steps, words })
    }

    /// Depth of the tree
    #[inline]
    #[must_use]
    pub const fn steps(&self) -> u32 {
        self.steps
    }

    /// The starting word
    #[inline]
    #[must_use]
    pub fn root(&self) -> &str {
        &self.words[0]
    }

    /// All words in level order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Words on one level, left to right
    #[must_use]
    pub fn level(&self, level: u32) -> &[String] {
        if level > self.steps {
            return &[];
        }
        let start = (1 << level) - 1;
        let end = (1 << (level + 1)) - 1;
        &self.words[start..end]
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl fmt::Display for AssociationTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in 0..=self.steps {
            if level > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", self.level(level).join(" | "))?;
        }
        Ok(())
    }
}
