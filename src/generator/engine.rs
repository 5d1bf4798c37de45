//! Association tree generator
//!
//! Expands a start word level by level into a perfect binary tree. Any dead end
//! throws the whole attempt away and a fresh one starts; a partially built tree is
//! never repaired.

use super::config::{Difficulty, GeneratorConfig};
use super::filter::filter_candidates;
use crate::associations::AssociationSource;
use crate::core::{
    AssociationTree, TreeError, check_steps, fold_variants, inner_count, normalize, word_count,
};
use log::{debug, info};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use std::time::{Duration, Instant};

/// Every word expands into this many children
const BRANCHING: usize = 2;

/// Why a tree could not be generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The source has no words to start from
    EmptySource,
    /// Not enough fresh associations to expand a word
    PoolExhausted {
        word: String,
        available: usize,
        needed: usize,
    },
    /// The generated words do not form a valid tree
    InvalidTree(TreeError),
    /// Every allowed attempt failed
    Exhausted { attempts: usize },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySource => write!(f, "Association source is empty"),
            Self::PoolExhausted {
                word,
                available,
                needed,
            } => write!(
                f,
                "Only {available} usable associations for '{word}', need {needed}"
            ),
            Self::InvalidTree(err) => write!(f, "Invalid tree: {err}"),
            Self::Exhausted { attempts } => {
                write!(f, "Could not build a complete tree in {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for GenerationError {}

impl From<TreeError> for GenerationError {
    fn from(err: TreeError) -> Self {
        Self::InvalidTree(err)
    }
}

/// Where a tree starts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StartWord {
    /// A fresh random word from the source for every attempt
    #[default]
    Random,
    /// Always this word
    Fixed(String),
}

impl StartWord {
    /// Parse a start word; "random" (or nothing) picks a random one per attempt
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let word = normalize(name);
        if word.is_empty() || word == "random" {
            Self::Random
        } else {
            Self::Fixed(word)
        }
    }
}

/// A successfully generated tree with generation statistics
#[derive(Debug, Clone)]
pub struct Generated {
    pub tree: AssociationTree,
    /// Attempts used, including the successful one
    pub attempts: usize,
    pub duration: Duration,
}

/// Tree generator over an association source
pub struct Generator<'a, A: AssociationSource> {
    source: &'a A,
    config: GeneratorConfig,
}

impl<'a, A: AssociationSource> Generator<'a, A> {
    /// Create a new generator
    ///
    /// # Parameters
    /// - `source`: Association table to draw words from
    /// - `config`: Difficulty, exclusions and retry policy
    pub const fn new(source: &'a A, config: GeneratorConfig) -> Self {
        Self { source, config }
    }

    #[inline]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    #[inline]
    pub const fn source(&self) -> &'a A {
        self.source
    }

    /// Candidate words for expanding `word`, before sampling
    ///
    /// Both directions are filtered against `excluded` and the configured
    /// exclusions. Easy mode keeps only the head of each list. The result is
    /// deduplicated on variant-folded spelling, keeping first occurrences, so
    /// `ёж` and `еж` never both make it into the pool.
    pub fn candidate_pool(&self, word: &str, excluded: &FxHashSet<String>) -> Vec<&'a str> {
        let associations = self.source.lookup(word);

        let mut forward = filter_candidates(&associations.forward, word, excluded);
        let mut backward = filter_candidates(&associations.backward, word, excluded);
        let allowed = |w: &&str| !self.config.excluded.contains(fold_variants(w).as_str());
        forward.retain(allowed);
        backward.retain(allowed);

        if self.config.difficulty == Difficulty::Easy {
            forward.truncate(self.config.easy_forward);
            backward.truncate(self.config.easy_backward);
        }

        let mut seen: FxHashSet<String> = FxHashSet::default();
        forward
            .into_iter()
            .chain(backward)
            .filter(|w| seen.insert(fold_variants(w)))
            .collect()
    }

    /// Sample `quantity` distinct associations of `word`
    ///
    /// # Errors
    /// Returns `GenerationError::PoolExhausted` if fewer than `quantity`
    /// candidates survive filtering.
    pub fn associate<R: Rng + ?Sized>(
        &self,
        word: &str,
        quantity: usize,
        excluded: &FxHashSet<String>,
        rng: &mut R,
    ) -> Result<Vec<String>, GenerationError> {
        let pool = self.candidate_pool(word, excluded);

        if pool.len() < quantity {
            return Err(GenerationError::PoolExhausted {
                word: word.to_string(),
                available: pool.len(),
                needed: quantity,
            });
        }

        Ok(pool
            .choose_multiple(rng, quantity)
            .map(|w| (*w).to_string())
            .collect())
    }

    /// Expand one word into its two children
    ///
    /// # Errors
    /// Returns `GenerationError::PoolExhausted` when fewer than two candidates remain.
    pub fn expand<R: Rng + ?Sized>(
        &self,
        word: &str,
        excluded: &FxHashSet<String>,
        rng: &mut R,
    ) -> Result<[String; BRANCHING], GenerationError> {
        let children = self.associate(word, BRANCHING, excluded, rng)?;
        <[String; BRANCHING]>::try_from(children).map_err(|children| {
            GenerationError::PoolExhausted {
                word: word.to_string(),
                available: children.len(),
                needed: BRANCHING,
            }
        })
    }

    /// Pick a start word uniformly from the source domain
    ///
    /// # Errors
    /// Returns `GenerationError::EmptySource` if the source has no words.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GenerationError> {
        let size = self.source.domain_size();
        if size == 0 {
            return Err(GenerationError::EmptySource);
        }
        self.source
            .domain_word(rng.random_range(0..size))
            .map(str::to_string)
            .ok_or(GenerationError::EmptySource)
    }

    /// A single whole-tree attempt
    ///
    /// # Errors
    /// Returns the first expansion failure; nothing from the attempt is kept.
    pub fn build_tree<R: Rng + ?Sized>(
        &self,
        steps: u32,
        start: &StartWord,
        rng: &mut R,
    ) -> Result<AssociationTree, GenerationError> {
        check_steps(steps)?;

        let root = match start {
            StartWord::Random => self.random_word(rng)?,
            StartWord::Fixed(word) => word.clone(),
        };

        let mut words: Vec<String> = Vec::with_capacity(word_count(steps));
        let mut excluded: FxHashSet<String> = FxHashSet::default();
        excluded.insert(fold_variants(&root));
        words.push(root);

        for i in 0..inner_count(steps) {
            let children = self.expand(&words[i], &excluded, rng)?;
            for child in children {
                excluded.insert(fold_variants(&child));
                words.push(child);
            }
        }

        Ok(AssociationTree::from_words(steps, words)?)
    }

    /// Generate a tree, retrying whole attempts until one succeeds
    ///
    /// Attempts are independent: a random start word is drawn again each time.
    ///
    /// # Errors
    /// Returns `GenerationError::Exhausted` when `max_attempts` is reached, and
    /// fails immediately on an empty source or invalid depth.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        steps: u32,
        start: &StartWord,
        rng: &mut R,
    ) -> Result<Generated, GenerationError> {
        check_steps(steps)?;
        let started = Instant::now();
        let mut attempts = 0;

        loop {
            attempts += 1;

            match self.build_tree(steps, start, rng) {
                Ok(tree) => {
                    let duration = started.elapsed();
                    info!(
                        "Built {steps}-step tree from '{}' in {attempts} attempts ({:.3} s)",
                        tree.root(),
                        duration.as_secs_f64()
                    );
                    return Ok(Generated {
                        tree,
                        attempts,
                        duration,
                    });
                }
                Err(err @ GenerationError::EmptySource) => return Err(err),
                Err(err) => debug!(
                    "Attempt {attempts} failed after {:.3} s: {err}",
                    started.elapsed().as_secs_f64()
                ),
            }

            if let Some(max) = self.config.max_attempts
                && attempts >= max
            {
                return Err(GenerationError::Exhausted { attempts });
            }
        }
    }
}
