//! Puzzle tree generation
//!
//! Turns one word into a tree of associations using an [`AssociationSource`]
//! and a [`GeneratorConfig`].
//!
//! [`AssociationSource`]: crate::associations::AssociationSource

mod config;
mod engine;
pub mod filter;

pub use config::{DEFAULT_MAX_ATTEMPTS, Difficulty, GeneratorConfig};
pub use engine::{GenerationError, Generated, Generator, StartWord};
pub use filter::{filter_candidates, is_blocked};
