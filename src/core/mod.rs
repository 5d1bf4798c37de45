//! Core domain types for Olympiika
//!
//! Word normalization, the association tree, and its grid layout. Everything here
//! is pure and deterministic; randomness lives in the generator.

mod matrix;
mod tree;
mod word;

pub use matrix::{Matrix, Orientation, layout};
pub use tree::{AssociationTree, MAX_STEPS, TreeError, check_steps, inner_count, word_count};
pub use word::{
    LETTER_VARIANTS, char_prefix, fold_variants, is_blank, normalize, resolve_variants,
};
