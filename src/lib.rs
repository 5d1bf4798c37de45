//! Olympiika
//!
//! A word-association puzzle. One start word is expanded, level by level, into a
//! complete binary tree of related words; the tree is laid out as a merged-cell
//! table and the player uncovers it word by word.
//!
//! # Quick Start
//!
//! ```rust
//! use olympiika::associations::PairTable;
//! use olympiika::core::Orientation;
//! use olympiika::game::{Feedback, GameSession};
//! use olympiika::generator::{Generator, GeneratorConfig};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let table = PairTable::embedded();
//! let generator = Generator::new(&table, GeneratorConfig::default());
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let mut session = GameSession::generate(&generator, 2, Orientation::RootFirst, &mut rng).unwrap();
//! let child = session.solution().get(0, 1).to_string();
//!
//! assert_eq!(session.submit(&child).feedback, Feedback::Accepted);
//! ```

// Core domain types
pub mod core;

// Association tables
pub mod associations;

// Tree generation
pub mod generator;

// Reveal/hint/reset state machine
pub mod game;

// Session persistence
pub mod store;

// Command implementations
pub mod commands;

// Board rendering and terminal output
pub mod output;

// Interactive TUI interface
pub mod interactive;
