//! vowelgap-core — Word records, parsing, and the quiz state machine.
//!
//! This crate defines the data model, the word list parser, and the
//! headless quiz session that the rest of vowelgap builds on.

pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod parser;
pub mod quiz;
pub mod statistics;
pub mod traits;

pub use error::{LoadError, QuizError};
pub use model::{WordList, WordRecord};
pub use quiz::{QuizPhase, QuizSession, QuizView};
