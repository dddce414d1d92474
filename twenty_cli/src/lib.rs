//! # Twenty CLI
//!
//! Terminal front end for the twenty questions engine. It loads the ontology and
//! bucket files named by the configuration, reads the player's free-text
//! answers, and prints the engine's questions and guesses.

pub mod config;
pub mod game;
pub mod inspect;
pub mod prompt;

pub use config::*;
pub use game::*;
pub use inspect::*;
pub use prompt::*;
