//! # Question Core
//!
//! The engine of the twenty questions game. It reads the `noun_ontology` store,
//! routes the first answers through a fixed decision tree, and then picks the
//! yes/no question that best splits the nouns still in play.
//!
//! ## Core Components
//!
//! - **router**: Static binary tree that maps the opening answers to a bucket
//! - **candidates**: The set of nouns consistent with every answer so far
//! - **scorer**: Ranks category, property, and metadata-threshold questions
//! - **guess**: Renders questions and turns the final candidate set into an outcome
//! - **session**: Per-game state and the engine interface driving a round
//!
//! ## Round Flow
//!
//! ```text
//! Routing -> Scoring -> (Scoring ...) -> Guessing -> Finished(Win | Loss | Exhausted)
//! ```

pub mod candidates;
pub mod config;
pub mod error;
pub mod guess;
pub mod question;
pub mod router;
pub mod scorer;
pub mod session;

pub use candidates::*;
pub use config::*;
pub use error::*;
pub use guess::*;
pub use question::*;
pub use router::*;
pub use scorer::*;
pub use session::*;
