//! # Noun Ontology
//!
//! The read-only data layer of the twenty questions game. It holds every guessable
//! noun with its categories, properties, and numeric metadata, plus the bucket
//! index used by the initial router. This crate contains no question logic.

pub mod buckets;
pub mod error;
pub mod records;
pub mod store;

pub use buckets::*;
pub use error::*;
pub use records::*;
pub use store::*;
