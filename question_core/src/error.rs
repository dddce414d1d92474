//! Engine error taxonomy.

use crate::question::Question;
use crate::session::Phase;

/// Conditions raised by the engine.
///
/// `NoDiscriminatingQuestion` and `NoCandidates` are control signals that send
/// the session to guessing; they never reach the player as failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("the ontology holds no nouns")]
    EmptyOntology,

    #[error("bucket '{bucket}' has no known nouns")]
    EmptyBucket { bucket: String },

    #[error("no question splits the remaining candidates")]
    NoDiscriminatingQuestion,

    #[error("no candidates remain")]
    NoCandidates,

    #[error("question budget {budget} is below the {depth} opening questions of the router")]
    BudgetBelowRouterDepth { budget: u32, depth: usize },

    #[error("no question is waiting for an answer")]
    NoPendingQuestion,

    #[error("answer given to {actual:?}, but {expected:?} was asked")]
    UnexpectedQuestion { expected: Question, actual: Question },

    #[error(transparent)]
    Router(#[from] RouterError),

    #[error("operation requires phase {expected:?}, session is in {actual:?}")]
    InvalidPhase { expected: Phase, actual: Phase },
}

/// Failures of the initial routing tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("invalid routing tree: {0}")]
    InvalidTree(String),

    #[error("answers ran out after {answered} questions, before reaching a bucket")]
    IncompleteAnswers { answered: usize },

    #[error("bucket reached after {consumed} answers, {extra} answers left over")]
    UnusedAnswers { consumed: usize, extra: usize },
}
