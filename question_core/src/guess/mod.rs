//! Guess Formulator - question text, final guesses, and game outcomes.

use noun_ontology::NounId;
use rand::seq::IteratorRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::candidates::CandidateSet;
use crate::question::Question;

/// How a game ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Exactly one candidate was left and the engine named it.
    Win(NounId),

    /// No noun matches every answer; the engine has nothing to guess.
    Loss,

    /// Several candidates were left; the engine guessed one of them at random.
    Exhausted { guess: NounId, remaining: usize },
}

impl Outcome {
    /// The noun guessed, if any.
    pub fn guess(&self) -> Option<&NounId> {
        match self {
            Outcome::Win(noun) => Some(noun),
            Outcome::Exhausted { guess, .. } => Some(guess),
            Outcome::Loss => None,
        }
    }
}

/// Text of a question as shown to the player.
pub fn render_question(question: &Question) -> String {
    match question {
        Question::Category(name) => format!("Is it a kind of {}?", name),
        Question::Property(name) => format!("Is it {}?", name),
        Question::Metadata { metric, threshold } => {
            format!("Is its {} high, e.g. more than {:.2}?", metric, threshold)
        }
    }
}

/// Text of the final guess or concession.
pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Win(noun) => format!("Is it {}?", noun),
        Outcome::Exhausted { guess, remaining } => {
            format!("I'm out of questions. Out of {} options, my guess is: {}?", remaining, guess)
        }
        Outcome::Loss => "I give up - nothing I know matches your answers. You win!".to_string(),
    }
}

/// Pick the noun to guess: the only one left, or a uniformly random one.
pub fn choose_guess<R: Rng + ?Sized>(candidates: &CandidateSet, rng: &mut R) -> Option<NounId> {
    match candidates.single() {
        Some(noun) => Some(noun.clone()),
        None => candidates.iter().choose(rng).cloned(),
    }
}

/// Resolve the final outcome for a candidate set.
pub fn conclude<R: Rng + ?Sized>(candidates: &CandidateSet, rng: &mut R) -> Outcome {
    match (candidates.len(), choose_guess(candidates, rng)) {
        (1, Some(noun)) => Outcome::Win(noun),
        (remaining, Some(guess)) => Outcome::Exhausted { guess, remaining },
        (_, None) => Outcome::Loss,
    }
}
