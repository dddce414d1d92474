//! Candidate Set Manager - nouns still consistent with every answer.

use noun_ontology::{NounId, NounRecord, Ontology};
use std::collections::BTreeSet;

use crate::question::Question;

/// The nouns still in play, kept in sorted order.
///
/// Seeded once from a bucket and only ever shrunk afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateSet {
    members: BTreeSet<NounId>,
}

impl CandidateSet {
    /// Create an empty candidate set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from bucket nouns, keeping only nouns the ontology knows.
    ///
    /// Returns the set and the nouns that were dropped.
    pub fn from_bucket<'n>(
        nouns: impl IntoIterator<Item = &'n NounId>,
        ontology: &Ontology,
    ) -> (Self, Vec<NounId>) {
        let mut members = BTreeSet::new();
        let mut unknown = Vec::new();

        for noun in nouns {
            if ontology.contains(noun) {
                members.insert(noun.clone());
            } else {
                unknown.push(noun.clone());
            }
        }

        (Self { members }, unknown)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, noun: &NounId) -> bool {
        self.members.contains(noun)
    }

    /// The only member, if exactly one remains.
    pub fn single(&self) -> Option<&NounId> {
        if self.members.len() == 1 {
            self.members.iter().next()
        } else {
            None
        }
    }

    /// Members in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &NounId> {
        self.members.iter()
    }

    /// Members paired with their records, in sorted order.
    ///
    /// A member missing from the ontology is paired with an empty record.
    pub fn records<'a>(
        &'a self,
        ontology: &'a Ontology,
    ) -> impl Iterator<Item = (&'a NounId, &'a NounRecord)> + 'a {
        self.members
            .iter()
            .map(move |noun| (noun, ontology.get(noun).unwrap_or(&EMPTY_RECORD)))
    }
}

impl FromIterator<NounId> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = NounId>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

static EMPTY_RECORD: NounRecord = NounRecord {
    categories: BTreeSet::new(),
    properties: BTreeSet::new(),
    metadata: std::collections::BTreeMap::new(),
};

/// Keep the candidates whose true answer to `question` equals `answer`.
///
/// Pure filter: the result is always a subset of `candidates`, possibly empty.
pub fn prune(
    candidates: &CandidateSet,
    ontology: &Ontology,
    question: &Question,
    answer: bool,
) -> CandidateSet {
    candidates
        .records(ontology)
        .filter(|(_, record)| question.holds_for(record) == answer)
        .map(|(noun, _)| noun.clone())
        .collect()
}
