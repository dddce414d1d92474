//! Question Scorer - ranks candidate questions by how evenly they split the pool.
//!
//! Three passes run over the current candidates:
//! 1. **Category**: one question per category seen on any candidate
//! 2. **Property**: one question per property seen on any candidate
//! 3. **Metadata**: one threshold question per metric, at the mean of the candidates' means
//!
//! Every question scores `yes * no`, the product of the two sides of the split.
//! Names are visited in lexicographic order and the first maximum wins, so equal
//! scores always resolve to the same question. Across passes the precedence is
//! category, then property, then metadata.

use noun_ontology::{NounRecord, Ontology};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

use crate::candidates::CandidateSet;
use crate::error::EngineError;
use crate::question::{Question, ScoredQuestion};

/// Discrimination score of a split.
pub fn split_score(yes: usize, total: usize) -> u64 {
    let no = total.saturating_sub(yes);
    yes as u64 * no as u64
}

/// Best category question, or `None` if no candidate has a category.
pub fn category_pass(candidates: &CandidateSet, ontology: &Ontology) -> Option<ScoredQuestion> {
    membership_pass(candidates, ontology, |r| &r.categories, Question::Category)
}

/// Best property question, or `None` if no candidate has a property.
pub fn property_pass(candidates: &CandidateSet, ontology: &Ontology) -> Option<ScoredQuestion> {
    membership_pass(candidates, ontology, |r| &r.properties, Question::Property)
}

fn membership_pass<F>(
    candidates: &CandidateSet,
    ontology: &Ontology,
    tags: F,
    make: fn(String) -> Question,
) -> Option<ScoredQuestion>
where
    F: Fn(&NounRecord) -> &BTreeSet<String>,
{
    let mut yes_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for (_, record) in candidates.records(ontology) {
        for tag in tags(record) {
            *yes_counts.entry(tag.as_str()).or_default() += 1;
        }
    }

    let total = candidates.len();
    let mut best: Option<(u64, &str)> = None;
    for (tag, yes) in yes_counts {
        let score = split_score(yes, total);
        if best.map_or(true, |(top, _)| score > top) {
            best = Some((score, tag));
        }
    }

    best.map(|(score, tag)| ScoredQuestion::new(score, make(tag.to_string())))
}

/// Threshold used for a metric: the mean of the means of candidates carrying it.
pub fn metric_threshold(candidates: &CandidateSet, ontology: &Ontology, metric: &str) -> Option<f64> {
    let (sum, count) = candidates
        .records(ontology)
        .filter_map(|(_, record)| record.metric_mean(metric))
        .fold((0.0, 0usize), |(sum, count), mean| (sum + mean, count + 1));

    (count > 0).then(|| sum / count as f64)
}

/// Best metadata threshold question, or `None` if no candidate has a usable metric.
///
/// Scoring counts a candidate at the threshold as "yes", while pruning treats it
/// as "no". Candidates without the metric count as "no".
pub fn metadata_pass(candidates: &CandidateSet, ontology: &Ontology) -> Option<ScoredQuestion> {
    let metrics: BTreeSet<&str> = candidates
        .records(ontology)
        .flat_map(|(_, record)| {
            record
                .metadata
                .iter()
                .filter(|(_, summary)| summary.usable_mean().is_some())
                .map(|(metric, _)| metric.as_str())
        })
        .collect();

    let total = candidates.len();
    let mut best: Option<ScoredQuestion> = None;
    for metric in metrics {
        let Some(threshold) = metric_threshold(candidates, ontology, metric) else {
            continue;
        };
        let yes = candidates
            .records(ontology)
            .filter(|(_, record)| record.metric_mean(metric).is_some_and(|mean| mean >= threshold))
            .count();
        let score = split_score(yes, total);

        if best.as_ref().map_or(true, |top| score > top.score) {
            best = Some(ScoredQuestion::new(score, Question::metadata(metric, threshold)));
        }
    }

    best
}

/// The highest-scoring question over all passes.
///
/// Fails with [`EngineError::NoDiscriminatingQuestion`] when no question splits
/// the candidates at all.
pub fn best_question(
    candidates: &CandidateSet,
    ontology: &Ontology,
) -> Result<ScoredQuestion, EngineError> {
    let passes = [
        category_pass(candidates, ontology),
        property_pass(candidates, ontology),
        metadata_pass(candidates, ontology),
    ];

    let mut best: Option<ScoredQuestion> = None;
    for scored in passes.into_iter().flatten() {
        trace!(kind = scored.question.kind(), score = scored.score, "pass winner");
        if best.as_ref().map_or(true, |top| scored.score > top.score) {
            best = Some(scored);
        }
    }

    match best {
        Some(scored) if scored.score > 0 => {
            debug!(
                question = ?scored.question,
                score = scored.score,
                candidates = candidates.len(),
                "selected question"
            );
            Ok(scored)
        }
        _ => Err(EngineError::NoDiscriminatingQuestion),
    }
}
