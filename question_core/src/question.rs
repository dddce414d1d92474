//! Question shapes asked by the adaptive engine.

use noun_ontology::NounRecord;
use serde::{Deserialize, Serialize};

/// A yes/no question about the hidden noun.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Question {
    /// Does the noun belong to this category?
    Category(String),

    /// Does the noun have this property?
    Property(String),

    /// Is the noun's mean for this metric above the threshold?
    ///
    /// Thresholds are synthesized during scoring and kept exactly, since pruning
    /// compares against the same value.
    Metadata { metric: String, threshold: f64 },
}

impl Question {
    /// Create a category question.
    pub fn category(name: impl Into<String>) -> Self {
        Question::Category(name.into())
    }

    /// Create a property question.
    pub fn property(name: impl Into<String>) -> Self {
        Question::Property(name.into())
    }

    /// Create a metadata threshold question.
    pub fn metadata(metric: impl Into<String>, threshold: f64) -> Self {
        Question::Metadata {
            metric: metric.into(),
            threshold,
        }
    }

    /// Whether "yes" is the true answer for this record.
    ///
    /// A metric equal to the threshold, or missing, answers "no".
    pub fn holds_for(&self, record: &NounRecord) -> bool {
        match self {
            Question::Category(name) => record.has_category(name),
            Question::Property(name) => record.has_property(name),
            Question::Metadata { metric, threshold } => record
                .metric_mean(metric)
                .is_some_and(|mean| mean > *threshold),
        }
    }

    /// Short name of the question kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Question::Category(_) => "category",
            Question::Property(_) => "property",
            Question::Metadata { .. } => "metadata",
        }
    }
}

/// A question paired with its discrimination score (`yes * no`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredQuestion {
    pub score: u64,
    pub question: Question,
}

impl ScoredQuestion {
    pub fn new(score: u64, question: Question) -> Self {
        Self { score, question }
    }
}
