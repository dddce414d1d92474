//! Noun definitions for the ontology.

mod metric;

pub use metric::*;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Identifier of a guessable noun (its canonical name).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NounId(pub String);

impl NounId {
    /// Create a noun ID from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NounId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for NounId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for NounId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Attribute record of one noun.
///
/// Categories and properties are flat membership tags. A record missing any of
/// its keys deserializes with that attribute empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NounRecord {
    #[serde(default)]
    pub categories: BTreeSet<String>,

    #[serde(default)]
    pub properties: BTreeSet<String>,

    /// Metric name -> numeric summary.
    #[serde(default)]
    pub metadata: BTreeMap<String, MetricSummary>,
}

impl NounRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category to this record.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    /// Add a property to this record.
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.properties.insert(property.into());
        self
    }

    /// Add a metric with the given mean.
    pub fn with_metric(mut self, metric: impl Into<String>, mean: f64) -> Self {
        self.metadata.insert(metric.into(), MetricSummary::with_mean(mean));
        self
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    pub fn has_property(&self, property: &str) -> bool {
        self.properties.contains(property)
    }

    /// Mean of a metric, if the record carries a usable one.
    pub fn metric_mean(&self, metric: &str) -> Option<f64> {
        self.metadata.get(metric).and_then(MetricSummary::usable_mean)
    }
}
