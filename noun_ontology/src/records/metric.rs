//! Numeric metadata attached to nouns.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary statistics of one metric for one noun.
///
/// Only `mean` takes part in question selection. Any other statistics present
/// in the source data are carried along untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricSummary {
    #[serde(default)]
    pub mean: Option<f64>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl MetricSummary {
    /// Create a summary holding only a mean.
    pub fn with_mean(mean: f64) -> Self {
        Self {
            mean: Some(mean),
            extra: BTreeMap::new(),
        }
    }

    /// The mean, unless it is missing or not a finite number.
    pub fn usable_mean(&self) -> Option<f64> {
        self.mean.filter(|m| m.is_finite())
    }
}
