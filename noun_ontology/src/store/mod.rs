//! Ontology store - the read-only mapping from noun to attribute record.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::OntologyError;
use crate::records::{NounId, NounRecord};

/// All guessable nouns and their records.
///
/// Built once from persisted data and then only read. Sessions share it by
/// reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ontology {
    records: HashMap<NounId, NounRecord>,
}

impl Ontology {
    /// Create an ontology from `(noun, record)` pairs.
    pub fn from_records(records: impl IntoIterator<Item = (NounId, NounRecord)>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// Parse the persisted format: a JSON object mapping noun names to records.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load an ontology JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, OntologyError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| OntologyError::io(path, e))?;
        let ontology = Self::from_json_str(&content).map_err(|source| OntologyError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), nouns = ontology.len(), "loaded ontology");
        Ok(ontology)
    }

    /// Get the record of a noun.
    pub fn get(&self, noun: &NounId) -> Option<&NounRecord> {
        self.records.get(noun)
    }

    pub fn contains(&self, noun: &NounId) -> bool {
        self.records.contains_key(noun)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&NounId, &NounRecord)> {
        self.records.iter()
    }

    /// All noun IDs, sorted.
    pub fn noun_ids(&self) -> Vec<&NounId> {
        let mut ids: Vec<_> = self.records.keys().collect();
        ids.sort();
        ids
    }

    /// Names of all nouns, sorted.
    pub fn noun_universe(&self) -> Vec<String> {
        self.noun_ids().into_iter().map(|id| id.0.clone()).collect()
    }

    /// Every property carried by at least one noun, sorted.
    pub fn property_universe(&self) -> Vec<String> {
        self.collect_sorted(|r| r.properties.iter().cloned().collect())
    }

    /// Every category carried by at least one noun, sorted.
    pub fn category_universe(&self) -> Vec<String> {
        self.collect_sorted(|r| r.categories.iter().cloned().collect())
    }

    /// Every metric with a usable mean on at least one noun, sorted.
    pub fn metric_universe(&self) -> Vec<String> {
        self.collect_sorted(|r| {
            r.metadata
                .iter()
                .filter(|(_, summary)| summary.usable_mean().is_some())
                .map(|(name, _)| name.clone())
                .collect()
        })
    }

    fn collect_sorted<F>(&self, extract: F) -> Vec<String>
    where
        F: Fn(&NounRecord) -> Vec<String>,
    {
        let all: BTreeSet<String> = self.records.values().flat_map(extract).collect();
        all.into_iter().collect()
    }
}

/// Read a line-per-entry universe file. Blank lines are skipped and entries trimmed.
pub fn load_universe(path: impl AsRef<Path>) -> Result<Vec<String>, OntologyError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| OntologyError::io(path, e))?;
    Ok(parse_lines(&content))
}

pub(crate) fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
