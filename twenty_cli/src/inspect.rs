//! `inspect` subcommand - a summary of the loaded game data.

use anyhow::{Context, Result};
use noun_ontology::{load_universe, BucketIndex, Ontology};
use question_core::{CandidateSet, RoutingTree};
use std::collections::BTreeSet;
use std::path::Path;

/// Coverage of one router bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSummary {
    pub name: String,
    /// Nouns that exist in the ontology.
    pub known: usize,
    /// Nouns listed in the bucket file but missing from the ontology.
    pub unknown: usize,
}

/// A universe file compared with what the ontology actually holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniverseCheck {
    pub name: String,
    /// Entries in the file.
    pub listed: usize,
    /// Listed entries the ontology never mentions.
    pub missing: Vec<String>,
    /// Ontology entries the file leaves out.
    pub unlisted: Vec<String>,
}

impl UniverseCheck {
    pub fn compare(name: impl Into<String>, listed: &[String], known: &[String]) -> Self {
        let listed_set: BTreeSet<&str> = listed.iter().map(String::as_str).collect();
        let known_set: BTreeSet<&str> = known.iter().map(String::as_str).collect();

        Self {
            name: name.into(),
            listed: listed_set.len(),
            missing: listed_set
                .difference(&known_set)
                .map(|s| s.to_string())
                .collect(),
            unlisted: known_set
                .difference(&listed_set)
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.missing.is_empty() && self.unlisted.is_empty()
    }
}

/// Check a noun universe file against the ontology's nouns.
pub fn check_noun_universe(ontology: &Ontology, path: &Path) -> Result<UniverseCheck> {
    let listed = load_universe(path)
        .with_context(|| format!("failed to load noun universe {}", path.display()))?;
    Ok(UniverseCheck::compare("nouns", &listed, &ontology.noun_universe()))
}

/// Check a property universe file against the properties used in the ontology.
pub fn check_property_universe(ontology: &Ontology, path: &Path) -> Result<UniverseCheck> {
    let listed = load_universe(path)
        .with_context(|| format!("failed to load property universe {}", path.display()))?;
    Ok(UniverseCheck::compare(
        "properties",
        &listed,
        &ontology.property_universe(),
    ))
}

/// Overview of an ontology and its buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSummary {
    pub nouns: usize,
    pub categories: Vec<String>,
    pub properties: Vec<String>,
    pub metrics: Vec<String>,
    /// One entry per router leaf, in tree order.
    pub buckets: Vec<BucketSummary>,
    /// Bucket files that no router leaf points to.
    pub unrouted_buckets: Vec<String>,
    pub universes: Vec<UniverseCheck>,
}

impl DataSummary {
    pub fn with_universe(mut self, check: UniverseCheck) -> Self {
        self.universes.push(check);
        self
    }

    /// Router leaves that would raise an empty-bucket condition.
    pub fn empty_buckets(&self) -> Vec<&str> {
        self.buckets
            .iter()
            .filter(|b| b.known == 0)
            .map(|b| b.name.as_str())
            .collect()
    }

    /// Human-readable report.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("nouns:      {}\n", self.nouns));
        out.push_str(&format!("categories: {}\n", self.categories.len()));
        out.push_str(&format!("properties: {}\n", self.properties.len()));
        out.push_str(&format!("metrics:    {}\n", self.metrics.join(", ")));

        out.push_str("buckets:\n");
        for bucket in &self.buckets {
            out.push_str(&format!("  {:<16} {:>5} nouns", bucket.name, bucket.known));
            if bucket.unknown > 0 {
                out.push_str(&format!(" ({} not in ontology)", bucket.unknown));
            }
            out.push('\n');
        }
        if !self.unrouted_buckets.is_empty() {
            out.push_str(&format!("unrouted:   {}\n", self.unrouted_buckets.join(", ")));
        }

        for universe in &self.universes {
            out.push_str(&format!(
                "{} universe: {} listed\n",
                universe.name, universe.listed
            ));
            if !universe.missing.is_empty() {
                out.push_str(&format!(
                    "  not in ontology: {}\n",
                    universe.missing.join(", ")
                ));
            }
            if !universe.unlisted.is_empty() {
                out.push_str(&format!("  not listed:      {}\n", universe.unlisted.join(", ")));
            }
        }
        out
    }
}

/// Summarize the data the engine would play with.
pub fn summarize(ontology: &Ontology, buckets: &BucketIndex, tree: &RoutingTree) -> DataSummary {
    let leaves = tree.leaves();

    let bucket_summaries = leaves
        .iter()
        .map(|leaf| {
            let (known, unknown) = CandidateSet::from_bucket(buckets.nouns(leaf), ontology);
            BucketSummary {
                name: leaf.to_string(),
                known: known.len(),
                unknown: unknown.len(),
            }
        })
        .collect();

    let unrouted_buckets = buckets
        .bucket_names()
        .into_iter()
        .filter(|name| !leaves.iter().any(|leaf| leaf == name))
        .map(str::to_string)
        .collect();

    DataSummary {
        nouns: ontology.len(),
        categories: ontology.category_universe(),
        properties: ontology.property_universe(),
        metrics: ontology.metric_universe(),
        buckets: bucket_summaries,
        unrouted_buckets,
        universes: Vec::new(),
    }
}
