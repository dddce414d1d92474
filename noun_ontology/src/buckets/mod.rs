//! Bucket index - coarse named groups of nouns picked by the initial router.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::OntologyError;
use crate::records::NounId;
use crate::store::parse_lines;

/// File extension of persisted bucket lists.
pub const BUCKET_FILE_EXTENSION: &str = "txt";

/// Bucket name -> nouns in that bucket.
#[derive(Debug, Clone, Default)]
pub struct BucketIndex {
    buckets: HashMap<String, Vec<NounId>>,
}

impl BucketIndex {
    /// Create an empty bucket index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a bucket.
    pub fn insert(&mut self, bucket: impl Into<String>, nouns: impl IntoIterator<Item = NounId>) {
        self.buckets.insert(bucket.into(), nouns.into_iter().collect());
    }

    /// Builder form of [`BucketIndex::insert`].
    pub fn with_bucket(
        mut self,
        bucket: impl Into<String>,
        nouns: impl IntoIterator<Item = NounId>,
    ) -> Self {
        self.insert(bucket, nouns);
        self
    }

    /// Nouns listed under a bucket. Unknown buckets are empty.
    pub fn nouns(&self, bucket: &str) -> &[NounId] {
        self.buckets.get(bucket).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// All bucket names, sorted.
    pub fn bucket_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.buckets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Load every `<bucket>.txt` file in a directory as one bucket, one noun per line.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, OntologyError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(OntologyError::NotADirectory(dir.to_path_buf()));
        }

        let mut index = Self::new();
        let entries = fs::read_dir(dir).map_err(|e| OntologyError::io(dir, e))?;

        for entry in entries {
            let path = entry.map_err(|e| OntologyError::io(dir, e))?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(BUCKET_FILE_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let content = fs::read_to_string(&path).map_err(|e| OntologyError::io(&path, e))?;
            let nouns: Vec<NounId> = parse_lines(&content).into_iter().map(NounId).collect();
            debug!(bucket = name, nouns = nouns.len(), "loaded bucket");
            index.insert(name, nouns);
        }

        Ok(index)
    }
}
