// crates/host/src/store.rs

use anyhow::Result;

use planshot_core::corpus::{CorpusRecord, ExampleCorpus};
use planshot_core::domain::Domain;
use planshot_core::index::ExampleIndex;
use planshot_core::types::Example;

/// Pure state: the loaded example pools and their selection index.
/// Built once at startup and read-only afterwards.
pub struct ExampleStore {
    index: ExampleIndex,
}

impl ExampleStore {
    /// Load the corpus from disk and build the index. A missing corpus file
    /// yields an empty store, not an error.
    pub fn load(corpus: &ExampleCorpus) -> Result<Self> {
        let records = corpus.load()?;
        Ok(Self::from_records(records))
    }

    /// Build a store straight from records (tests, preloaded corpora).
    pub fn from_records(records: Vec<CorpusRecord>) -> Self {
        Self {
            index: ExampleIndex::build(records),
        }
    }

    /// Top-k examples for a problem in a domain, best first, with scores.
    pub fn select(&self, domain: Domain, problem: &str, k: usize) -> Vec<(f64, &Example)> {
        self.index.select(domain, problem, k)
    }

    pub fn pool_len(&self, domain: Domain) -> usize {
        self.index.pool(domain).len()
    }

    /// Total number of loaded examples across both domains.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
