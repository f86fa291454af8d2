// crates/core/src/corpus.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default location of the example corpus, next to the binary's working dir.
pub const EXAMPLES_PATH_DEFAULT: &str = "Examples.json";

/// On-disk representation of one corpus entry.
///
/// The corpus is a single JSON array of these records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusRecord {
    /// Full transcript the problem is sliced from; also decides the domain.
    pub scenario_context: String,
    /// Reference plan, one action line per entry.
    pub target_action_sequence: Vec<String>,
}

/// Loader for the few-shot example corpus.
pub struct ExampleCorpus {
    path: PathBuf,
}

impl ExampleCorpus {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Resolve the corpus path from PLANSHOT_EXAMPLES, defaulting to
    /// `Examples.json`.
    pub fn from_env() -> Self {
        let path =
            std::env::var("PLANSHOT_EXAMPLES").unwrap_or_else(|_| EXAMPLES_PATH_DEFAULT.into());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records. A missing file yields an empty corpus; a file that
    /// exists but does not parse is an error.
    pub fn load(&self) -> Result<Vec<CorpusRecord>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(err)
                    .context(format!("failed to read example corpus at {:?}", self.path));
            }
        };
        parse_records(&data)
            .with_context(|| format!("failed to parse example corpus at {:?}", self.path))
    }
}

/// Parse a corpus JSON array. Split out of `load` so the format can be
/// tested without touching disk.
pub fn parse_records(data: &str) -> Result<Vec<CorpusRecord>> {
    serde_json::from_str(data).context("corpus is not a JSON array of records")
}
