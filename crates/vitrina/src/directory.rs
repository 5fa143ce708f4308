//! JSON-backed directory of region records.
//!
//! The storefront itself resolves regions from the database per request; this
//! directory is the file-backed equivalent used by CLI tooling, seeds, and
//! tests. Loading a file replaces all previously held records.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::{fs, io};

use thiserror::Error;

use crate::context::RegionContext;
use crate::declension::DEFAULT_REGION;

/// Errors that occur while loading region records.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading the regions file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed JSON or records not matching the expected shape.
    #[error("{path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// A set of [`RegionContext`] records keyed by region code.
#[derive(Debug, Default)]
pub struct RegionDirectory {
    regions: HashMap<String, RegionContext>,
}

impl RegionDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load records from a JSON array file, replacing any current contents.
    /// Returns the number of records loaded.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.load_str_internal(&content, path)
    }

    /// Load records from a JSON array string, replacing any current contents.
    pub fn load_str(&mut self, content: &str) -> Result<usize, LoadError> {
        self.load_str_internal(content, Path::new("<string>"))
    }

    fn load_str_internal(&mut self, content: &str, path: &Path) -> Result<usize, LoadError> {
        let records: Vec<RegionContext> =
            serde_json::from_str(content).map_err(|e| LoadError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        self.regions.clear();
        let count = records.len();
        for record in records {
            self.regions.insert(record.code.clone(), record);
        }
        Ok(count)
    }

    /// Add or replace a single record.
    pub fn insert(&mut self, region: RegionContext) {
        self.regions.insert(region.code.clone(), region);
    }

    /// Record for an exact code, if present.
    pub fn get(&self, code: &str) -> Option<&RegionContext> {
        self.regions.get(code)
    }

    /// Record for `code`, falling back to the `default` record for unknown
    /// codes. `None` only when no default record is loaded either.
    pub fn get_or_default(&self, code: &str) -> Option<&RegionContext> {
        self.regions
            .get(code)
            .or_else(|| self.regions.get(DEFAULT_REGION))
    }

    /// All loaded region codes, in no particular order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
