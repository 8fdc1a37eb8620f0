//! Templates as discovered on disk.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// A named template backed by a directory tree.
///
/// Only the registry constructs these, after checking that the root exists
/// and has at least one entry. The tree itself is never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    name: String,
    root: PathBuf,
}

impl Template {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    /// Directory name as found on disk (original case).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Key used for case-insensitive lookup.
    pub fn lookup_key(name: &str) -> String {
        name.to_lowercase()
    }
}
