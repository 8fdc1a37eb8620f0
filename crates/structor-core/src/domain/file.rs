//! Per-file records produced while materializing a template.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::common::RelativePath;

/// One file to copy: where it lives in the template, and where it lands
/// relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTask {
    pub source: PathBuf,
    pub relative: RelativePath,
}

impl FileTask {
    pub fn new(template_root: &Path, relative: RelativePath) -> Self {
        Self {
            source: template_root.join(relative.as_path()),
            relative,
        }
    }

    /// Destination under `target_root`.
    pub fn destination(&self, target_root: &Path) -> PathBuf {
        target_root.join(self.relative.as_path())
    }
}

/// A file successfully written under the target directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedFile {
    /// Full destination path.
    pub path: PathBuf,
    /// Path relative to the project root.
    pub relative: RelativePath,
    /// Bytes written by the copy.
    pub size: u64,
}

impl CreatedFile {
    /// `<project>/<relative>`, the form shown to users.
    pub fn display_path(&self, project_name: &str) -> String {
        format!("{project_name}/{}", self.relative)
    }
}

/// A non-fatal placeholder-injection failure against a single file.
///
/// Deliberately not an error type: the run that produced it succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InjectionWarning {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for InjectionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not inject into {}: {}", self.path.display(), self.reason)
    }
}
