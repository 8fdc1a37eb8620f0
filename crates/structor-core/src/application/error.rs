//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not name or
//! template rules. Those are `DomainError` from `crate::domain`.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running a scaffold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The target directory is already present. It is never touched.
    #[error("Project already exists at {}", path.display())]
    AlreadyExists { path: PathBuf },

    /// Copying the template tree failed; the target has been rolled back.
    #[error("Failed to copy {}{}: {reason}", path.display(), destination_suffix(destination.as_deref()))]
    CopyFailed {
        path: PathBuf,
        /// Where the file was being written, when the failure happened on a copy.
        destination: Option<PathBuf>,
        kind: io::ErrorKind,
        reason: String,
    },

    /// The templates root exists but could not be read.
    #[error("Templates directory {} is unreadable: {reason}", path.display())]
    TemplatesUnavailable { path: PathBuf, reason: String },

    /// Any other filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    pub(crate) fn copy_failed(path: &Path, err: &io::Error) -> Self {
        Self::CopyFailed {
            path: path.to_path_buf(),
            destination: None,
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn copy_to_failed(from: &Path, to: &Path, err: &io::Error) -> Self {
        Self::CopyFailed {
            path: from.to_path_buf(),
            destination: Some(to.to_path_buf()),
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn filesystem(path: &Path, operation: &str, err: &io::Error) -> Self {
        Self::Filesystem {
            path: path.to_path_buf(),
            reason: format!("Failed to {operation}: {err}"),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Existing directories are never overwritten".into(),
            ],
            Self::CopyFailed { kind, .. } => {
                let mut out = vec!["The partially created project was removed".into()];
                match kind {
                    io::ErrorKind::PermissionDenied => {
                        out.push("Check read permissions on the template and write permissions here".into())
                    }
                    io::ErrorKind::StorageFull => out.push("Free some disk space and retry".into()),
                    _ => out.push("Check the path above and retry".into()),
                }
                out
            }
            Self::TemplatesUnavailable { path, .. } => vec![
                format!("Cannot read {}", path.display()),
                "Check the --templates flag or templates.root in the config".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } => ErrorCategory::Conflict,
            Self::CopyFailed { .. } | Self::Filesystem { .. } => ErrorCategory::Io,
            Self::TemplatesUnavailable { .. } => ErrorCategory::NotFound,
        }
    }
}

fn destination_suffix(destination: Option<&Path>) -> String {
    destination
        .map(|to| format!(" to {}", to.display()))
        .unwrap_or_default()
}
