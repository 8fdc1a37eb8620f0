// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may retry with the same request)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{raw}': {reason}")]
    InvalidName {
        raw: String,
        reason: String,
        /// The sanitized form, when one exists and differs from `raw`.
        suggestion: Option<String>,
    },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Template '{name}' not found")]
    TemplateNotFound {
        name: String,
        /// Names that were discovered at lookup time.
        available: Vec<String>,
    },

    #[error("Template '{name}' is empty: {}", path.display())]
    TemplateEmpty { name: String, path: PathBuf },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { suggestion, .. } => {
                let mut out = vec![
                    "Project names cannot contain any of: < > : \" / \\ | ? *".into(),
                    "Leading and trailing whitespace is not allowed".into(),
                ];
                if let Some(s) = suggestion {
                    out.push(format!("Did you mean '{s}'?"));
                }
                out
            }
            Self::TemplateNotFound { available, .. } if available.is_empty() => vec![
                "No templates were found in the templates directory".into(),
                "Point --templates (or templates.root in the config) at a template folder".into(),
            ],
            Self::TemplateNotFound { available, .. } => vec![
                format!("Available templates: {}", available.join(", ")),
                "Try: structor list".into(),
            ],
            Self::TemplateEmpty { path, .. } => vec![
                format!("'{}' contains no files or folders", path.display()),
                "Add files to the template or choose a different one".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::TemplateNotFound { .. } | Self::TemplateEmpty { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
