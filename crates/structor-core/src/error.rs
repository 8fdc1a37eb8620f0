//! Unified error handling for Structor Core.
//!
//! Wraps domain and application errors behind one type with categories
//! and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Structor Core operations.
///
/// Every variant is a terminal failure of the call that returned it.
/// Non-fatal injection problems travel separately as
/// [`InjectionWarning`](crate::domain::InjectionWarning)s.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructorError {
    /// Errors from the domain layer (invalid names, unknown templates).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (conflicts, I/O).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl StructorError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    Io,
}

/// Convenient result type alias.
pub type StructorResult<T> = Result<T, StructorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn categories_follow_the_wrapped_error() {
        let exists: StructorError = ApplicationError::AlreadyExists {
            path: PathBuf::from("demo"),
        }
        .into();
        assert_eq!(exists.category(), ErrorCategory::Conflict);

        let missing: StructorError = DomainError::TemplateNotFound {
            name: "web".into(),
            available: vec![],
        }
        .into();
        assert_eq!(missing.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn display_is_transparent() {
        let err: StructorError = DomainError::TemplateNotFound {
            name: "web".into(),
            available: vec!["cli".into()],
        }
        .into();
        assert_eq!(err.to_string(), "Template 'web' not found");
        assert!(err.suggestions().iter().any(|s| s.contains("cli")));
    }
}
