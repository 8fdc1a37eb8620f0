//! Project-name sanitizing.
//!
//! A project name becomes a single path component under the working
//! directory, so it must not carry characters that are reserved in file
//! names on any mainstream platform.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Characters stripped from a proposed project name.
pub const RESERVED_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Remove reserved characters, then trim surrounding whitespace.
///
/// Never fails. An empty result means the input had nothing usable and
/// must be rejected by the caller.
///
/// ```
/// use structor_core::domain::sanitize;
///
/// assert_eq!(sanitize("My:Proj*"), "MyProj");
/// assert_eq!(sanitize("   "), "");
/// ```
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !RESERVED_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// A validated, non-empty project name containing no reserved characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Accept `raw` only if sanitizing leaves it unchanged and non-empty.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let clean = sanitize(raw);
        if clean.is_empty() {
            return Err(empty_name(raw));
        }
        if clean != raw {
            return Err(DomainError::InvalidName {
                raw: raw.to_string(),
                reason: "contains reserved characters or surrounding whitespace".into(),
                suggestion: Some(clean),
            });
        }
        Ok(Self(clean))
    }

    /// Accept the sanitized form of `raw`, failing only if it is empty.
    pub fn sanitized(raw: &str) -> Result<Self, DomainError> {
        let clean = sanitize(raw);
        if clean.is_empty() {
            return Err(empty_name(raw));
        }
        Ok(Self(clean))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn empty_name(raw: &str) -> DomainError {
    DomainError::InvalidName {
        raw: raw.to_string(),
        reason: "name is empty after removing reserved characters".into(),
        suggestion: None,
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
