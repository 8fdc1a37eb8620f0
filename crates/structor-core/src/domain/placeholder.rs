//! The `{{project_name}}` substitution contract.
//!
//! Exact, case-sensitive, global replace of a single literal token. There is
//! no escaping and no other syntax.

use std::collections::BTreeSet;

use crate::domain::common::RelativePath;

/// The literal token replaced with the project name.
pub const PLACEHOLDER_TOKEN: &str = "{{project_name}}";

/// Extensions eligible for injection when nothing else is configured.
pub const DEFAULT_TEXT_EXTENSIONS: [&str; 7] = ["md", "txt", "py", "html", "js", "css", "json"];

/// Which copied files are opened as text for substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionPolicy {
    extensions: BTreeSet<String>,
}

impl InjectionPolicy {
    /// Build a policy from extensions, with or without a leading dot, in any case.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    pub fn is_eligible(&self, path: &RelativePath) -> bool {
        path.extension()
            .is_some_and(|ext| self.extensions.contains(&ext))
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

impl Default for InjectionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT_EXTENSIONS)
    }
}

/// Replace every token occurrence in `text`.
///
/// Returns `None` when the token is absent so callers can skip the rewrite.
pub fn substitute(text: &str, project_name: &str) -> Option<String> {
    text.contains(PLACEHOLDER_TOKEN)
        .then(|| text.replace(PLACEHOLDER_TOKEN, project_name))
}
