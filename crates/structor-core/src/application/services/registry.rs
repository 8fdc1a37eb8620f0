//! Template Registry - discovery and lookup of templates.
//!
//! A template is any immediate subdirectory of the templates root. Nothing
//! is cached: every call looks at the filesystem again.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DomainError, Template},
    error::StructorResult,
};

/// Service for listing and resolving templates.
#[derive(Clone)]
pub struct TemplateRegistry {
    filesystem: Arc<dyn Filesystem>,
    root: PathBuf,
}

impl TemplateRegistry {
    /// Create a registry over `root`. The directory need not exist.
    pub fn new(filesystem: Arc<dyn Filesystem>, root: impl Into<PathBuf>) -> Self {
        Self {
            filesystem,
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of all templates, sorted and without duplicates.
    ///
    /// An absent templates root yields an empty list.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn list_templates(&self) -> StructorResult<Vec<String>> {
        if !self.filesystem.exists(&self.root) {
            debug!("templates root does not exist");
            return Ok(Vec::new());
        }

        let entries = self.filesystem.read_dir(&self.root).map_err(|e| {
            ApplicationError::TemplatesUnavailable {
                path: self.root.clone(),
                reason: e.to_string(),
            }
        })?;

        let mut names: Vec<String> = entries
            .into_iter()
            .filter(|e| e.is_dir)
            .map(|e| e.name)
            .collect();
        names.sort();
        names.dedup();

        debug!(count = names.len(), "templates discovered");
        Ok(names)
    }

    /// Resolve `name` case-insensitively.
    ///
    /// An exact-case match wins over other case variants; otherwise the
    /// first match in sorted order is used.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn resolve(&self, name: &str) -> StructorResult<Template> {
        let available = self.list_templates()?;
        let key = Template::lookup_key(name);

        let found = available
            .iter()
            .find(|n| n.as_str() == name)
            .or_else(|| available.iter().find(|n| Template::lookup_key(n) == key))
            .cloned();

        let Some(found) = found else {
            return Err(DomainError::TemplateNotFound {
                name: name.to_string(),
                available,
            }
            .into());
        };

        let path = self.root.join(&found);
        let entries = self
            .filesystem
            .read_dir(&path)
            .map_err(|e| ApplicationError::TemplatesUnavailable {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        if entries.is_empty() {
            return Err(DomainError::TemplateEmpty { name: found, path }.into());
        }

        debug!(template = %found, "template resolved");
        Ok(Template::new(found, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{DirEntry, MockFilesystem};
    use crate::error::StructorError;
    use std::io;

    const ROOT: &str = "/templates";

    fn registry(mock: MockFilesystem) -> TemplateRegistry {
        TemplateRegistry::new(Arc::new(mock), ROOT)
    }

    /// A root holding the given directories, each with one file, plus a
    /// stray top-level file.
    fn populated(dirs: &'static [&'static str]) -> MockFilesystem {
        let mut mock = MockFilesystem::new();
        mock.expect_exists().returning(|_| true);
        mock.expect_read_dir().returning(move |p| {
            if p == Path::new(ROOT) {
                let mut entries: Vec<_> = dirs.iter().map(|d| DirEntry::dir(*d)).collect();
                entries.push(DirEntry::file("README.md"));
                Ok(entries)
            } else if p.ends_with("empty") {
                Ok(vec![])
            } else {
                Ok(vec![DirEntry::file("index.js")])
            }
        });
        mock
    }

    #[test]
    fn absent_root_lists_nothing() {
        let mut mock = MockFilesystem::new();
        mock.expect_exists().returning(|_| false);
        mock.expect_read_dir().never();

        assert!(registry(mock).list_templates().unwrap().is_empty());
    }

    #[test]
    fn list_is_sorted_dirs_only() {
        let names = registry(populated(&["web", "cli", "api"]))
            .list_templates()
            .unwrap();
        assert_eq!(names, ["api", "cli", "web"]);
    }

    #[test]
    fn list_has_no_duplicates() {
        let names = registry(populated(&["web", "web", "cli"]))
            .list_templates()
            .unwrap();
        assert_eq!(names, ["cli", "web"]);
    }

    #[test]
    fn unreadable_root_is_an_error() {
        let mut mock = MockFilesystem::new();
        mock.expect_exists().returning(|_| true);
        mock.expect_read_dir()
            .returning(|_| Err(io::Error::from(io::ErrorKind::PermissionDenied)));

        assert!(matches!(
            registry(mock).list_templates(),
            Err(StructorError::Application(
                ApplicationError::TemplatesUnavailable { .. }
            ))
        ));
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let template = registry(populated(&["Express", "cli"]))
            .resolve("EXPRESS")
            .unwrap();
        assert_eq!(template.name(), "Express");
        assert_eq!(template.root(), Path::new("/templates/Express"));
    }

    #[test]
    fn resolve_prefers_exact_case() {
        let template = registry(populated(&["Web", "web"])).resolve("web").unwrap();
        assert_eq!(template.name(), "web");
    }

    #[test]
    fn resolve_unknown_reports_available() {
        let err = registry(populated(&["cli", "web"]))
            .resolve("desktop")
            .unwrap_err();
        assert_eq!(
            err,
            StructorError::Domain(DomainError::TemplateNotFound {
                name: "desktop".into(),
                available: vec!["cli".into(), "web".into()],
            })
        );
    }

    #[test]
    fn resolve_empty_template_fails() {
        let err = registry(populated(&["empty"])).resolve("empty").unwrap_err();
        assert!(matches!(
            err,
            StructorError::Domain(DomainError::TemplateEmpty { .. })
        ));
    }
}
