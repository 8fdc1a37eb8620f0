use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

/// A filesystem path guaranteed to stay **inside** the directory it is
/// joined onto.
///
/// Invariant: not absolute, no prefix, root, or `..` components. Template
/// walks only ever produce such paths, and the copier joins them under the
/// target directory, so a violation would write outside the project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if the path could escape its base.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(is_contained(&path), "RelativePath must stay inside its base: {path:?}");
        Self(path)
    }

    /// Non-panicking variant of [`RelativePath::new`].
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, PathBuf> {
        let path = path.into();
        if is_contained(&path) {
            Ok(Self(path))
        } else {
            Err(path)
        }
    }

    /// Borrow as a `Path`.
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Lower-cased extension, without the dot.
    pub fn extension(&self) -> Option<String> {
        self.0
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
    }

    /// Path rendered with `/` separators on every platform.
    pub fn to_slash_string(&self) -> String {
        self.0
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn is_contained(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        RelativePath::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_slash_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_accepts_relative() {
        let p = RelativePath::new("src/main.rs");
        assert_eq!(p.as_path(), Path::new("src/main.rs"));
    }

    #[test]
    #[should_panic]
    fn relative_path_rejects_absolute() {
        RelativePath::new("/etc/passwd");
    }

    #[test]
    fn try_new_rejects_parent_traversal() {
        assert!(RelativePath::try_new("../outside.txt").is_err());
        assert!(RelativePath::try_new("a/../../b").is_err());
        assert!(RelativePath::try_new("").is_err());
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(RelativePath::new("README.MD").extension().as_deref(), Some("md"));
        assert_eq!(RelativePath::new("Makefile").extension(), None);
    }

    #[test]
    fn ordering_is_component_wise() {
        let mut paths = vec![
            RelativePath::new("b.txt"),
            RelativePath::new("a/z.txt"),
            RelativePath::new("a.txt"),
        ];
        paths.sort();
        let shown: Vec<_> = paths.iter().map(|p| p.to_string()).collect();
        assert_eq!(shown, ["a/z.txt", "a.txt", "b.txt"]);
    }
}
