//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `structor-adapters` implement
//! these.
//!
//! Only one driven port exists: [`Filesystem`]. Templates are plain
//! directories, so discovering and reading them is filesystem work too.

use std::io;
use std::path::{Path, PathBuf};

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `structor_adapters::LocalFilesystem` (production)
/// - `structor_adapters::MemoryFilesystem` (testing)
///
/// Methods return raw `io::Result`s; services attach the path and the
/// failure policy (fatal copy vs. non-fatal injection).
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Immediate children of a directory, in no particular order.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Every regular file below `root`, as paths relative to `root`, in no
    /// particular order. Directories are not reported.
    fn walk_files(&self, root: &Path) -> io::Result<Vec<PathBuf>>;

    /// Create exactly one directory; the parent must exist.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Create a directory and all missing parents.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Copy bytes and modification metadata. Returns bytes copied.
    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<u64>;

    /// Read a file as UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replace a file's content.
    fn write_file(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;
}
