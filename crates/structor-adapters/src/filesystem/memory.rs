//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use structor_core::application::ports::{DirEntry, Filesystem};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a test can keep a handle for inspection
/// while the service owns another. Failures can be injected per path with
/// [`MemoryFilesystem::fail_copy_to`], [`MemoryFilesystem::fail_writes_to`]
/// and [`MemoryFilesystem::fail_removal_of`].
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, MemoryFile>,
    directories: BTreeSet<PathBuf>,
    failing_copies: HashSet<PathBuf>,
    failing_writes: HashSet<PathBuf>,
    failing_removals: HashSet<PathBuf>,
    clock: u64,
}

#[derive(Debug, Clone)]
struct MemoryFile {
    content: Vec<u8>,
    modified: u64,
}

impl MemoryFilesystemInner {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.directories.contains(path)
    }

    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.is_dir(parent),
            _ => true,
        }
    }

    fn insert_dirs(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Add a directory and all of its parents.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert_dirs(path.as_ref());
        }
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                inner.insert_dirs(parent);
            }
            let modified = inner.tick();
            inner.files.insert(
                path.to_path_buf(),
                MemoryFile {
                    content: content.as_ref().to_vec(),
                    modified,
                },
            );
        }
    }

    /// Read a file's raw bytes (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).map(|f| f.content.clone())
    }

    /// Logical modification stamp of a file.
    pub fn modified(&self, path: impl AsRef<Path>) -> Option<u64> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).map(|f| f.modified)
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Make every copy whose destination is `path` fail.
    pub fn fail_copy_to(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_copies.insert(path.as_ref().to_path_buf());
        }
    }

    /// Make every write to `path` fail.
    pub fn fail_writes_to(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_writes.insert(path.as_ref().to_path_buf());
        }
    }

    /// Make removing `path` fail.
    pub fn fail_removal_of(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_removals.insert(path.as_ref().to_path_buf());
        }
    }

    fn read_lock(&self) -> io::Result<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| io::Error::other("memory filesystem lock poisoned"))
    }

    fn write_lock(&self) -> io::Result<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| io::Error::other("memory filesystem lock poisoned"))
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} does not exist", path.display()),
    )
}

fn injected(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("injected failure for {}", path.display()),
    )
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.read_lock()
            .map(|inner| inner.files.contains_key(path) || inner.is_dir(path))
            .unwrap_or(false)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let inner = self.read_lock()?;
        if !inner.is_dir(path) {
            return Err(not_found(path));
        }

        let child_name = |p: &Path| -> Option<String> {
            (p.parent() == Some(path))
                .then(|| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                .flatten()
        };

        let dirs = inner
            .directories
            .iter()
            .filter_map(|d| child_name(d).map(DirEntry::dir));
        let files = inner
            .files
            .keys()
            .filter_map(|f| child_name(f).map(DirEntry::file));

        Ok(dirs.chain(files).collect())
    }

    fn walk_files(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        let inner = self.read_lock()?;
        if !inner.is_dir(root) {
            return Err(not_found(root));
        }

        Ok(inner
            .files
            .keys()
            .filter_map(|p| p.strip_prefix(root).ok())
            .map(Path::to_path_buf)
            .collect())
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        let mut inner = self.write_lock()?;
        if inner.is_dir(path) || inner.files.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", path.display()),
            ));
        }
        if !inner.parent_exists(path) {
            return Err(not_found(path));
        }
        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut inner = self.write_lock()?;
        inner.insert_dirs(path);
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<u64> {
        let mut inner = self.write_lock()?;
        if inner.failing_copies.contains(to) {
            return Err(injected(to));
        }
        let source = inner.files.get(from).cloned().ok_or_else(|| not_found(from))?;
        if !inner.parent_exists(to) {
            return Err(not_found(to));
        }

        let len = source.content.len() as u64;
        inner.files.insert(to.to_path_buf(), source);
        Ok(len)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let inner = self.read_lock()?;
        let file = inner.files.get(path).ok_or_else(|| not_found(path))?;
        String::from_utf8(file.content.clone())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        let mut inner = self.write_lock()?;
        if inner.failing_writes.contains(path) {
            return Err(injected(path));
        }
        if !inner.parent_exists(path) {
            return Err(not_found(path));
        }

        let modified = inner.tick();
        inner.files.insert(
            path.to_path_buf(),
            MemoryFile {
                content: content.as_bytes().to_vec(),
                modified,
            },
        );
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut inner = self.write_lock()?;
        if inner.failing_removals.contains(path) {
            return Err(injected(path));
        }
        if !inner.is_dir(path) {
            return Err(not_found(path));
        }

        inner.directories.retain(|d| !d.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}
