//! Local filesystem adapter using std::fs.

use std::fs::{self, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

use structor_core::application::ports::{DirEntry, Filesystem};
use tracing::debug;
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            // Follows symlinks.
            let is_dir = entry.path().is_dir();
            entries.push(DirEntry { name, is_dir });
        }
        Ok(entries)
    }

    fn walk_files(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).min_depth(1).follow_links(false) {
            let entry = entry?;
            // Symlinks and other special entries are not part of a template.
            if !entry.file_type().is_file() {
                if !entry.file_type().is_dir() {
                    debug!(path = %entry.path().display(), "skipping non-regular entry");
                }
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(root)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            files.push(relative.to_path_buf());
        }
        Ok(files)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<u64> {
        // fs::copy carries the permission bits across.
        let bytes = fs::copy(from, to)?;
        let metadata = fs::metadata(from)?;
        preserve_times(to, &metadata)?;
        Ok(bytes)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }
}

fn preserve_times(path: &Path, source: &fs::Metadata) -> io::Result<()> {
    let mut times = FileTimes::new().set_modified(source.modified()?);
    if let Ok(accessed) = source.accessed() {
        times = times.set_accessed(accessed);
    }

    #[cfg(unix)]
    {
        // futimens only needs ownership, so a read handle works even for
        // read-only copies.
        fs::File::open(path)?.set_times(times)
    }

    #[cfg(not(unix))]
    {
        match fs::File::options().write(true).open(path) {
            Ok(file) => file.set_times(times),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                debug!(path = %path.display(), "read-only copy, timestamps left as-is");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn make_tree(root: &Path, files: &[(&str, &[u8])]) {
        for (rel, content) in files {
            let path = root.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
    }

    #[test]
    fn walk_files_reports_nested_regular_files_only() {
        let dir = TempDir::new().unwrap();
        make_tree(
            dir.path(),
            &[("README.md", b"x"), ("src/main.py", b"y"), ("a/b/c/d.txt", b"z")],
        );
        fs::create_dir_all(dir.path().join("empty")).unwrap();

        let mut files = LocalFilesystem.walk_files(dir.path()).unwrap();
        files.sort();

        assert_eq!(
            files,
            vec![
                PathBuf::from("README.md"),
                PathBuf::from("a/b/c/d.txt"),
                PathBuf::from("src/main.py"),
            ]
        );
    }

    #[test]
    fn walk_files_on_missing_root_fails() {
        let dir = TempDir::new().unwrap();
        assert!(LocalFilesystem.walk_files(&dir.path().join("nope")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn walk_files_skips_symlinks() {
        let dir = TempDir::new().unwrap();
        make_tree(dir.path(), &[("real.txt", b"x")]);
        std::os::unix::fs::symlink(dir.path().join("real.txt"), dir.path().join("link.txt"))
            .unwrap();

        let files = LocalFilesystem.walk_files(dir.path()).unwrap();

        assert_eq!(files, vec![PathBuf::from("real.txt")]);
    }

    #[test]
    fn read_dir_marks_directories() {
        let dir = TempDir::new().unwrap();
        make_tree(dir.path(), &[("express/app.js", b""), ("notes.txt", b"")]);

        let mut entries = LocalFilesystem.read_dir(dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(
            entries,
            vec![DirEntry::dir("express"), DirEntry::file("notes.txt")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn read_dir_treats_linked_directory_as_directory() {
        let dir = TempDir::new().unwrap();
        make_tree(dir.path(), &[("web/index.html", b"")]);
        std::os::unix::fs::symlink(dir.path().join("web"), dir.path().join("linked")).unwrap();

        let mut entries = LocalFilesystem.read_dir(dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries, vec![DirEntry::dir("linked"), DirEntry::dir("web")]);
    }

    #[test]
    fn create_dir_refuses_existing_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("demo");

        LocalFilesystem.create_dir(&target).unwrap();
        let err = LocalFilesystem.create_dir(&target).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn copy_file_is_byte_identical_and_keeps_mtime() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("logo.png");
        let bytes: Vec<u8> = (0..=255u8).chain([0xff, 0xfe, 0x00]).collect();
        fs::write(&src, &bytes).unwrap();

        let past = SystemTime::now() - Duration::from_secs(86_400);
        fs::File::options()
            .write(true)
            .open(&src)
            .unwrap()
            .set_modified(past)
            .unwrap();

        let dst = dir.path().join("copy.png");
        let copied = LocalFilesystem.copy_file(&src, &dst).unwrap();

        assert_eq!(copied, bytes.len() as u64);
        assert_eq!(fs::read(&dst).unwrap(), bytes);
        assert_eq!(
            fs::metadata(&dst).unwrap().modified().unwrap(),
            fs::metadata(&src).unwrap().modified().unwrap()
        );
    }

    #[cfg(unix)]
    #[test]
    fn copy_file_keeps_permission_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let src = dir.path().join("run.sh");
        fs::write(&src, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&src, fs::Permissions::from_mode(0o755)).unwrap();

        let dst = dir.path().join("copy.sh");
        LocalFilesystem.copy_file(&src, &dst).unwrap();

        let mode = fs::metadata(&dst).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn copy_file_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("a.txt");
        fs::write(&src, "a").unwrap();

        let result = LocalFilesystem.copy_file(&src, &dir.path().join("missing/a.txt"));

        assert!(result.is_err());
    }

    #[test]
    fn read_to_string_rejects_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blob.txt");
        fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

        let err = LocalFilesystem.read_to_string(&path).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn remove_dir_all_deletes_tree() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("demo");
        make_tree(&target, &[("a/b.txt", b"x")]);

        LocalFilesystem.remove_dir_all(&target).unwrap();

        assert!(!LocalFilesystem.exists(&target));
    }
}
