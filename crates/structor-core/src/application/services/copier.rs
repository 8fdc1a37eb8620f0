//! File Copier - materializes a template tree under a target root.
//!
//! Directories are never copied as entities; each file's parent chain is
//! created on demand just before the file is written.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{CreatedFile, FileTask, RelativePath, Template},
    error::StructorResult,
};

/// Copies every regular file of a template, in relative-path order.
pub struct FileCopier<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> FileCopier<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Enumerate the template's files as sorted copy tasks.
    pub fn plan(&self, template: &Template) -> StructorResult<Vec<FileTask>> {
        let root = template.root();
        let files = self
            .filesystem
            .walk_files(root)
            .map_err(|e| ApplicationError::copy_failed(root, &e))?;

        let mut tasks = files
            .into_iter()
            .map(|rel| {
                RelativePath::try_new(rel)
                    .map(|rel| FileTask::new(root, rel))
                    .map_err(|bad| ApplicationError::CopyFailed {
                        path: root.join(&bad),
                        destination: None,
                        kind: std::io::ErrorKind::InvalidInput,
                        reason: "path escapes the template root".into(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tasks.sort_by(|a, b| a.relative.cmp(&b.relative));
        Ok(tasks)
    }

    /// Copy the whole template under `target_root`.
    ///
    /// Stops at the first failure. Files written before it stay on disk;
    /// cleaning them up is the caller's job.
    #[instrument(skip_all, fields(template = %template.name(), target = %target_root.display()))]
    pub fn copy_tree(
        &self,
        template: &Template,
        target_root: &Path,
    ) -> StructorResult<Vec<CreatedFile>> {
        let tasks = self.plan(template)?;
        let mut created = Vec::with_capacity(tasks.len());

        for task in tasks {
            created.push(self.copy_one(&task, target_root)?);
        }

        debug!(files = created.len(), "template copied");
        Ok(created)
    }

    fn copy_one(&self, task: &FileTask, target_root: &Path) -> StructorResult<CreatedFile> {
        let destination = task.destination(target_root);

        if let Some(parent) = destination.parent() {
            self.filesystem
                .create_dir_all(parent)
                .map_err(|e| ApplicationError::copy_failed(parent, &e))?;
        }

        let size = self
            .filesystem
            .copy_file(&task.source, &destination)
            .map_err(|e| ApplicationError::copy_to_failed(&task.source, &destination, &e))?;

        debug!(file = %task.relative, bytes = size, "copied");
        Ok(CreatedFile {
            path: destination,
            relative: task.relative.clone(),
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::error::StructorError;
    use std::io;
    use std::path::PathBuf;

    fn template() -> Template {
        Template::new("web", "/t/web")
    }

    #[test]
    fn plan_sorts_by_relative_path() {
        let mut mock = MockFilesystem::new();
        mock.expect_walk_files().returning(|_| {
            Ok(vec![
                PathBuf::from("src/b.js"),
                PathBuf::from("README.md"),
                PathBuf::from("src/a.js"),
            ])
        });

        let tasks = FileCopier::new(&mock).plan(&template()).unwrap();
        let order: Vec<_> = tasks.iter().map(|t| t.relative.to_string()).collect();
        assert_eq!(order, ["README.md", "src/a.js", "src/b.js"]);
        assert_eq!(tasks[1].source, PathBuf::from("/t/web/src/a.js"));
    }

    #[test]
    fn copy_tree_creates_parents_then_copies() {
        let mut mock = MockFilesystem::new();
        mock.expect_walk_files()
            .returning(|_| Ok(vec![PathBuf::from("src/app.js")]));
        mock.expect_create_dir_all()
            .withf(|dir| dir.to_path_buf() == PathBuf::from("/out/demo/src"))
            .times(1)
            .returning(|_| Ok(()));
        mock.expect_copy_file()
            .withf(|from, to| {
                from.to_path_buf() == PathBuf::from("/t/web/src/app.js")
                    && to.to_path_buf() == PathBuf::from("/out/demo/src/app.js")
            })
            .times(1)
            .returning(|_, _| Ok(42));

        let created = FileCopier::new(&mock)
            .copy_tree(&template(), Path::new("/out/demo"))
            .unwrap();

        assert_eq!(created.len(), 1);
        assert_eq!(created[0].path, PathBuf::from("/out/demo/src/app.js"));
        assert_eq!(created[0].size, 42);
    }

    #[test]
    fn copy_tree_stops_at_first_failure() {
        let mut mock = MockFilesystem::new();
        mock.expect_walk_files()
            .returning(|_| Ok(vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]));
        mock.expect_create_dir_all().returning(|_| Ok(()));
        mock.expect_copy_file()
            .times(1)
            .returning(|_, _| Err(io::Error::from(io::ErrorKind::PermissionDenied)));

        let err = FileCopier::new(&mock)
            .copy_tree(&template(), Path::new("/out/demo"))
            .unwrap_err();

        match err {
            StructorError::Application(ApplicationError::CopyFailed {
                path,
                destination,
                kind,
                ..
            }) => {
                assert_eq!(path, PathBuf::from("/t/web/a.txt"));
                assert_eq!(destination, Some(PathBuf::from("/out/demo/a.txt")));
                assert_eq!(kind, io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn walk_failure_is_copy_failed() {
        let mut mock = MockFilesystem::new();
        mock.expect_walk_files()
            .returning(|_| Err(io::Error::from(io::ErrorKind::NotFound)));

        assert!(matches!(
            FileCopier::new(&mock).plan(&template()),
            Err(StructorError::Application(ApplicationError::CopyFailed { .. }))
        ));
    }
}
