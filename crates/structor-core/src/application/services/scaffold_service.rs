//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Refuse an existing target directory
//! 2. Resolve the template
//! 3. Create the target directory
//! 4. Copy the template tree (rolled back on failure)
//! 5. Inject the project name into eligible text files (warnings only)
//!
//! Once step 3 succeeds, any later error removes the target directory
//! before it reaches the caller.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
        services::{FileCopier, PlaceholderInjector, TemplateRegistry},
    },
    domain::{CreatedFile, FileTask, InjectionPolicy, InjectionWarning, ScaffoldRequest, Template},
    error::StructorResult,
};

/// Outcome of a successful scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    /// The project directory that was created.
    pub root: PathBuf,
    /// Template directory name as found on disk.
    pub template: String,
    /// Files written, in write order.
    pub created: Vec<CreatedFile>,
    /// Files whose placeholder injection failed. The run still succeeded.
    pub warnings: Vec<InjectionWarning>,
}

/// What a scaffold would do, computed without touching the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldPlan {
    pub root: PathBuf,
    pub template: Template,
    pub tasks: Vec<FileTask>,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Arc<dyn Filesystem>,
    registry: TemplateRegistry,
    output_root: PathBuf,
    policy: InjectionPolicy,
}

impl ScaffoldService {
    /// Create a service that places projects under `output_root`
    /// (normally the process's working directory).
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        templates_root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry: TemplateRegistry::new(Arc::clone(&filesystem), templates_root),
            filesystem,
            output_root: output_root.into(),
            policy: InjectionPolicy::default(),
        }
    }

    /// Replace the default injection allow-list.
    pub fn with_policy(mut self, policy: InjectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Where a project with this name would be created.
    pub fn target_path(&self, request: &ScaffoldRequest) -> PathBuf {
        self.output_root.join(request.project_name().as_str())
    }

    /// Scaffold a new project.
    #[instrument(
        skip_all,
        fields(
            project = %request.project_name(),
            template = %request.template_name(),
        )
    )]
    pub fn scaffold(&self, request: &ScaffoldRequest) -> StructorResult<ScaffoldReport> {
        let target = self.target_path(request);

        // 1. Never touch an existing directory
        self.ensure_absent(&target)?;

        // 2. Resolve template
        let template = self.registry.resolve(request.template_name())?;
        info!(template = %template.name(), "Template resolved");

        // 3. Create the project directory (parent must already exist)
        self.filesystem.create_dir(&target).map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                ApplicationError::AlreadyExists {
                    path: target.clone(),
                }
            } else {
                ApplicationError::filesystem(&target, "create directory", &e)
            }
        })?;

        // 4. Copy, rolling back on failure
        let created = match FileCopier::new(self.filesystem.as_ref()).copy_tree(&template, &target)
        {
            Ok(created) => created,
            Err(e) => {
                warn!(error = %e, "Copy failed, attempting rollback");
                self.rollback(&target);
                return Err(e);
            }
        };

        // 5. Inject; failures are reported, never rolled back
        let warnings = PlaceholderInjector::new(self.filesystem.as_ref(), &self.policy)
            .inject_all(&created, request.project_name().as_str());

        info!(
            files = created.len(),
            warnings = warnings.len(),
            "Scaffold completed successfully"
        );

        Ok(ScaffoldReport {
            root: target,
            template: template.name().to_string(),
            created,
            warnings,
        })
    }

    /// Compute the files a scaffold would create, without writing anything.
    #[instrument(skip_all, fields(project = %request.project_name()))]
    pub fn plan(&self, request: &ScaffoldRequest) -> StructorResult<ScaffoldPlan> {
        let root = self.target_path(request);
        self.ensure_absent(&root)?;

        let template = self.registry.resolve(request.template_name())?;
        let tasks = FileCopier::new(self.filesystem.as_ref()).plan(&template)?;

        Ok(ScaffoldPlan {
            root,
            template,
            tasks,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn ensure_absent(&self, target: &Path) -> StructorResult<()> {
        if self.filesystem.exists(target) {
            return Err(ApplicationError::AlreadyExists {
                path: target.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{DirEntry, MockFilesystem};
    use crate::domain::DomainError;
    use crate::error::StructorError;

    fn request() -> ScaffoldRequest {
        ScaffoldRequest::new("demo", "web").unwrap()
    }

    /// A mock whose templates root holds a single `web` template with one
    /// file, and whose output root holds nothing.
    fn base_mock() -> MockFilesystem {
        let mut mock = MockFilesystem::new();
        mock.expect_exists()
            .returning(|p| p.starts_with("/templates"));
        mock.expect_read_dir().returning(|p| {
            if p == Path::new("/templates") {
                Ok(vec![DirEntry::dir("web")])
            } else {
                Ok(vec![DirEntry::file("README.md")])
            }
        });
        mock.expect_walk_files()
            .returning(|_| Ok(vec![PathBuf::from("README.md")]));
        mock
    }

    fn service(mock: MockFilesystem) -> ScaffoldService {
        ScaffoldService::new(Arc::new(mock), "/templates", "/work")
    }

    #[test]
    fn existing_target_is_left_untouched() {
        let mut mock = MockFilesystem::new();
        mock.expect_exists().returning(|_| true);
        mock.expect_create_dir().never();
        mock.expect_remove_dir_all().never();

        let err = service(mock).scaffold(&request()).unwrap_err();
        assert_eq!(
            err,
            StructorError::Application(ApplicationError::AlreadyExists {
                path: PathBuf::from("/work/demo"),
            })
        );
    }

    #[test]
    fn unknown_template_creates_nothing() {
        let mut mock = base_mock();
        mock.expect_create_dir().never();

        let req = ScaffoldRequest::new("demo", "desktop").unwrap();
        let err = service(mock).scaffold(&req).unwrap_err();
        assert!(matches!(
            err,
            StructorError::Domain(DomainError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn copy_failure_rolls_back_target() {
        let mut mock = base_mock();
        mock.expect_create_dir().times(1).returning(|_| Ok(()));
        mock.expect_create_dir_all().returning(|_| Ok(()));
        mock.expect_copy_file()
            .returning(|_, _| Err(io::Error::other("disk full")));
        mock.expect_remove_dir_all()
            .withf(|p| p.to_path_buf() == PathBuf::from("/work/demo"))
            .times(1)
            .returning(|_| Ok(()));

        let err = service(mock).scaffold(&request()).unwrap_err();
        assert!(matches!(
            err,
            StructorError::Application(ApplicationError::CopyFailed { .. })
        ));
    }

    #[test]
    fn rollback_errors_do_not_mask_the_original_failure() {
        let mut mock = base_mock();
        mock.expect_create_dir().returning(|_| Ok(()));
        mock.expect_create_dir_all().returning(|_| Ok(()));
        mock.expect_copy_file()
            .returning(|_, _| Err(io::Error::from(io::ErrorKind::PermissionDenied)));
        mock.expect_remove_dir_all()
            .returning(|_| Err(io::Error::from(io::ErrorKind::PermissionDenied)));

        let err = service(mock).scaffold(&request()).unwrap_err();
        assert!(matches!(
            err,
            StructorError::Application(ApplicationError::CopyFailed {
                kind: io::ErrorKind::PermissionDenied,
                ..
            })
        ));
    }

    #[test]
    fn injection_warning_does_not_roll_back() {
        let mut mock = base_mock();
        mock.expect_create_dir().returning(|_| Ok(()));
        mock.expect_create_dir_all().returning(|_| Ok(()));
        mock.expect_copy_file().returning(|_, _| Ok(5));
        mock.expect_read_to_string()
            .returning(|_| Err(io::Error::from(io::ErrorKind::InvalidData)));
        mock.expect_remove_dir_all().never();

        let report = service(mock).scaffold(&request()).unwrap();
        assert_eq!(report.created.len(), 1);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.root, PathBuf::from("/work/demo"));
    }

    #[test]
    fn create_dir_race_reports_already_exists() {
        let mut mock = base_mock();
        mock.expect_create_dir()
            .returning(|_| Err(io::Error::from(io::ErrorKind::AlreadyExists)));
        mock.expect_remove_dir_all().never();

        assert!(matches!(
            service(mock).scaffold(&request()),
            Err(StructorError::Application(ApplicationError::AlreadyExists { .. }))
        ));
    }

    #[test]
    fn plan_lists_tasks_without_writing() {
        let mut mock = base_mock();
        mock.expect_create_dir().never();
        mock.expect_copy_file().never();

        let plan = service(mock).plan(&request()).unwrap();
        assert_eq!(plan.root, PathBuf::from("/work/demo"));
        assert_eq!(plan.template.name(), "web");
        assert_eq!(plan.tasks.len(), 1);
    }
}
