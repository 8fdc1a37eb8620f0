//! Placeholder Injector - rewrites `{{project_name}}` in copied text files.
//!
//! Failures here never abort a scaffold. Each one becomes an
//! [`InjectionWarning`] against the single file involved.

use tracing::{debug, warn};

use crate::{
    application::ports::Filesystem,
    domain::{CreatedFile, InjectionPolicy, InjectionWarning, substitute},
};

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Injection {
    /// Extension not in the allow-list; the file was never opened.
    Skipped,
    /// Token absent; the file was read but not rewritten.
    Unchanged,
    /// Token found and replaced; the file was rewritten in place.
    Rewritten,
}

pub struct PlaceholderInjector<'a> {
    filesystem: &'a dyn Filesystem,
    policy: &'a InjectionPolicy,
}

impl<'a> PlaceholderInjector<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, policy: &'a InjectionPolicy) -> Self {
        Self { filesystem, policy }
    }

    /// Substitute the token in one copied file.
    pub fn inject(
        &self,
        file: &CreatedFile,
        project_name: &str,
    ) -> Result<Injection, InjectionWarning> {
        if !self.policy.is_eligible(&file.relative) {
            return Ok(Injection::Skipped);
        }

        let text = self
            .filesystem
            .read_to_string(&file.path)
            .map_err(|e| warning(file, e))?;

        let Some(rewritten) = substitute(&text, project_name) else {
            return Ok(Injection::Unchanged);
        };

        self.filesystem
            .write_file(&file.path, &rewritten)
            .map_err(|e| warning(file, e))?;

        debug!(file = %file.relative, "placeholder injected");
        Ok(Injection::Rewritten)
    }

    /// Inject into every file, collecting warnings instead of stopping.
    pub fn inject_all(&self, files: &[CreatedFile], project_name: &str) -> Vec<InjectionWarning> {
        files
            .iter()
            .filter_map(|file| self.inject(file, project_name).err())
            .inspect(|w| warn!(path = %w.path.display(), reason = %w.reason, "injection skipped"))
            .collect()
    }
}

fn warning(file: &CreatedFile, err: std::io::Error) -> InjectionWarning {
    InjectionWarning {
        path: file.path.clone(),
        reason: err.to_string(),
    }
}
