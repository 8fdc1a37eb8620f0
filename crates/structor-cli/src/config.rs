//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STRUCTOR_` prefix, `__` between sections,
//!    e.g. `STRUCTOR_TEMPLATES__ROOT=/srv/templates`
//! 3. Config file (`--config FILE`, else [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use structor_core::domain::{DEFAULT_TEXT_EXTENSIONS, InjectionPolicy};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Template settings.
    pub templates: TemplateConfig,
    /// Placeholder injection settings.
    pub injection: InjectionConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Overrides templates-root discovery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectionConfig {
    /// File extensions eligible for `{{project_name}}` substitution.
    pub extensions: Vec<String>,
}

impl Default for InjectionConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_TEXT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Print a celebratory quote after a successful scaffold.
    pub quotes: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            quotes: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment on top of defaults.
    ///
    /// A missing file at the default location is fine; a missing file the
    /// user named explicitly is a configuration error.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "loading configuration");

        Config::builder()
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix("STRUCTOR")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(" ")
                    .with_list_parse_key("injection.extensions")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize::<AppConfig>())
            .map_err(|e| CliError::Config {
                message: format!("Failed to load {}: {e}", path.display()),
                source: Some(Box::new(e)),
            })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.structor.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".structor.toml"))
    }

    /// The injection allow-list as a core policy.
    pub fn injection_policy(&self) -> InjectionPolicy {
        InjectionPolicy::new(&self.injection.extensions)
    }

    /// Pick the templates root. First match wins:
    ///
    /// 1. `flag` (`--templates`)
    /// 2. `templates.root` from config
    /// 3. `templates/` next to the executable
    /// 4. `templates/` in the platform data dir
    /// 5. the `templates/` directory of a source checkout (debug builds only)
    ///
    /// When nothing exists the data-dir location is returned; listing it
    /// simply yields no templates.
    pub fn templates_root(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(root) = flag.or(self.templates.root.as_deref()) {
            return root.to_path_buf();
        }

        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("templates")));
        let data_dir = project_dirs().map(|d| d.data_dir().join("templates"));

        [beside_exe.clone(), data_dir.clone(), checkout_templates()]
            .into_iter()
            .flatten()
            .find(|candidate| candidate.is_dir())
            .or(data_dir)
            .or(beside_exe)
            .unwrap_or_else(|| PathBuf::from("templates"))
    }
}

#[cfg(debug_assertions)]
fn checkout_templates() -> Option<PathBuf> {
    Some(Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates"))
}

#[cfg(not(debug_assertions))]
fn checkout_templates() -> Option<PathBuf> {
    None
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "structor", "structor")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use structor_core::domain::RelativePath;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_builtin_allow_list() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.injection.extensions.len(), DEFAULT_TEXT_EXTENSIONS.len());
        assert!(cfg.output.quotes);
        assert!(!cfg.output.no_color);
        assert!(cfg.templates.root.is_none());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("structor.toml");
        fs::write(
            &path,
            "[templates]\nroot = \"/srv/templates\"\n\n[injection]\nextensions = [\"toml\"]\n\n[output]\nquotes = false\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(cfg.templates.root, Some(PathBuf::from("/srv/templates")));
        assert_eq!(cfg.injection.extensions, vec!["toml"]);
        assert!(!cfg.output.quotes);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[output\nquotes = ").unwrap();

        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let cfg = AppConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn debug_builds_fall_back_to_checkout_templates() {
        let checkout = checkout_templates().unwrap();
        assert!(checkout.ends_with("../../templates"));
        assert!(checkout.starts_with(env!("CARGO_MANIFEST_DIR")));
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn release_builds_carry_no_checkout_path() {
        assert!(checkout_templates().is_none());
    }

    #[test]
    fn flag_beats_config_for_templates_root() {
        let cfg = AppConfig {
            templates: TemplateConfig {
                root: Some(PathBuf::from("/from/config")),
            },
            ..AppConfig::default()
        };

        assert_eq!(
            cfg.templates_root(Some(Path::new("/from/flag"))),
            PathBuf::from("/from/flag")
        );
        assert_eq!(cfg.templates_root(None), PathBuf::from("/from/config"));
    }

    #[test]
    fn injection_policy_uses_configured_extensions() {
        let cfg = AppConfig {
            injection: InjectionConfig {
                extensions: vec!["toml".into()],
            },
            ..AppConfig::default()
        };
        let policy = cfg.injection_policy();

        assert!(policy.is_eligible(&RelativePath::new("Cargo.toml")));
        assert!(!policy.is_eligible(&RelativePath::new("README.md")));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
