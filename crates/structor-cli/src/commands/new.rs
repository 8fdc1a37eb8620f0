//! Implementation of the `structor new` command.
//!
//! Responsibility: gather a project name and template (from arguments or
//! prompts), call the core scaffold service, and display results. No
//! business logic lives here.

use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use structor_adapters::LocalFilesystem;
use structor_core::{
    application::{ScaffoldReport, ScaffoldService},
    domain::{ProjectName, ScaffoldRequest},
    error::StructorError,
};

use crate::{
    cli::{GlobalArgs, NewArgs},
    config::AppConfig,
    error::{CliError, CliResult, ErrorCategory, IntoCli},
    output::OutputManager,
    quotes::random_quote,
    render::{created_files_table, project_tree},
};

/// Execute the `structor new` command.
///
/// Dispatch sequence:
/// 1. Build the scaffold service for the working directory
/// 2. Prompt for whatever the arguments left out (terminal only)
/// 3. Early-exit with a preview on `--dry-run`
/// 4. Scaffold behind a spinner
/// 5. Print the created files, the tree, warnings and a quote
///
/// A fully interactive run offers to start over after a user-level failure.
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("<prompt>")))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let cwd = std::env::current_dir().with_cli_context(|| "reading the current directory")?;
    let templates_root = config.templates_root(global.templates.as_deref());
    debug!(templates = %templates_root.display(), output = %cwd.display(), "Service configured");

    let service = ScaffoldService::new(Arc::new(LocalFilesystem::new()), &templates_root, &cwd)
        .with_policy(config.injection_policy());

    let needs_prompt = args.name.is_none() || args.template.is_none();
    if needs_prompt {
        ensure_terminal(&args)?;
        output.header("\u{2b50}  Structor  \u{2b50}")?;
    }
    let fully_interactive = args.name.is_none() && args.template.is_none();

    loop {
        match run_once(&args, &service, &templates_root, &output) {
            Err(err) if fully_interactive && err.category() == ErrorCategory::UserError => {
                output.error(&err.to_string())?;
                if !prompt::retry()? {
                    return Err(CliError::Cancelled);
                }
            }
            other => return other,
        }
    }
}

fn run_once(
    args: &NewArgs,
    service: &ScaffoldService,
    templates_root: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    // 1. Name first, so a bad name fails before any template menu
    let name = match &args.name {
        Some(name) => {
            ProjectName::parse(name).map_err(StructorError::from)?;
            name.clone()
        }
        None => prompt::project_name()?,
    };

    // 2. Template
    let template = match &args.template {
        Some(template) => template.clone(),
        None => {
            let names = service.registry().list_templates()?;
            if names.is_empty() {
                return Err(CliError::NoTemplates {
                    root: templates_root.to_path_buf(),
                });
            }
            prompt::template(&names)?
        }
    };

    let request = ScaffoldRequest::new(&name, template).map_err(StructorError::from)?;

    // 3. Dry run: describe but do not write
    if args.dry_run {
        return preview(service, &request, output);
    }

    // 4. Scaffold
    info!(project = %request.project_name(), template = %request.template_name(), "Scaffold started");
    let spinner = output.spinner(&format!("Creating '{name}'..."));
    let result = service.scaffold(&request);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let report = result?;

    // 5. Report
    show_success(&report, request.project_name().as_str(), output)
}

fn ensure_terminal(args: &NewArgs) -> CliResult<()> {
    if cfg!(feature = "interactive") && io::stdin().is_terminal() {
        return Ok(());
    }
    let missing = match (&args.name, &args.template) {
        (None, None) => "project name and --template",
        (None, Some(_)) => "project name",
        _ => "--template",
    };
    Err(CliError::InvalidInput {
        message: format!("missing {missing} and no terminal to prompt on"),
    })
}

fn preview(
    service: &ScaffoldService,
    request: &ScaffoldRequest,
    output: &OutputManager,
) -> CliResult<()> {
    let plan = service.plan(request)?;
    let name = request.project_name().as_str();

    output.info(&format!(
        "Dry run: would create '{name}' at {} from template '{}'",
        plan.root.display(),
        plan.template.name(),
    ))?;
    output.lines(&project_tree(name, plan.tasks.iter().map(|t| &t.relative)))?;
    output.info(&format!("{} file(s), nothing written", plan.tasks.len()))?;
    Ok(())
}

fn show_success(report: &ScaffoldReport, name: &str, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.success(&format!("Project '{name}' created successfully!"))?;
    output.print("")?;

    output.header("\u{1f4c4} Created Files")?;
    output.lines(&created_files_table(name, &report.created))?;
    output.print("")?;
    output.lines(&project_tree(name, report.created.iter().map(|f| &f.relative)))?;

    for warning in &report.warnings {
        output.warning(&warning.to_string())?;
    }

    output.quote(random_quote())?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {name}"))?;
    Ok(())
}

// ── Prompts ──────────────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
mod prompt {
    use std::io;

    use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
    use structor_core::domain::ProjectName;

    use crate::error::{CliError, CliResult};
    use crate::render::capitalize;

    /// Ask until the name is non-empty and free of reserved characters.
    pub fn project_name() -> CliResult<String> {
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("\u{1f4c2} Enter project name")
            .validate_with(|input: &String| -> Result<(), String> {
                ProjectName::parse(input.trim())
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(prompt_error)?;
        Ok(name.trim().to_string())
    }

    pub fn template(names: &[String]) -> CliResult<String> {
        let labels: Vec<String> = names.iter().map(|n| capitalize(n)).collect();
        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("\u{1f4bb} Select project type")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(prompt_error)?;
        Ok(names[index].clone())
    }

    pub fn retry() -> CliResult<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Would you like to try again?")
            .default(false)
            .interact()
            .map_err(prompt_error)
    }

    fn prompt_error(err: dialoguer::Error) -> CliError {
        let err: io::Error = err.into();
        if err.kind() == io::ErrorKind::Interrupted {
            CliError::Cancelled
        } else {
            CliError::Io {
                message: "prompt failed".into(),
                source: err,
            }
        }
    }
}

#[cfg(not(feature = "interactive"))]
mod prompt {
    use crate::error::{CliError, CliResult};

    fn unavailable(what: &str) -> CliError {
        CliError::InvalidInput {
            message: format!("{what} is required (built without interactive prompts)"),
        }
    }

    pub fn project_name() -> CliResult<String> {
        Err(unavailable("project name"))
    }

    pub fn template(_names: &[String]) -> CliResult<String> {
        Err(unavailable("--template"))
    }

    pub fn retry() -> CliResult<bool> {
        Ok(false)
    }
}
