//! Implementation of the `structor list` command.

use std::io;
use std::sync::Arc;

use structor_adapters::LocalFilesystem;
use structor_core::application::TemplateRegistry;

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    render::numbered_menu,
};

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = config.templates_root(global.templates.as_deref());
    let registry = TemplateRegistry::new(Arc::new(LocalFilesystem::new()), &root);
    let names = registry.list_templates()?;

    match args.format {
        ListFormat::Table => {
            if names.is_empty() {
                output.warning(&format!("No templates found in {}", root.display()))?;
                return Ok(());
            }
            output.header("\u{1f4cb} Available templates:")?;
            output.lines(&numbered_menu(&names))?;
        }

        // Machine-readable formats bypass OutputManager so they stay
        // parseable under --quiet and in pipes.
        ListFormat::List => {
            for name in &names {
                println!("{name}");
            }
        }

        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&names).map_err(io::Error::from)?;
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("name");
            for name in &names {
                println!("{}", csv_field(name));
            }
        }
    }

    Ok(())
}

/// Quote a CSV field when it holds a comma, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
