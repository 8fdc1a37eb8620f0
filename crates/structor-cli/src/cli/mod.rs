//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "structor",
    bin_name = "structor",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2b50} Scaffold a new project from a template",
    long_about = "Structor copies a template directory into a fresh project \
                  directory and fills in the project name.",
    after_help = "EXAMPLES:\n\
        \x20 structor new\n\
        \x20 structor new my-bot --template discord-bot\n\
        \x20 structor list\n\
        \x20 structor config init",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project from a template.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 structor new                              # prompts for everything\n\
            \x20 structor new my-api --template express\n\
            \x20 structor new my-bot -t discord-bot-python --dry-run"
    )]
    New(NewArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 structor list\n\
            \x20 structor list --format json"
    )]
    List(ListArgs),

    /// Manage the Structor configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 structor config show\n\
            \x20 structor config path\n\
            \x20 structor config init --force"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `structor new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name; the project is created as `./NAME`.
    ///
    /// Prompted for when omitted and stdin is a terminal.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Template to scaffold from (case-insensitive).
    #[arg(
        short = 't',
        long = "template",
        value_name = "TEMPLATE",
        help = "Template name (see `structor list`)"
    )]
    pub template: Option<String>,

    /// Show what would be created without writing anything.
    #[arg(long = "dry-run", help = "Preview without creating files")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `structor list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Numbered, human-readable menu.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `structor config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the path of the configuration file.
    Path,
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}
