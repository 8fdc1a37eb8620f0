//! Command handlers, one module per subcommand.

pub mod config;
pub mod list;
pub mod new;
