//! Structor Core - the scaffolding engine.
//!
//! Copies a named template directory into a fresh project directory and
//! substitutes `{{project_name}}` in eligible text files, all or nothing.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          structor-cli (CLI)             │
//! │   prompts, tables, trees, exit codes    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  ScaffoldService ─┬─ TemplateRegistry   │
//! │                   ├─ FileCopier         │
//! │                   └─ PlaceholderInjector│
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Port (Filesystem)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   structor-adapters (Infrastructure)    │
//! │    LocalFilesystem, MemoryFilesystem    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use structor_core::prelude::*;
//! # fn adapter() -> Arc<dyn Filesystem> { unimplemented!() }
//!
//! let service = ScaffoldService::new(adapter(), "/usr/share/structor/templates", ".");
//! let request = ScaffoldRequest::new("demo", "express")?;
//! let report = service.scaffold(&request)?;
//! println!("created {} files", report.created.len());
//! # Ok::<(), StructorError>(())
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Filesystem, ScaffoldPlan, ScaffoldReport, ScaffoldService, TemplateRegistry,
    };
    pub use crate::domain::{
        CreatedFile, InjectionPolicy, InjectionWarning, ProjectName, ScaffoldRequest, Template,
        sanitize,
    };
    pub use crate::error::{StructorError, StructorResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
