//! Application layer for Structor.
//!
//! This layer contains:
//! - **Services**: the registry, copier, injector, and the scaffold engine
//! - **Ports**: the `Filesystem` trait the services run against
//! - **Errors**: orchestration and I/O error types

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    FileCopier, Injection, PlaceholderInjector, ScaffoldPlan, ScaffoldReport, ScaffoldService,
    TemplateRegistry,
};

pub use ports::{DirEntry, Filesystem};

pub use error::ApplicationError;
