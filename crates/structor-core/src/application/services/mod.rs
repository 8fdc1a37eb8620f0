//! Application services - orchestrate use cases.
//!
//! Leaf-first: the registry resolves templates, the copier materializes
//! them, the injector rewrites text, and the scaffold service ties the
//! three together under its rollback contract.

pub mod copier;
pub mod injector;
pub mod registry;
pub mod scaffold_service;

pub use copier::FileCopier;
pub use injector::{Injection, PlaceholderInjector};
pub use registry::TemplateRegistry;
pub use scaffold_service::{ScaffoldPlan, ScaffoldReport, ScaffoldService};
