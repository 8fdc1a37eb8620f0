// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Structor.
//!
//! Pure logic with no I/O. Filesystem access is expressed through the
//! `Filesystem` port in the application layer.
//!
//! - **No async**: everything is synchronous
//! - **No I/O**: names, paths, and text transforms only
//! - **Immutable values**: all domain objects are Clone + PartialEq

pub mod common;
pub mod error;
pub mod file;
pub mod name;
pub mod placeholder;
pub mod request;
pub mod template;

pub use common::RelativePath;
pub use error::{DomainError, ErrorCategory};
pub use file::{CreatedFile, FileTask, InjectionWarning};
pub use name::{ProjectName, RESERVED_CHARS, sanitize};
pub use placeholder::{DEFAULT_TEXT_EXTENSIONS, InjectionPolicy, PLACEHOLDER_TOKEN, substitute};
pub use request::ScaffoldRequest;
pub use template::Template;
