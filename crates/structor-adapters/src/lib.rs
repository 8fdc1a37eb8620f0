//! Infrastructure adapters for Structor.
//!
//! This crate implements the ports defined in
//! `structor-core::application::ports`. It contains all real I/O.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
