//! Core domain layer for Nextplate.
//!
//! This module contains pure data and logic with no I/O. All subprocess,
//! filesystem, and temp-directory concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Typed configuration**: No ad hoc optional-chaining reads; module
//!   configuration and context are explicit structs with serde defaults

pub mod config;
pub mod context;
pub mod file_map;

// Re-exports for convenience
pub use config::{DependencySpec, FileRules, GenerationSpec, ModuleConfig, NpmDependencies};
pub use context::{ModuleValues, ProjectInfo, RouterMode, ScaffoldContext};
pub use file_map::{FileEntry, FileKind, FileMap};
