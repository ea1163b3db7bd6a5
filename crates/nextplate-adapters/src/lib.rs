//! Infrastructure adapters for Nextplate.
//!
//! This crate implements the ports defined in
//! `nextplate_core::application::ports`. It contains all external
//! dependencies and I/O operations: subprocess execution, temporary
//! directory lifecycle, tree traversal, and manifest editing.

pub mod collector;
pub mod manifest;
pub mod process;
pub mod workdir;

// Re-export commonly used adapters
pub use collector::FsCollector;
pub use manifest::JsonManifestEditor;
pub use process::{ScriptedRunner, ShellRunner};
pub use workdir::TempWorkdirs;
