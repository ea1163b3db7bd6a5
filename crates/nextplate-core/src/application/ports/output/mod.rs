//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the scaffold pipeline needs from external
//! systems. The `nextplate-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{FileMap, NpmDependencies};
use crate::error::{ProcessError, ScaffoldResult};

/// Port for executing external commands.
///
/// Implemented by:
/// - `nextplate_adapters::process::ShellRunner` (production)
/// - `nextplate_adapters::process::ScriptedRunner` (testing)
///
/// ## Design Notes
///
/// - stdout/stderr are captured fully in memory for diagnostics; stdin is
///   never forwarded
/// - Success iff the process exits with status 0
/// - Platform-specific executable resolution (`.cmd` shims on Windows)
///   belongs to the adapter, never to argument construction
pub trait CommandRunner: Send + Sync {
    /// Run `command` with `args` in `cwd`, blocking until it terminates.
    fn run(&self, command: &str, args: &[String], cwd: &Path) -> Result<(), ProcessError>;
}

/// A scoped working directory owned by exactly one scaffold invocation.
///
/// Dropping the handle releases the directory (recursive best-effort
/// delete). Cleanup failure is logged by the adapter and never surfaces.
pub trait Workdir: Send {
    /// Absolute path of the directory. Valid until the handle is dropped.
    fn path(&self) -> &Path;
}

/// Port for allocating uniquely-named temporary working directories.
///
/// Implemented by:
/// - `nextplate_adapters::workdir::TempWorkdirs` (production)
pub trait WorkdirProvider: Send + Sync {
    /// Allocate a fresh, uniquely-named working directory.
    fn acquire(&self) -> ScaffoldResult<Box<dyn Workdir>>;
}

/// Port for collecting a filesystem subtree into a [`FileMap`].
///
/// Implemented by:
/// - `nextplate_adapters::collector::FsCollector` (production)
///
/// Collection is total: a missing root yields an empty map, and an
/// unreadable file is skipped with a warning rather than aborting.
pub trait FileCollector: Send + Sync {
    fn collect(&self, root: &Path) -> FileMap;
}

/// Port for the dependency-injection transformation on a package manifest.
///
/// Implemented by:
/// - `nextplate_adapters::manifest::JsonManifestEditor` (production)
///
/// A missing manifest is a warning-level no-op, not an error; errors
/// returned here are downgraded to warnings by the orchestrator.
pub trait ManifestEditor: Send + Sync {
    /// Additively merge `deps` into the manifest inside `project_dir`.
    fn merge_dependencies(&self, project_dir: &Path, deps: &NpmDependencies)
    -> ScaffoldResult<()>;
}
