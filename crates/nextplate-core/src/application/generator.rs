//! The create-next-app invocation contract.
//!
//! The external generator is an uncontrolled tool; everything this module
//! knows about it is the fixed, versioned argument vector. Execution is
//! delegated to the [`CommandRunner`] port so alternate generators or
//! versions can be substituted without touching orchestration logic.

use std::path::Path;

use tracing::debug;

use crate::application::ports::CommandRunner;
use crate::domain::RouterMode;
use crate::error::ProcessError;

/// Command the generator is launched through.
pub const GENERATOR_COMMAND: &str = "npx";

/// Pinned generator package spec. The `nextjsVersion` field value is
/// informational only in this layer.
pub const GENERATOR_PACKAGE: &str = "create-next-app@15";

/// Directory name the generator output is materialized under. The real
/// project name is applied later by the outer assembly system.
pub const SYNTHETIC_PROJECT_NAME: &str = "next-app";

/// Build the fixed argument vector for one generator run.
///
/// Non-interactive, TypeScript, Tailwind, ESLint, `src/` layout, a fixed
/// import alias, Turbopack, with dependency installation and git init
/// explicitly skipped (the outer system owns both). The app-router flag is
/// appended unless the context selected the legacy pages router, which is
/// generator-default behavior rather than an explicit flag.
pub fn generator_args(project_name: &str, router: RouterMode) -> Vec<String> {
    let mut args: Vec<String> = [
        "--yes",
        GENERATOR_PACKAGE,
        project_name,
        "--ts",
        "--tailwind",
        "--eslint",
        "--src-dir",
        "--import-alias",
        "@/*",
        "--turbopack",
        "--skip-install",
        "--disable-git",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    if router.use_app_router() {
        args.push("--app".into());
    }

    args
}

/// Run the generator inside `workdir`, producing
/// `workdir/<project_name>/`. Propagates the runner's result unchanged.
pub fn invoke(
    runner: &dyn CommandRunner,
    workdir: &Path,
    project_name: &str,
    router: RouterMode,
) -> Result<(), ProcessError> {
    let args = generator_args(project_name, router);
    debug!(%router, workdir = %workdir.display(), "invoking generator");
    runner.run(GENERATOR_COMMAND, &args, workdir)
}
