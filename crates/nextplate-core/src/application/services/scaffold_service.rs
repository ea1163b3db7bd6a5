//! Scaffold Service - main application orchestrator.
//!
//! One invocation drives five sequential phases:
//! 1. Init: derive the router mode, allocate a scoped working directory
//! 2. Generate: run the external generator (the only fatal phase after init)
//! 3. Merge: inject configured npm dependencies into the manifest (warn-only)
//! 4. Collect: walk the generated tree into a `FileMap`
//! 5. Filter: apply the configured removal list
//!
//! Cleanup happens unconditionally when the working-directory handle is
//! released, on every exit path, and never rewrites the phase result.

use tracing::{info, instrument, warn};

use crate::{
    application::{
        generator,
        ports::{CommandRunner, FileCollector, ManifestEditor, WorkdirProvider},
    },
    domain::{FileMap, ModuleConfig, RouterMode, ScaffoldContext},
    error::ScaffoldResult,
};

/// Main scaffolding service.
///
/// Owns no state between invocations; multiple scaffolds may run
/// concurrently in one process because each acquires its own uniquely-named
/// working directory.
pub struct ScaffoldService {
    runner: Box<dyn CommandRunner>,
    workdirs: Box<dyn WorkdirProvider>,
    collector: Box<dyn FileCollector>,
    manifests: Box<dyn ManifestEditor>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        runner: Box<dyn CommandRunner>,
        workdirs: Box<dyn WorkdirProvider>,
        collector: Box<dyn FileCollector>,
        manifests: Box<dyn ManifestEditor>,
    ) -> Self {
        Self {
            runner,
            workdirs,
            collector,
            manifests,
        }
    }

    /// Scaffold one configured Next.js module.
    ///
    /// This is the main use case - produces the portable file map consumed
    /// by the outer file-materialization system.
    #[instrument(skip_all, fields(project = %context.project.name))]
    pub fn scaffold(
        &self,
        config: &ModuleConfig,
        context: &ScaffoldContext,
    ) -> ScaffoldResult<FileMap> {
        // 1. Init
        let router = context.router_mode();
        info!(
            %router,
            nextjs_version = context.nextjs_version(),
            "Scaffolding Next.js module"
        );

        let workdir = self.workdirs.acquire()?;
        info!(workdir = %workdir.path().display(), "Working directory allocated");

        // 2-5. The pipeline runs against the scoped directory; releasing the
        // handle afterwards removes the directory on success and failure
        // alike, without touching the already-computed result.
        let result = self.run_pipeline(config, router, workdir.path());

        drop(workdir);

        match &result {
            Ok(files) => info!(files = files.len(), "Scaffold completed"),
            Err(e) => warn!(error = %e, "Scaffold aborted"),
        }
        result
    }

    fn run_pipeline(
        &self,
        config: &ModuleConfig,
        router: RouterMode,
        workdir: &std::path::Path,
    ) -> ScaffoldResult<FileMap> {
        // 2. Generate (fatal on failure)
        generator::invoke(
            self.runner.as_ref(),
            workdir,
            generator::SYNTHETIC_PROJECT_NAME,
            router,
        )?;

        let project_dir = workdir.join(generator::SYNTHETIC_PROJECT_NAME);

        // 3. Merge dependencies (manifest update failures only warn)
        if config.npm().is_empty() {
            info!("No dependency injections configured");
        } else if let Err(e) = self.manifests.merge_dependencies(&project_dir, config.npm()) {
            warn!(error = %e, "Dependency merge failed; continuing without it");
        }

        // 4. Collect
        let mut files = self.collector.collect(&project_dir);
        info!(files = files.len(), "Generated tree collected");

        // 5. Filter
        files.apply_removals(config.removals());

        Ok(files)
    }
}
