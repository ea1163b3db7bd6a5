//! Implementation of the `nextplate generate` command.
//!
//! Responsibility: translate CLI arguments into a module configuration and
//! scaffold context, call the core scaffold service, and either write the
//! resulting file map to disk or present it. No business logic lives here.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, info, instrument};

use nextplate_adapters::{FsCollector, JsonManifestEditor, ShellRunner, TempWorkdirs};
use nextplate_core::{
    application::ScaffoldService,
    domain::{FileMap, ModuleConfig, ScaffoldContext},
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `nextplate generate` command.
///
/// Dispatch sequence:
/// 1. Load and parse the module configuration file
/// 2. Build the scaffold context from flags and app-config defaults
/// 3. Wire the production adapters and run the pipeline
/// 4. Write the file map to `--out`, or list/serialize it
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if args.name.trim().is_empty() {
        return Err(CliError::InvalidInput {
            message: "project name must not be empty".into(),
        });
    }

    // 1. Module configuration
    let module = load_module_config(&args.module_config)?;
    debug!(
        dependencies = module.npm().dependencies.len(),
        dev_dependencies = module.npm().dev_dependencies.len(),
        removals = module.removals().len(),
        "Module configuration loaded"
    );

    // 2. Scaffold context
    let mut context = ScaffoldContext::new(&args.name);
    let router = args
        .router
        .map(|r| r.as_field_value().to_string())
        .or(config.defaults.router.clone());
    if let Some(router) = router {
        context = context.with_field("routerType", router);
    }
    let version = args.nextjs_version.or(config.defaults.nextjs_version);
    if let Some(version) = version {
        context = context.with_field("nextjsVersion", version);
    }

    // 3. Wire adapters and scaffold
    let timeout = args.timeout.or(config.defaults.timeout_secs);
    let runner = match timeout {
        Some(secs) => ShellRunner::with_timeout(Duration::from_secs(secs)),
        None => ShellRunner::new(),
    };
    let service = ScaffoldService::new(
        Box::new(runner),
        Box::new(TempWorkdirs::new()),
        Box::new(FsCollector::new()),
        Box::new(JsonManifestEditor::new()),
    );

    // In JSON mode stdout carries exactly one parseable document, so all
    // human progress lines are dropped.
    let json_mode = output.format() == OutputFormat::Json;
    if !json_mode {
        output.header(&format!("Scaffolding '{}'...", args.name))?;
    }
    let files = service.scaffold(&module, &context).map_err(CliError::Core)?;
    info!(files = files.len(), "Scaffold finished");

    // 4. Deliver the result
    match &args.out {
        Some(dir) => {
            write_files(dir, &files)?;
            if json_mode {
                println!("{}", render_json(&files)?);
            } else {
                output.success(&format!(
                    "Wrote {} files to {}",
                    files.len(),
                    dir.display()
                ))?;
                if !output.is_quiet() {
                    output.print("")?;
                    output.print("Next steps:")?;
                    output.print(&format!("  cd {}", dir.display()))?;
                    output.print("  npm install")?;
                }
            }
        }
        None => present(&files, &output)?,
    }

    Ok(())
}

/// Parse the module configuration JSON document.
fn load_module_config(path: &Path) -> CliResult<ModuleConfig> {
    let raw = std::fs::read_to_string(path).map_err(|e| CliError::ConfigError {
        message: format!("cannot read module config {}: {e}", path.display()),
        source: Some(Box::new(e)),
    })?;
    serde_json::from_str(&raw).map_err(|e| CliError::ConfigError {
        message: format!("cannot parse module config {}: {e}", path.display()),
        source: Some(Box::new(e)),
    })
}

/// Materialize a file map under `root`, decoding binary payloads.
fn write_files(root: &Path, files: &FileMap) -> CliResult<()> {
    for (rel, entry) in files.iter() {
        let target = root.join(rel);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, entry.decode().map_err(CliError::Core)?)?;
    }
    Ok(())
}

/// Serialize a file map as the one JSON document the machine mode emits.
fn render_json(files: &FileMap) -> CliResult<String> {
    serde_json::to_string_pretty(files).map_err(|e| CliError::ConfigError {
        message: format!("cannot serialize file map: {e}"),
        source: Some(Box::new(e)),
    })
}

/// List the file map on stdout in the resolved output format.
fn present(files: &FileMap, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        // Bypass the output manager: the JSON document must stay parseable
        // in non-TTY pipes.
        println!("{}", render_json(files)?);
        return Ok(());
    }

    output.header(&format!("{} generated files:", files.len()))?;
    for (path, entry) in files.iter() {
        output.print(&format!("  {path} ({:?})", entry.kind))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nextplate_core::domain::FileEntry;

    #[test]
    fn module_config_load_reports_missing_file() {
        let err = load_module_config(Path::new("/nextplate/missing.json")).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn module_config_load_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("module.json");
        std::fs::write(&path, "not json").unwrap();
        let err = load_module_config(&path).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn rendered_json_is_a_single_parseable_document() {
        let mut files = FileMap::new();
        files.insert("package.json", FileEntry::text("{}"));
        files.insert("public/logo.svg", FileEntry::binary(b"<svg/>"));

        let json = render_json(&files).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["package.json"]["kind"], "text");
        assert_eq!(parsed["public/logo.svg"]["kind"], "binary");
    }

    #[test]
    fn write_files_creates_parents_and_decodes_binary() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = FileMap::new();
        files.insert("src/app/page.tsx", FileEntry::text("page"));
        files.insert("public/logo.svg", FileEntry::binary(b"<svg/>"));

        write_files(dir.path(), &files).unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("src/app/page.tsx")).unwrap(),
            "page"
        );
        assert_eq!(
            std::fs::read(dir.path().join("public/logo.svg")).unwrap(),
            b"<svg/>"
        );
    }
}
