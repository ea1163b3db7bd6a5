//! Scripted command runner for testing.
//!
//! Stands in for the external generator: instead of spawning a process it
//! materializes a fixture tree under `cwd/<project_name>/` and records the
//! invocation so tests can assert on the argument vector.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use nextplate_core::application::ports::CommandRunner;
use nextplate_core::error::ProcessError;

/// One recorded `run` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Test double for [`CommandRunner`].
#[derive(Debug, Clone)]
pub struct ScriptedRunner {
    project_name: String,
    files: Arc<Vec<(String, Vec<u8>)>>,
    exit_failure: Option<(i32, String)>,
    invocations: Arc<Mutex<Vec<Invocation>>>,
}

impl ScriptedRunner {
    /// A runner that writes `files` (relative path, bytes) under
    /// `cwd/<project_name>/` and then reports success.
    pub fn new<P, B>(project_name: impl Into<String>, files: Vec<(P, B)>) -> Self
    where
        P: Into<String>,
        B: Into<Vec<u8>>,
    {
        Self {
            project_name: project_name.into(),
            files: Arc::new(
                files
                    .into_iter()
                    .map(|(p, b)| (p.into(), b.into()))
                    .collect(),
            ),
            exit_failure: None,
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A runner that writes nothing and fails with the given exit status.
    pub fn failing(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            project_name: String::new(),
            files: Arc::new(Vec::new()),
            exit_failure: Some((code, stderr.into())),
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All recorded invocations, in call order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &str, args: &[String], cwd: &Path) -> Result<(), ProcessError> {
        self.invocations.lock().unwrap().push(Invocation {
            command: command.to_string(),
            args: args.to_vec(),
            cwd: cwd.to_path_buf(),
        });

        if let Some((code, stderr)) = &self.exit_failure {
            return Err(ProcessError::Exit {
                command: command.to_string(),
                code: *code,
                stdout: String::new(),
                stderr: stderr.clone(),
            });
        }

        let root = cwd.join(&self.project_name);
        for (rel, bytes) in self.files.iter() {
            let path = root.join(rel);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|source| ProcessError::Spawn {
                    command: command.to_string(),
                    source,
                })?;
            }
            std::fs::write(&path, bytes).map_err(|source| ProcessError::Spawn {
                command: command.to_string(),
                source,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_fixture_tree_and_records_invocation() {
        let dir = tempfile::tempdir().unwrap();
        let runner = ScriptedRunner::new(
            "next-app",
            vec![("package.json", "{}"), ("src/app/page.tsx", "export")],
        );

        runner
            .run("npx", &["--yes".to_string()], dir.path())
            .unwrap();

        assert!(dir.path().join("next-app/package.json").is_file());
        assert!(dir.path().join("next-app/src/app/page.tsx").is_file());
        let invocations = runner.invocations();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].command, "npx");
    }

    #[test]
    fn failing_runner_reports_exit_status() {
        let dir = tempfile::tempdir().unwrap();
        let runner = ScriptedRunner::failing(1, "network down");
        let err = runner.run("npx", &[], dir.path()).unwrap_err();
        assert!(matches!(err, ProcessError::Exit { code: 1, .. }));
    }
}
