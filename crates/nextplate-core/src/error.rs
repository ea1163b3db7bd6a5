//! Unified error handling for Nextplate Core.
//!
//! Only two conditions are fatal to a scaffold run: the external generator
//! failing (spawn, nonzero exit, or timeout) and the working directory not
//! being allocatable. Everything else in the pipeline degrades gracefully
//! with a `tracing` warning and never surfaces here.

use std::time::Duration;

use thiserror::Error;

/// Failure of the external generator subprocess.
///
/// `Exit` carries the fully captured output streams so a caller can diagnose
/// a failed run without re-executing the generator.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The generator binary could not be started at all.
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The generator ran but exited with a nonzero status.
    #[error("'{command}' exited with status {code}")]
    Exit {
        command: String,
        code: i32,
        stdout: String,
        stderr: String,
    },

    /// The generator did not finish within the configured time limit.
    #[error("'{command}' timed out after {timeout:?}")]
    TimedOut { command: String, timeout: Duration },
}

impl ProcessError {
    /// The command this error originated from.
    pub fn command(&self) -> &str {
        match self {
            Self::Spawn { command, .. }
            | Self::Exit { command, .. }
            | Self::TimedOut { command, .. } => command,
        }
    }
}

/// Root error type for scaffold operations.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The external generator failed. Fatal; aborts the pipeline.
    #[error("generator failed: {0}")]
    Generator(#[from] ProcessError),

    /// A scoped working directory could not be allocated.
    #[error("failed to allocate working directory: {reason}")]
    Workdir { reason: String },

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ScaffoldError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Generator(ProcessError::Spawn { command, .. }) => vec![
                format!("Could not start '{}'", command),
                "Ensure Node.js and npx are installed and on your PATH".into(),
            ],
            Self::Generator(ProcessError::Exit { stderr, .. }) => {
                let mut s = vec!["The generator ran but reported an error".into()];
                if !stderr.trim().is_empty() {
                    s.push(format!("Generator stderr:\n{}", stderr.trim()));
                }
                s.push("Check network access; create-next-app downloads packages".into());
                s
            }
            Self::Generator(ProcessError::TimedOut { timeout, .. }) => vec![
                format!("The generator exceeded the {timeout:?} limit"),
                "Increase the timeout or check network connectivity".into(),
            ],
            Self::Workdir { reason } => vec![
                format!("Working directory allocation failed: {}", reason),
                "Check permissions and free space in the system temp directory".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Nextplate".into(),
                "Please report it with the full log output (-vv)".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Generator(_) => ErrorCategory::Generator,
            Self::Workdir { .. } => ErrorCategory::Environment,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The external generator subprocess failed.
    Generator,
    /// The host environment refused a resource (temp dir, permissions).
    Environment,
    Internal,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_failure_keeps_captured_streams() {
        let err = ProcessError::Exit {
            command: "npx".into(),
            code: 1,
            stdout: "downloading...".into(),
            stderr: "ENOTFOUND registry.npmjs.org".into(),
        };
        assert_eq!(err.command(), "npx");
        assert!(err.to_string().contains("status 1"));

        let wrapped = ScaffoldError::from(err);
        assert_eq!(wrapped.category(), ErrorCategory::Generator);
        let suggestions = wrapped.suggestions().join("\n");
        assert!(suggestions.contains("ENOTFOUND"));
    }

    #[test]
    fn spawn_failure_suggests_checking_path() {
        let err = ScaffoldError::Generator(ProcessError::Spawn {
            command: "npx".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        assert!(err.suggestions().iter().any(|s| s.contains("PATH")));
    }

    #[test]
    fn workdir_failure_is_environment() {
        let err = ScaffoldError::Workdir {
            reason: "permission denied".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Environment);
    }
}
