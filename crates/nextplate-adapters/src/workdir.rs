//! Scoped temporary working directories.
//!
//! Each scaffold invocation owns one uniquely-named directory for its full
//! lifetime. The handle releases it on drop with an explicit, logged
//! best-effort delete; a cleanup failure never surfaces to the caller.

use std::path::Path;

use nextplate_core::application::ports::{Workdir, WorkdirProvider};
use nextplate_core::error::{ScaffoldError, ScaffoldResult};
use tempfile::TempDir;
use tracing::{debug, warn};

/// Allocates tempfile-backed working directories under the system temp dir.
#[derive(Debug, Clone, Copy, Default)]
pub struct TempWorkdirs;

impl TempWorkdirs {
    pub fn new() -> Self {
        Self
    }
}

impl WorkdirProvider for TempWorkdirs {
    fn acquire(&self) -> ScaffoldResult<Box<dyn Workdir>> {
        let dir = tempfile::Builder::new()
            .prefix("nextplate-")
            .tempdir()
            .map_err(|e| ScaffoldError::Workdir {
                reason: e.to_string(),
            })?;
        debug!(path = %dir.path().display(), "Temporary working directory created");
        Ok(Box::new(TempWorkdir { dir: Some(dir) }))
    }
}

struct TempWorkdir {
    dir: Option<TempDir>,
}

impl Workdir for TempWorkdir {
    fn path(&self) -> &Path {
        // `dir` is only None during drop.
        self.dir.as_ref().map(TempDir::path).unwrap_or(Path::new(""))
    }
}

impl Drop for TempWorkdir {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take() {
            let path = dir.path().to_path_buf();
            match dir.close() {
                Ok(()) => debug!(path = %path.display(), "Working directory removed"),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Working directory cleanup failed")
                }
            }
        }
    }
}
