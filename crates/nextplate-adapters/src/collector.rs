//! Recursive tree collection into a `FileMap`.

use std::path::Path;

use nextplate_core::application::ports::FileCollector;
use nextplate_core::domain::{FileEntry, FileKind, FileMap};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Walks a generated project tree and collects every regular file.
///
/// Keys are relative to the root with forward-slash separators. Collection
/// is total: a missing root yields an empty map, unreadable files are
/// skipped with a warning, and traversal errors never abort the walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsCollector;

impl FsCollector {
    pub fn new() -> Self {
        Self
    }
}

impl FileCollector for FsCollector {
    fn collect(&self, root: &Path) -> FileMap {
        let mut files = FileMap::new();

        if !root.is_dir() {
            debug!(root = %root.display(), "Collection root missing; returning empty map");
            return files;
        }

        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(rel) = relative_key(root, entry.path()) else {
                continue;
            };

            match read_entry(entry.path(), &rel) {
                Ok(file) => files.insert(rel, file),
                Err(e) => warn!(path = %rel, error = %e, "Skipping unreadable file"),
            }
        }

        files
    }
}

/// Relative path with forward-slash separators, regardless of host
/// conventions.
fn relative_key(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

fn read_entry(path: &Path, rel: &str) -> std::io::Result<FileEntry> {
    let bytes = std::fs::read(path)?;
    Ok(match FileKind::classify(rel) {
        FileKind::Binary => FileEntry::binary(bytes),
        FileKind::Text => FileEntry::text(String::from_utf8_lossy(&bytes).into_owned()),
    })
}
