//! The portable file-map abstraction exchanged with the outer assembler.
//!
//! A [`FileMap`] is an ordered mapping from POSIX-style relative path to a
//! tagged payload. Binary payloads (images, fonts) are carried base64-encoded
//! so the map can cross any transport; everything else is UTF-8 text.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ScaffoldError, ScaffoldResult};

/// Filename extensions collected as base64-encoded binary payloads.
///
/// Classification is determined solely by this set (case-insensitive);
/// every other file is treated as UTF-8 text.
const BINARY_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "ico", "woff", "woff2", "ttf", "eot", "svg",
];

/// How a file's content is represented in a [`FileMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Text,
    Binary,
}

impl FileKind {
    /// Classify a path by its extension against the fixed binary set.
    ///
    /// Only the final path segment is inspected, and a leading dot is a
    /// hidden-file marker rather than an extension separator: `.svg` has
    /// no extension and stays text.
    pub fn classify(path: &str) -> Self {
        let name = path.rsplit('/').next().unwrap_or(path);
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => {
                if BINARY_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
                    Self::Binary
                } else {
                    Self::Text
                }
            }
            _ => Self::Text,
        }
    }
}

/// A single generated file: a kind tag plus transport-safe content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub kind: FileKind,
    pub content: String,
}

impl FileEntry {
    /// A UTF-8 text entry.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: FileKind::Text,
            content: content.into(),
        }
    }

    /// A binary entry; the raw bytes are base64-encoded.
    pub fn binary(bytes: impl AsRef<[u8]>) -> Self {
        Self {
            kind: FileKind::Binary,
            content: BASE64.encode(bytes.as_ref()),
        }
    }

    /// Materialize the entry back into raw bytes.
    ///
    /// Text entries return their UTF-8 bytes; binary entries are decoded
    /// from base64.
    pub fn decode(&self) -> ScaffoldResult<Vec<u8>> {
        match self.kind {
            FileKind::Text => Ok(self.content.as_bytes().to_vec()),
            FileKind::Binary => {
                BASE64
                    .decode(&self.content)
                    .map_err(|e| ScaffoldError::Internal {
                        message: format!("invalid base64 payload: {e}"),
                    })
            }
        }
    }
}

/// Ordered mapping from relative path to [`FileEntry`].
///
/// Keys use forward-slash separators with no leading slash, regardless of
/// host path conventions. Iteration follows insertion (discovery) order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileMap(IndexMap<String, FileEntry>);

impl FileMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous entry at the same path.
    pub fn insert(&mut self, path: impl Into<String>, entry: FileEntry) {
        self.0.insert(path.into(), entry);
    }

    pub fn get(&self, path: &str) -> Option<&FileEntry> {
        self.0.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FileEntry)> {
        self.0.iter()
    }

    /// All paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Delete every listed path from the map (set-difference semantics).
    ///
    /// Paths not present are warned about and skipped; removing a
    /// nonexistent path is not an error. Empty `paths` is a no-op.
    pub fn apply_removals<S: AsRef<str>>(&mut self, paths: &[S]) {
        for path in paths {
            let path = path.as_ref();
            if self.0.shift_remove(path).is_none() {
                warn!(path, "removal target not found in generated files");
            }
        }
    }
}

impl IntoIterator for FileMap {
    type Item = (String, FileEntry);
    type IntoIter = indexmap::map::IntoIter<String, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, FileEntry)> for FileMap {
    fn from_iter<I: IntoIterator<Item = (String, FileEntry)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
