//! Package manifest read-modify-write.

use std::path::Path;

use nextplate_core::application::ports::ManifestEditor;
use nextplate_core::domain::NpmDependencies;
use nextplate_core::error::{ScaffoldError, ScaffoldResult};
use serde_json::{Map, Value};
use tracing::{info, warn};

const MANIFEST_FILE: &str = "package.json";

/// Merges configured npm dependencies into `package.json`.
///
/// Both sections merge right-biased: existing entries survive unless the
/// incoming mapping names the same package, in which case the incoming
/// version wins. Every other top-level manifest field is preserved
/// untouched, and the merge is idempotent.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonManifestEditor;

impl JsonManifestEditor {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestEditor for JsonManifestEditor {
    fn merge_dependencies(
        &self,
        project_dir: &Path,
        deps: &NpmDependencies,
    ) -> ScaffoldResult<()> {
        let manifest_path = project_dir.join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            warn!(
                path = %manifest_path.display(),
                "No package manifest found; skipping dependency merge"
            );
            return Ok(());
        }

        let raw = std::fs::read_to_string(&manifest_path).map_err(|e| internal("read", e))?;
        let mut manifest: Value =
            serde_json::from_str(&raw).map_err(|e| internal("parse", e))?;

        let Some(root) = manifest.as_object_mut() else {
            return Err(ScaffoldError::Internal {
                message: format!("{MANIFEST_FILE} root is not a JSON object"),
            });
        };

        merge_section(root, "dependencies", &deps.dependencies);
        merge_section(root, "devDependencies", &deps.dev_dependencies);

        let pretty =
            serde_json::to_string_pretty(&manifest).map_err(|e| internal("serialize", e))?;
        std::fs::write(&manifest_path, pretty + "\n").map_err(|e| internal("write", e))?;

        info!(
            dependencies = deps.dependencies.len(),
            dev_dependencies = deps.dev_dependencies.len(),
            "Dependencies merged into manifest"
        );
        Ok(())
    }
}

/// Right-biased additive merge of one manifest section.
fn merge_section(
    root: &mut Map<String, Value>,
    section: &str,
    incoming: &std::collections::BTreeMap<String, String>,
) {
    if incoming.is_empty() {
        return;
    }
    let target = root
        .entry(section)
        .or_insert_with(|| Value::Object(Map::new()));
    let Some(target) = target.as_object_mut() else {
        warn!(section, "Manifest section is not an object; skipping");
        return;
    };
    for (name, version) in incoming {
        target.insert(name.clone(), Value::String(version.clone()));
    }
}

fn internal(op: &str, e: impl std::fmt::Display) -> ScaffoldError {
    ScaffoldError::Internal {
        message: format!("failed to {op} {MANIFEST_FILE}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(json: &str) -> NpmDependencies {
        serde_json::from_str(json).unwrap()
    }

    fn write_manifest(dir: &Path, content: &str) {
        std::fs::write(dir.join(MANIFEST_FILE), content).unwrap();
    }

    fn read_manifest(dir: &Path) -> Value {
        let raw = std::fs::read_to_string(dir.join(MANIFEST_FILE)).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn merge_is_a_right_biased_union() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(
            dir.path(),
            r#"{"name": "next-app", "dependencies": {"a": "1", "b": "2"}}"#,
        );

        let incoming = deps(r#"{"dependencies": {"b": "3", "c": "4"}}"#);
        JsonManifestEditor::new()
            .merge_dependencies(dir.path(), &incoming)
            .unwrap();

        let manifest = read_manifest(dir.path());
        assert_eq!(manifest["dependencies"]["a"], "1");
        assert_eq!(manifest["dependencies"]["b"], "3");
        assert_eq!(manifest["dependencies"]["c"], "4");
        // untouched top-level fields survive
        assert_eq!(manifest["name"], "next-app");
    }

    #[test]
    fn dev_dependencies_merge_independently() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(
            dir.path(),
            r#"{"dependencies": {"react": "^19"}, "devDependencies": {"eslint": "^9"}}"#,
        );

        let incoming = deps(r#"{"devDependencies": {"prettier": "^3"}}"#);
        JsonManifestEditor::new()
            .merge_dependencies(dir.path(), &incoming)
            .unwrap();

        let manifest = read_manifest(dir.path());
        assert_eq!(manifest["dependencies"]["react"], "^19");
        assert_eq!(manifest["devDependencies"]["eslint"], "^9");
        assert_eq!(manifest["devDependencies"]["prettier"], "^3");
    }

    #[test]
    fn merge_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), r#"{"dependencies": {"a": "1"}}"#);

        let incoming = deps(r#"{"dependencies": {"b": "2"}, "devDependencies": {"c": "3"}}"#);
        let editor = JsonManifestEditor::new();
        editor.merge_dependencies(dir.path(), &incoming).unwrap();
        let once = read_manifest(dir.path());
        editor.merge_dependencies(dir.path(), &incoming).unwrap();
        assert_eq!(read_manifest(dir.path()), once);
    }

    #[test]
    fn missing_manifest_is_a_warning_level_noop() {
        let dir = tempfile::tempdir().unwrap();
        let incoming = deps(r#"{"dependencies": {"a": "1"}}"#);
        assert!(
            JsonManifestEditor::new()
                .merge_dependencies(dir.path(), &incoming)
                .is_ok()
        );
        assert!(!dir.path().join(MANIFEST_FILE).exists());
    }

    #[test]
    fn malformed_manifest_reports_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "not json");
        let incoming = deps(r#"{"dependencies": {"a": "1"}}"#);
        let err = JsonManifestEditor::new()
            .merge_dependencies(dir.path(), &incoming)
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Internal { .. }));
    }
}
