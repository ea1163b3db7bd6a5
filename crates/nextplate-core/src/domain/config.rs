//! Declarative module configuration consumed by the pipeline.
//!
//! The full module meta-data format belongs to the outer assembly system;
//! this crate only reads two substructures: the npm dependency injections
//! and the post-generation file removal list. Every level defaults to empty
//! so a partial JSON document deserializes cleanly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Module configuration as consumed by [`ScaffoldService`].
///
/// [`ScaffoldService`]: crate::application::ScaffoldService
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    pub dependencies: DependencySpec,
    pub generation: GenerationSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencySpec {
    pub npm: NpmDependencies,
}

/// Additive npm dependency mappings (package name → version constraint).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NpmDependencies {
    pub dependencies: BTreeMap<String, String>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl NpmDependencies {
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dev_dependencies.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSpec {
    pub files: FileRules,
}

/// File-level transformations applied after generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRules {
    /// Relative paths deleted from the generated file map.
    pub remove: Vec<String>,
}

impl ModuleConfig {
    /// The npm dependency injections for the manifest merge step.
    pub fn npm(&self) -> &NpmDependencies {
        &self.dependencies.npm
    }

    /// The post-collection removal list.
    pub fn removals(&self) -> &[String] {
        &self.generation.files.remove
    }
}
