//! Per-project scaffold context.
//!
//! The outer assembler passes a project name and a loosely-typed bag of
//! per-module field values. Only two keys are read here: the router-mode
//! selector and the framework version selector. Unrecognized keys are
//! ignored; absent keys fall back to documented defaults.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Field value key selecting between the app router and the legacy pages
/// router in the generated project.
const ROUTER_TYPE_KEY: &str = "routerType";

/// Field value key naming the requested Next.js version. Informational in
/// this layer; the generator invocation pins its own version.
const NEXTJS_VERSION_KEY: &str = "nextjsVersion";

/// Routing layout of the generated project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouterMode {
    /// Directory-convention routing under `src/app` (generator flag
    /// explicitly requested).
    #[default]
    App,
    /// Legacy `pages/` routing (generator default, flag omitted).
    Pages,
}

impl RouterMode {
    pub fn use_app_router(self) -> bool {
        matches!(self, Self::App)
    }
}

impl fmt::Display for RouterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::App => write!(f, "app"),
            Self::Pages => write!(f, "pages"),
        }
    }
}

/// Context for one scaffold invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldContext {
    pub project: ProjectInfo,
    pub module: ModuleValues,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    /// The real project name. Not used during generation; the pipeline
    /// generates under a synthetic name and the outer system renames later.
    pub name: String,
}

/// Loosely-typed per-module field values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleValues {
    #[serde(rename = "fieldValues")]
    pub field_values: BTreeMap<String, serde_json::Value>,
}

impl ScaffoldContext {
    /// Build a context from a project name and raw field values.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project: ProjectInfo {
                name: project_name.into(),
            },
            module: ModuleValues::default(),
        }
    }

    /// Set a field value, returning self for chaining.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.module.field_values.insert(key.into(), value.into());
        self
    }

    /// Router mode selector. Exactly `"pages"` selects the legacy layout;
    /// any other value or an absent key defaults to the app router.
    pub fn router_mode(&self) -> RouterMode {
        match self
            .module
            .field_values
            .get(ROUTER_TYPE_KEY)
            .and_then(serde_json::Value::as_str)
        {
            Some("pages") => RouterMode::Pages,
            _ => RouterMode::App,
        }
    }

    /// Requested Next.js version, defaulting to the latest major.
    pub fn nextjs_version(&self) -> &str {
        self.module
            .field_values
            .get(NEXTJS_VERSION_KEY)
            .and_then(serde_json::Value::as_str)
            .unwrap_or("latest")
    }
}
