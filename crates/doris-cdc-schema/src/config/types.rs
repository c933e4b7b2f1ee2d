//! Configuration type definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Source catalog configuration (MySQL).
    pub source: SourceConfig,

    /// Target table configuration (Doris).
    #[serde(default)]
    pub target: TargetConfig,
}

/// Source catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Database type (always "mysql" for now).
    #[serde(default = "default_mysql")]
    pub r#type: String,

    /// Database to introspect.
    pub database: String,

    /// Tables to introspect (default: all base tables).
    #[serde(default)]
    pub tables: Vec<String>,
}

/// Target table configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Properties attached to every generated table descriptor.
    #[serde(default)]
    pub table_properties: BTreeMap<String, String>,
}

fn default_mysql() -> String {
    "mysql".to_string()
}
