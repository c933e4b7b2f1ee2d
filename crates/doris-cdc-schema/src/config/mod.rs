//! Configuration loading and validation.

mod types;
mod validation;

pub use types::*;

use crate::error::Result;
use std::path::Path;

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }
}

impl SourceConfig {
    /// Whether `table` is selected for introspection.
    ///
    /// An empty table list selects every table.
    pub fn selects(&self, table: &str) -> bool {
        self.tables.is_empty() || self.tables.iter().any(|t| t == table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;

    #[test]
    fn test_from_yaml_full() {
        let config = Config::from_yaml(
            r#"
source:
  type: mysql
  database: shop
  tables: [orders, customers]
target:
  table_properties:
    replication_num: "1"
    light_schema_change: "true"
"#,
        )
        .unwrap();

        assert_eq!(config.source.database, "shop");
        assert!(config.source.selects("orders"));
        assert!(!config.source.selects("sessions"));
        assert_eq!(
            config.target.table_properties.get("replication_num").map(String::as_str),
            Some("1")
        );
    }

    #[test]
    fn test_from_yaml_defaults() {
        let config = Config::from_yaml("source:\n  database: shop\n").unwrap();

        assert_eq!(config.source.r#type, "mysql");
        assert!(config.source.tables.is_empty());
        assert!(config.source.selects("anything"));
        assert!(config.target.table_properties.is_empty());
    }

    #[test]
    fn test_from_yaml_rejects_bad_yaml() {
        let err = Config::from_yaml("source: [").unwrap_err();
        assert!(matches!(err, SchemaError::Yaml(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/doris-cdc-schema.yaml").unwrap_err();
        assert!(matches!(err, SchemaError::Io(_)));
    }
}
