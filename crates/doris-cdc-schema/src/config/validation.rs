//! Configuration validation.

use super::Config;
use crate::error::{Result, SchemaError};

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    if config.source.r#type != "mysql" {
        return Err(SchemaError::Config(format!(
            "source.type must be 'mysql', got '{}'",
            config.source.r#type
        )));
    }
    if config.source.database.trim().is_empty() {
        return Err(SchemaError::Config("source.database is required".into()));
    }
    if config.source.tables.iter().any(|t| t.trim().is_empty()) {
        return Err(SchemaError::Config(
            "source.tables must not contain empty names".into(),
        ));
    }

    if config
        .target
        .table_properties
        .keys()
        .any(|k| k.trim().is_empty())
    {
        return Err(SchemaError::Config(
            "target.table_properties keys must not be empty".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SourceConfig, TargetConfig};
    use std::collections::BTreeMap;

    fn valid_config() -> Config {
        Config {
            source: SourceConfig {
                r#type: "mysql".to_string(),
                database: "shop".to_string(),
                tables: vec![],
            },
            target: TargetConfig {
                table_properties: BTreeMap::from([(
                    "replication_num".to_string(),
                    "3".to_string(),
                )]),
            },
        }
    }

    fn config_error(config: &Config) -> String {
        match validate(config) {
            Err(SchemaError::Config(msg)) => msg,
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_wrong_source_type() {
        let mut config = valid_config();
        config.source.r#type = "postgres".to_string();
        assert!(config_error(&config).contains("source.type must be 'mysql'"));
    }

    #[test]
    fn test_missing_database() {
        let mut config = valid_config();
        config.source.database = "  ".to_string();
        assert!(config_error(&config).contains("source.database"));
    }

    #[test]
    fn test_blank_table_name() {
        let mut config = valid_config();
        config.source.tables = vec!["orders".to_string(), "".to_string()];
        assert!(config_error(&config).contains("source.tables"));
    }

    #[test]
    fn test_blank_property_key() {
        let mut config = valid_config();
        config
            .target
            .table_properties
            .insert(" ".to_string(), "x".to_string());
        assert!(config_error(&config).contains("table_properties"));
    }
}
