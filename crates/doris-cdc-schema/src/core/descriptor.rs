//! Target table descriptor handed to the Doris table-creation path.

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::schema::{FieldSchema, SourceSchema};

/// Doris table data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataModel {
    Duplicate,
    Unique,
    Aggregate,
}

impl fmt::Display for DataModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataModel::Duplicate => "DUPLICATE",
            DataModel::Unique => "UNIQUE",
            DataModel::Aggregate => "AGGREGATE",
        };
        f.write_str(name)
    }
}

/// Shape of a Doris table derived from a [`SourceSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDescriptor {
    /// Table data model.
    pub model: DataModel,
    /// Fields in source column order.
    pub fields: IndexMap<String, FieldSchema>,
    /// Key columns.
    pub keys: Vec<String>,
    /// Hash distribution columns.
    pub distribute_keys: Vec<String>,
    /// Table comment.
    pub table_comment: Option<String>,
    /// Table properties passed through from the caller.
    pub properties: BTreeMap<String, String>,
}

impl TableDescriptor {
    /// Field names in column order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl SourceSchema {
    /// Project this schema onto a Doris unique-key table.
    ///
    /// Keys and distribution keys are both the source primary key. A table
    /// without a primary key yields empty key lists; whether that is
    /// acceptable is decided by the DDL builder.
    pub fn to_table_descriptor(&self, properties: &BTreeMap<String, String>) -> TableDescriptor {
        TableDescriptor {
            model: DataModel::Unique,
            fields: self.fields().clone(),
            keys: self.primary_keys().to_vec(),
            distribute_keys: self.primary_keys().to_vec(),
            table_comment: self.table_comment().map(str::to_string),
            properties: properties.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders() -> SourceSchema {
        SourceSchema::assemble(
            "shop",
            "orders",
            Some("customer orders".to_string()),
            vec![
                FieldSchema::new("id", "INT", None),
                FieldSchema::new("region", "VARCHAR(30)", None),
                FieldSchema::new("amount", "DECIMALV3(10,2)", Some("total".to_string())),
            ],
            vec!["region".to_string(), "id".to_string()],
        )
    }

    fn props() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("replication_num".to_string(), "1".to_string()),
            ("light_schema_change".to_string(), "true".to_string()),
        ])
    }

    #[test]
    fn test_descriptor_is_unique_model_keyed_on_pk() {
        let descriptor = orders().to_table_descriptor(&props());

        assert_eq!(descriptor.model, DataModel::Unique);
        assert_eq!(descriptor.keys, vec!["region", "id"]);
        assert_eq!(descriptor.distribute_keys, descriptor.keys);
        assert_eq!(
            descriptor.field_names().collect::<Vec<_>>(),
            vec!["id", "region", "amount"]
        );
        assert_eq!(descriptor.table_comment.as_deref(), Some("customer orders"));
        assert_eq!(descriptor.properties, props());
    }

    #[test]
    fn test_descriptor_without_pk_has_empty_keys() {
        let schema = SourceSchema::assemble(
            "shop",
            "audit_log",
            None,
            vec![FieldSchema::new("msg", "STRING", None)],
            vec![],
        );
        let descriptor = schema.to_table_descriptor(&BTreeMap::new());

        assert!(descriptor.keys.is_empty());
        assert!(descriptor.distribute_keys.is_empty());
        assert_eq!(descriptor.model, DataModel::Unique);
        assert!(descriptor.properties.is_empty());
    }

    #[test]
    fn test_descriptor_is_idempotent() {
        let schema = orders();
        let first = schema.to_table_descriptor(&props());
        let second = schema.to_table_descriptor(&props());
        assert_eq!(first, second);
    }

    #[test]
    fn test_data_model_display_and_serde() {
        assert_eq!(DataModel::Unique.to_string(), "UNIQUE");
        assert_eq!(DataModel::Duplicate.to_string(), "DUPLICATE");
        assert_eq!(DataModel::Aggregate.to_string(), "AGGREGATE");
        assert_eq!(serde_json::to_string(&DataModel::Unique).unwrap(), "\"UNIQUE\"");
        let parsed: DataModel = serde_json::from_str("\"AGGREGATE\"").unwrap();
        assert_eq!(parsed, DataModel::Aggregate);
    }

    #[test]
    fn test_descriptor_serializes_fields_in_order() {
        let json = serde_json::to_value(orders().to_table_descriptor(&props())).unwrap();
        let names: Vec<&str> = json["fields"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(json["model"], "UNIQUE");
        assert_eq!(json["distribute_keys"], serde_json::json!(["region", "id"]));
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"amount"));
    }
}
