//! Source table schema types.
//!
//! A [`SourceSchema`] is built once from a catalog read and never mutated
//! afterwards. Field order follows catalog column order.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A column translated to its target-engine type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    name: String,
    type_name: String,
    comment: Option<String>,
}

impl FieldSchema {
    /// Create a field from a column name, target type and optional comment.
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        comment: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            comment,
        }
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Target-engine type string (e.g., "DECIMALV3(10,2)").
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Column comment.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// Advisory finding about inconsistent catalog metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SchemaAnomaly {
    /// A primary-key column is not among the table's columns.
    MissingKeyColumn { column: String },
}

impl fmt::Display for SchemaAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaAnomaly::MissingKeyColumn { column } => {
                write!(f, "primary key column '{}' is not a column of the table", column)
            }
        }
    }
}

/// Column and key metadata for one source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSchema {
    database_name: String,
    table_name: String,
    table_comment: Option<String>,
    fields: IndexMap<String, FieldSchema>,
    primary_keys: Vec<String>,
    anomalies: Vec<SchemaAnomaly>,
}

impl SourceSchema {
    /// Fold translated fields and primary keys into a schema.
    ///
    /// Fields are keyed by name in the order given; a repeated name replaces
    /// the earlier field. Primary keys are kept exactly as given, and any key
    /// that names no field is recorded as an anomaly.
    pub(crate) fn assemble(
        database_name: impl Into<String>,
        table_name: impl Into<String>,
        table_comment: Option<String>,
        fields: impl IntoIterator<Item = FieldSchema>,
        primary_keys: Vec<String>,
    ) -> Self {
        let database_name = database_name.into();
        let table_name = table_name.into();

        let mut by_name = IndexMap::new();
        for field in fields {
            if by_name.insert(field.name.clone(), field).is_some() {
                debug!(
                    "{}.{}: catalog reported a duplicate column, keeping the last definition",
                    database_name, table_name
                );
            }
        }

        let anomalies: Vec<SchemaAnomaly> = primary_keys
            .iter()
            .filter(|key| !by_name.contains_key(key.as_str()))
            .map(|key| SchemaAnomaly::MissingKeyColumn {
                column: key.clone(),
            })
            .collect();

        for anomaly in &anomalies {
            warn!("Table {}.{}: {}", database_name, table_name, anomaly);
        }

        Self {
            database_name,
            table_name,
            table_comment,
            fields: by_name,
            primary_keys,
            anomalies,
        }
    }

    /// Source database name.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// Source table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Get the fully qualified table name.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.database_name, self.table_name)
    }

    /// Table comment.
    pub fn table_comment(&self) -> Option<&str> {
        self.table_comment.as_deref()
    }

    /// Fields in catalog column order.
    pub fn fields(&self) -> &IndexMap<String, FieldSchema> {
        &self.fields
    }

    /// Look up a field by column name.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.get(name)
    }

    /// Primary-key column names in catalog key order.
    pub fn primary_keys(&self) -> &[String] {
        &self.primary_keys
    }

    /// Check if the table has a primary key.
    pub fn has_pk(&self) -> bool {
        !self.primary_keys.is_empty()
    }

    /// Anomalies found while assembling the schema.
    pub fn anomalies(&self) -> &[SchemaAnomaly] {
        &self.anomalies
    }
}
