//! # doris-cdc-schema
//!
//! Source-table schema introspection for MySQL → Apache Doris CDC pipelines.
//!
//! This library reads a table's columns and primary key from a source
//! catalog and turns them into the table shape a Doris DDL builder needs:
//!
//! - **Catalog reading** through the [`CatalogAccess`] trait (MySQL driver
//!   included behind the `mysql` feature)
//! - **Type translation** through an injected [`TypeTranslator`]
//!   ([`MysqlToDoris`] for the MySQL dialect)
//! - **Descriptor assembly**: unique-key model, keys and hash distribution on
//!   the source primary key, caller-supplied table properties
//!
//! It does not run DDL, own connections, or move data.
//!
//! ## Example
//!
//! ```rust,no_run
//! use doris_cdc_schema::{MysqlCatalog, MysqlToDoris, SourceSchema};
//! use std::collections::BTreeMap;
//!
//! # async fn run(pool: sqlx::MySqlPool) -> doris_cdc_schema::Result<()> {
//! let catalog = MysqlCatalog::new(pool);
//! let schema =
//!     SourceSchema::introspect(&catalog, &MysqlToDoris::new(), "shop", "orders", None).await?;
//! let descriptor = schema.to_table_descriptor(&BTreeMap::new());
//! println!("{} keys: {:?}", descriptor.model, descriptor.keys);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod drivers;
pub mod error;
pub mod introspect;
pub mod typemap;

// Re-exports for convenient access
pub use crate::config::{Config, SourceConfig, TargetConfig};
pub use crate::core::{
    CatalogAccess, ColumnRow, DataModel, FieldSchema, SchemaAnomaly, SourceSchema,
    TableDescriptor, TableInfo, TypeTranslator,
};
#[cfg(feature = "mysql")]
pub use drivers::MysqlCatalog;
pub use error::{CatalogError, Result, SchemaError, TranslateError};
pub use introspect::introspect_database;
pub use typemap::{mysql_to_doris, MysqlToDoris};
