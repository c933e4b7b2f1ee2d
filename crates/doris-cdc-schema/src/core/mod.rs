//! Core types and collaborator traits.
//!
//! - [`schema`]: Source table schema (fields, primary keys, anomalies)
//! - [`descriptor`]: Doris table descriptor derived from a source schema
//! - [`traits`]: Catalog access and type translation seams
//!
//! # Architecture
//!
//! The core knows nothing about a particular database. Catalog readers live
//! in `drivers/` and type translators in `typemap/`; both are injected into
//! [`SourceSchema::introspect`](crate::core::SourceSchema::introspect).

pub mod descriptor;
pub mod schema;
pub mod traits;

pub use descriptor::{DataModel, TableDescriptor};
pub use schema::{FieldSchema, SchemaAnomaly, SourceSchema};
pub use traits::{CatalogAccess, ColumnRow, TableInfo, TypeTranslator};
