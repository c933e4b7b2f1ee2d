//! Catalog drivers.
//!
//! Each driver module implements [`CatalogAccess`](crate::core::CatalogAccess)
//! for one source database and is gated behind a Cargo feature:
//!
//! - [`mysql`]: MySQL/MariaDB `INFORMATION_SCHEMA` reader (feature `mysql`)

#[cfg(feature = "mysql")]
pub mod mysql;

#[cfg(feature = "mysql")]
pub use mysql::MysqlCatalog;
