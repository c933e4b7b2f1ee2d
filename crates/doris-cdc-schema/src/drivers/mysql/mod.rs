//! MySQL/MariaDB catalog driver.
//!
//! This module is only available when the `mysql` feature is enabled
//! (on by default):
//!
//! ```toml
//! [dependencies]
//! doris-cdc-schema = { version = "0.1", features = ["mysql"] }
//! ```
//!
//! # Supported Versions
//!
//! - MySQL 5.7+, 8.0+
//! - MariaDB 10.2+
//!
//! The catalog borrows a caller-owned SQLx pool; it never opens or closes
//! connections itself.

mod catalog;

pub use catalog::MysqlCatalog;
