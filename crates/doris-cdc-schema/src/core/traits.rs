//! Collaborator traits for catalog access and type translation.
//!
//! - [`CatalogAccess`]: Reads raw table, column and primary-key rows from a
//!   source catalog
//! - [`TypeTranslator`]: Maps a source column type to a target type string
//!
//! # Design Patterns
//!
//! - **Strategy**: `TypeTranslator` is injected per source dialect, so new
//!   dialects plug in without touching the assembler
//! - **Scoped cursor**: column and key queries hand back an owned stream; the
//!   caller drops it on every exit path, which releases the underlying cursor

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::{CatalogError, TranslateError};

/// One column as reported by the source catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRow {
    /// Column name.
    pub name: String,
    /// Column comment (`REMARKS`), if any.
    pub comment: Option<String>,
    /// Native type name (e.g., "INT", "VARCHAR", "BIGINT UNSIGNED").
    pub type_name: String,
    /// Column size / numeric precision. `None` when not applicable.
    pub precision: Option<u32>,
    /// Decimal digits / scale. `None` when not applicable.
    pub scale: Option<u32>,
}

/// One table as reported by the source catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    /// Table name.
    pub name: String,
    /// Table comment, if any.
    pub comment: Option<String>,
}

/// Read-only access to a source database catalog.
///
/// Column and primary-key queries return streams in catalog order. The
/// stream owns its cursor; dropping it releases the cursor.
#[async_trait]
pub trait CatalogAccess: Send + Sync {
    /// List the base tables of a database, with their comments.
    async fn tables(&self, database: &str) -> Result<Vec<TableInfo>, CatalogError>;

    /// Stream the columns of `database.table` in ordinal order.
    fn columns<'a>(
        &'a self,
        database: &'a str,
        table: &'a str,
    ) -> BoxStream<'a, Result<ColumnRow, CatalogError>>;

    /// Stream the primary-key column names of `database.table` in key order.
    fn primary_keys<'a>(
        &'a self,
        database: &'a str,
        table: &'a str,
    ) -> BoxStream<'a, Result<String, CatalogError>>;

    /// Get the catalog type identifier (e.g., "mysql").
    fn db_type(&self) -> &str;
}

/// Maps a source column type to a target-engine type string.
///
/// Must be deterministic. Closures with the same shape implement this trait.
pub trait TypeTranslator: Send + Sync {
    /// Translate `type_name` with its optional precision and scale.
    fn translate(
        &self,
        type_name: &str,
        precision: Option<u32>,
        scale: Option<u32>,
    ) -> Result<String, TranslateError>;
}

impl<F> TypeTranslator for F
where
    F: Fn(&str, Option<u32>, Option<u32>) -> Result<String, TranslateError> + Send + Sync,
{
    fn translate(
        &self,
        type_name: &str,
        precision: Option<u32>,
        scale: Option<u32>,
    ) -> Result<String, TranslateError> {
        self(type_name, precision, scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(
        type_name: &str,
        _precision: Option<u32>,
        _scale: Option<u32>,
    ) -> Result<String, TranslateError> {
        Ok(type_name.to_uppercase())
    }

    #[test]
    fn test_fn_item_is_translator() {
        assert_eq!(upper.translate("int", None, None).unwrap(), "INT");
    }

    #[test]
    fn test_closure_is_translator() {
        let translator = |name: &str, precision: Option<u32>, _scale: Option<u32>| match precision {
            Some(p) => Ok(format!("{}({})", name, p)),
            None => Err(TranslateError::MissingPrecision(name.to_string())),
        };
        assert_eq!(
            translator.translate("varchar", Some(12), None).unwrap(),
            "varchar(12)"
        );
        assert_eq!(
            translator.translate("varchar", None, None),
            Err(TranslateError::MissingPrecision("varchar".to_string()))
        );
    }
}
