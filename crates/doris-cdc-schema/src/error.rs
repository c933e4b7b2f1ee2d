//! Error types for schema introspection.

use thiserror::Error;

/// Main error type for introspection and translation.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Catalog query failed (connectivity, permission, missing object).
    #[error("Metadata unavailable for {object}: {source}")]
    MetadataUnavailable {
        object: String,
        #[source]
        source: CatalogError,
    },

    /// The type translator rejected a column's source type.
    #[error("Type translation failed for column {column}: {source}")]
    TypeTranslation {
        column: String,
        #[source]
        source: TranslateError,
    },

    /// Configuration error (invalid YAML, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SchemaError {
    /// Create a MetadataUnavailable error for a catalog object
    /// (`database` or `database.table`).
    pub fn metadata(object: impl Into<String>, source: CatalogError) -> Self {
        SchemaError::MetadataUnavailable {
            object: object.into(),
            source,
        }
    }

    /// Whether the failure came from the catalog rather than from translation.
    pub fn is_metadata_unavailable(&self) -> bool {
        matches!(self, SchemaError::MetadataUnavailable { .. })
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Error raised by a [`CatalogAccess`](crate::core::CatalogAccess) implementation.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A catalog query failed.
    #[error("{context}: {source}")]
    Query {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// A catalog row could not be decoded.
    #[error("malformed catalog row: {0}")]
    MalformedRow(String),

    /// The catalog could not be reached at all.
    #[error("{0}")]
    Unavailable(String),

    /// The catalog reported no columns for the table.
    #[error("table {0} not found")]
    TableNotFound(String),
}

impl CatalogError {
    /// Wrap a driver error with context about the query that failed.
    pub fn query(
        context: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        CatalogError::Query {
            context: context.into(),
            source: source.into(),
        }
    }
}

/// Error raised by a [`TypeTranslator`](crate::core::TypeTranslator).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The source type is outside the translator's vocabulary.
    #[error("unsupported source type '{0}'")]
    UnsupportedType(String),

    /// The source type needs a length/precision the catalog did not report.
    #[error("source type '{0}' requires a length or precision")]
    MissingPrecision(String),
}

/// Result type alias for introspection operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_error_display() {
        let err = SchemaError::metadata(
            "shop.orders",
            CatalogError::Unavailable("connection refused".to_string()),
        );
        assert!(err.is_metadata_unavailable());
        assert_eq!(
            err.to_string(),
            "Metadata unavailable for shop.orders: connection refused"
        );
    }

    #[test]
    fn test_format_detailed_includes_chain() {
        let err = SchemaError::TypeTranslation {
            column: "geo".to_string(),
            source: TranslateError::UnsupportedType("POINTZ".to_string()),
        };
        let detailed = err.format_detailed();
        assert!(detailed.starts_with("Error: Type translation failed for column geo"));
        assert!(detailed.contains("Caused by:\n  1: unsupported source type 'POINTZ'"));
    }

    #[test]
    fn test_catalog_query_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = CatalogError::query("reading columns", io);
        assert_eq!(err.to_string(), "reading columns: access denied");
        assert!(std::error::Error::source(&err).is_some());
    }
}
