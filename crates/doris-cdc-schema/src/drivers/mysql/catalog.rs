//! MySQL/MariaDB catalog reader.
//!
//! Reads `INFORMATION_SCHEMA` with SQLx. Column and key queries are returned
//! as SQLx row streams, so the server cursor lives exactly as long as the
//! stream the caller holds.

use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;
use sqlx::mysql::{MySqlPool, MySqlRow};
use sqlx::Row;
use tracing::{debug, warn};

use crate::core::traits::{CatalogAccess, ColumnRow, TableInfo};
use crate::error::CatalogError;

// CAST string columns to CHAR and numeric to SIGNED to handle collation and
// unsignedness differences between MySQL and MariaDB. COLUMN_SIZE and
// DECIMAL_DIGITS stay NULL when they do not apply to the column type.
const COLUMNS_SQL: &str = r#"
    SELECT
        CAST(COLUMN_NAME AS CHAR(255)) AS COLUMN_NAME,
        CAST(NULLIF(COLUMN_COMMENT, '') AS CHAR(1024)) AS REMARKS,
        CAST(CONCAT(UPPER(DATA_TYPE),
                    IF(COLUMN_TYPE LIKE '%unsigned%', ' UNSIGNED', '')) AS CHAR(255)) AS TYPE_NAME,
        CAST(COALESCE(NUMERIC_PRECISION, CHARACTER_MAXIMUM_LENGTH, DATETIME_PRECISION)
             AS SIGNED) AS COLUMN_SIZE,
        CAST(COALESCE(NUMERIC_SCALE, DATETIME_PRECISION) AS SIGNED) AS DECIMAL_DIGITS
    FROM INFORMATION_SCHEMA.COLUMNS
    WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?
    ORDER BY ORDINAL_POSITION
"#;

const PRIMARY_KEYS_SQL: &str = r#"
    SELECT CAST(COLUMN_NAME AS CHAR(255)) AS COLUMN_NAME
    FROM INFORMATION_SCHEMA.KEY_COLUMN_USAGE
    WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ? AND CONSTRAINT_NAME = 'PRIMARY'
    ORDER BY ORDINAL_POSITION
"#;

const TABLES_SQL: &str = r#"
    SELECT
        CAST(TABLE_NAME AS CHAR(255)) AS TABLE_NAME,
        CAST(NULLIF(TABLE_COMMENT, '') AS CHAR(2048)) AS REMARKS
    FROM INFORMATION_SCHEMA.TABLES
    WHERE TABLE_SCHEMA = ? AND TABLE_TYPE = 'BASE TABLE'
    ORDER BY TABLE_NAME
"#;

/// MySQL/MariaDB catalog over a caller-owned connection pool.
#[derive(Debug, Clone)]
pub struct MysqlCatalog {
    pool: MySqlPool,
}

impl MysqlCatalog {
    /// Create a catalog reader on an existing pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn column_from_row(row: MySqlRow) -> Result<ColumnRow, CatalogError> {
        let name: String = row.try_get("COLUMN_NAME").map_err(malformed)?;
        let size: Option<i64> = row.try_get("COLUMN_SIZE").map_err(malformed)?;
        let digits: Option<i64> = row.try_get("DECIMAL_DIGITS").map_err(malformed)?;

        Ok(ColumnRow {
            precision: catalog_size(&name, size),
            scale: catalog_size(&name, digits),
            comment: row.try_get("REMARKS").map_err(malformed)?,
            type_name: row.try_get("TYPE_NAME").map_err(malformed)?,
            name,
        })
    }
}

#[async_trait]
impl CatalogAccess for MysqlCatalog {
    async fn tables(&self, database: &str) -> Result<Vec<TableInfo>, CatalogError> {
        let rows: Vec<MySqlRow> = sqlx::query(TABLES_SQL)
            .bind(database)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CatalogError::query("listing MySQL tables", e))?;

        debug!("Found {} base tables in {}", rows.len(), database);

        rows.into_iter()
            .map(|row| -> Result<TableInfo, CatalogError> {
                Ok(TableInfo {
                    name: row.try_get("TABLE_NAME").map_err(malformed)?,
                    comment: row.try_get("REMARKS").map_err(malformed)?,
                })
            })
            .collect()
    }

    fn columns<'a>(
        &'a self,
        database: &'a str,
        table: &'a str,
    ) -> BoxStream<'a, Result<ColumnRow, CatalogError>> {
        sqlx::query(COLUMNS_SQL)
            .bind(database)
            .bind(table)
            .fetch(&self.pool)
            .map(|row| {
                row.map_err(|e| CatalogError::query("loading MySQL columns", e))
                    .and_then(Self::column_from_row)
            })
            .boxed()
    }

    fn primary_keys<'a>(
        &'a self,
        database: &'a str,
        table: &'a str,
    ) -> BoxStream<'a, Result<String, CatalogError>> {
        sqlx::query(PRIMARY_KEYS_SQL)
            .bind(database)
            .bind(table)
            .fetch(&self.pool)
            .map(|row| {
                row.map_err(|e| CatalogError::query("loading MySQL primary key", e))
                    .and_then(|row| row.try_get::<String, _>("COLUMN_NAME").map_err(malformed))
            })
            .boxed()
    }

    fn db_type(&self) -> &str {
        "mysql"
    }
}

fn malformed(e: sqlx::Error) -> CatalogError {
    CatalogError::MalformedRow(e.to_string())
}

/// Narrow a catalog size to `u32`, keeping NULL as `None`.
///
/// Out-of-range values saturate rather than turning into "not applicable".
fn catalog_size(column: &str, value: Option<i64>) -> Option<u32> {
    value.map(|v| match u32::try_from(v) {
        Ok(size) => size,
        Err(_) if v < 0 => {
            warn!("Column {}: negative catalog size {}, using 0", column, v);
            0
        }
        Err(_) => u32::MAX,
    })
}
