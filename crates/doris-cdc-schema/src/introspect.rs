//! Reading a table's schema out of a source catalog.
//!
//! Introspection is sequential: columns are read and translated first, then
//! primary keys. Any catalog error aborts the call, so callers either get a
//! complete [`SourceSchema`] or an error, never a partial one.

use futures::StreamExt;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::schema::{FieldSchema, SourceSchema};
use crate::core::traits::{CatalogAccess, TypeTranslator};
use crate::error::{CatalogError, Result, SchemaError};

impl SourceSchema {
    /// Read the columns and primary key of `database.table` and build its schema.
    ///
    /// Each column's type is translated exactly once, with precision and
    /// scale passed through as reported (absent stays `None`). A translator
    /// failure is returned as [`SchemaError::TypeTranslation`] and stops the
    /// scan; catalog failures are returned as
    /// [`SchemaError::MetadataUnavailable`], as is a table for which the
    /// catalog reports no columns.
    pub async fn introspect<C, T>(
        catalog: &C,
        translator: &T,
        database: &str,
        table: &str,
        table_comment: Option<String>,
    ) -> Result<Self>
    where
        C: CatalogAccess + ?Sized,
        T: TypeTranslator + ?Sized,
    {
        debug!(
            "Introspecting {}.{} via {} catalog",
            database,
            table,
            catalog.db_type()
        );

        let fields = read_fields(catalog, translator, database, table).await?;
        let primary_keys = read_primary_keys(catalog, database, table).await?;

        let schema = SourceSchema::assemble(database, table, table_comment, fields, primary_keys);
        info!(
            "Introspected {}: {} columns, primary key [{}]",
            schema.full_name(),
            schema.fields().len(),
            schema.primary_keys().join(", ")
        );
        Ok(schema)
    }
}

async fn read_fields<C, T>(
    catalog: &C,
    translator: &T,
    database: &str,
    table: &str,
) -> Result<Vec<FieldSchema>>
where
    C: CatalogAccess + ?Sized,
    T: TypeTranslator + ?Sized,
{
    let mut rows = catalog.columns(database, table);
    let mut fields = Vec::new();

    while let Some(row) = rows.next().await {
        let row = row.map_err(|e| SchemaError::metadata(format!("{}.{}", database, table), e))?;
        let type_name = translator
            .translate(&row.type_name, row.precision, row.scale)
            .map_err(|source| SchemaError::TypeTranslation {
                column: row.name.clone(),
                source,
            })?;
        fields.push(FieldSchema::new(row.name, type_name, row.comment));
    }

    // A real table has at least one column; no rows means no such table.
    if fields.is_empty() {
        let object = format!("{}.{}", database, table);
        return Err(SchemaError::metadata(
            object.clone(),
            CatalogError::TableNotFound(object),
        ));
    }

    Ok(fields)
}

async fn read_primary_keys<C>(catalog: &C, database: &str, table: &str) -> Result<Vec<String>>
where
    C: CatalogAccess + ?Sized,
{
    let mut rows = catalog.primary_keys(database, table);
    let mut keys = Vec::new();

    while let Some(key) = rows.next().await {
        keys.push(key.map_err(|e| SchemaError::metadata(format!("{}.{}", database, table), e))?);
    }

    Ok(keys)
}

/// Introspect every table of the configured source database.
///
/// Tables are listed from the catalog, filtered by `source.tables`, and read
/// one after another in catalog order. The first failure aborts the run.
pub async fn introspect_database<C, T>(
    catalog: &C,
    translator: &T,
    config: &Config,
) -> Result<Vec<SourceSchema>>
where
    C: CatalogAccess + ?Sized,
    T: TypeTranslator + ?Sized,
{
    let database = config.source.database.as_str();
    let tables = catalog
        .tables(database)
        .await
        .map_err(|e| SchemaError::metadata(database, e))?;

    for wanted in &config.source.tables {
        if !tables.iter().any(|t| &t.name == wanted) {
            warn!(
                "Configured table {}.{} not found in source catalog",
                database, wanted
            );
        }
    }

    let mut schemas = Vec::new();
    for table in tables.into_iter().filter(|t| config.source.selects(&t.name)) {
        let schema =
            SourceSchema::introspect(catalog, translator, database, &table.name, table.comment)
                .await?;
        schemas.push(schema);
    }

    info!("Introspected {} tables from {}", schemas.len(), database);
    Ok(schemas)
}
