//! Type mapping between MySQL and Apache Doris.

use tracing::warn;

use crate::core::traits::TypeTranslator;
use crate::error::TranslateError;

const BOOLEAN: &str = "BOOLEAN";
const TINYINT: &str = "TINYINT";
const SMALLINT: &str = "SMALLINT";
const INT: &str = "INT";
const BIGINT: &str = "BIGINT";
const LARGEINT: &str = "LARGEINT";
const FLOAT: &str = "FLOAT";
const DOUBLE: &str = "DOUBLE";
const DECIMAL_V3: &str = "DECIMALV3";
const DATE_V2: &str = "DATEV2";
const DATETIME_V2: &str = "DATETIMEV2";
const CHAR: &str = "CHAR";
const VARCHAR: &str = "VARCHAR";
const STRING: &str = "STRING";
const JSON: &str = "JSON";

/// Largest Doris DECIMALV3 precision.
const MAX_DECIMAL_PRECISION: u32 = 38;
/// Largest Doris CHAR length in bytes.
const MAX_CHAR_LENGTH: u64 = 255;
/// Largest Doris VARCHAR length in bytes.
const MAX_VARCHAR_LENGTH: u64 = 65533;
/// MySQL lengths are in characters; Doris lengths are in UTF-8 bytes.
const UTF8_BYTES_PER_CHAR: u64 = 3;

/// MySQL → Doris type translator.
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlToDoris;

impl MysqlToDoris {
    /// Create a new MySQL to Doris translator.
    pub fn new() -> Self {
        Self
    }
}

impl TypeTranslator for MysqlToDoris {
    fn translate(
        &self,
        type_name: &str,
        precision: Option<u32>,
        scale: Option<u32>,
    ) -> Result<String, TranslateError> {
        mysql_to_doris(type_name, precision, scale)
    }
}

/// Map a MySQL type name (as reported by the catalog) to a Doris type.
///
/// `precision` is the column size (character length for string types) and
/// `scale` the decimal digits (fractional seconds for temporal types).
pub fn mysql_to_doris(
    mysql_type: &str,
    precision: Option<u32>,
    scale: Option<u32>,
) -> Result<String, TranslateError> {
    let upper = mysql_type.trim().to_ascii_uppercase();
    let mut base = upper.as_str();
    let mut unsigned = false;
    for suffix in [" ZEROFILL", " UNSIGNED"] {
        if let Some(stripped) = base.strip_suffix(suffix) {
            base = stripped.trim_end();
            unsigned |= suffix == " UNSIGNED";
        }
    }

    let doris = match base {
        // Boolean
        "BOOLEAN" | "BOOL" => BOOLEAN.to_string(),
        "BIT" => match precision {
            Some(bits) if bits > 1 => {
                warn!("{}({}) has no Doris bit type, mapping to {}", base, bits, STRING);
                STRING.to_string()
            }
            _ => BOOLEAN.to_string(),
        },

        // Integer types, widened when unsigned
        "TINYINT" if unsigned => SMALLINT.to_string(),
        "TINYINT" => TINYINT.to_string(),
        "SMALLINT" if unsigned => INT.to_string(),
        "SMALLINT" => SMALLINT.to_string(),
        "MEDIUMINT" => INT.to_string(),
        "INT" | "INTEGER" if unsigned => BIGINT.to_string(),
        "INT" | "INTEGER" => INT.to_string(),
        "BIGINT" if unsigned => LARGEINT.to_string(),
        "BIGINT" => BIGINT.to_string(),
        "YEAR" => SMALLINT.to_string(),

        // Floating point
        "FLOAT" => FLOAT.to_string(),
        "DOUBLE" | "DOUBLE PRECISION" | "REAL" => DOUBLE.to_string(),

        // Decimal/numeric
        "DECIMAL" | "NUMERIC" | "DEC" | "FIXED" => match precision {
            Some(p) if p > 0 && p <= MAX_DECIMAL_PRECISION => {
                format!("{}({},{})", DECIMAL_V3, p, scale.unwrap_or(0))
            }
            _ => {
                warn!(
                    "{} precision {:?} exceeds {} {} digits, mapping to {}",
                    base, precision, DECIMAL_V3, MAX_DECIMAL_PRECISION, STRING
                );
                STRING.to_string()
            }
        },

        // Date/time types
        "DATE" => DATE_V2.to_string(),
        "DATETIME" | "TIMESTAMP" => {
            let fsp = scale.filter(|s| (1..=6).contains(s)).unwrap_or(0);
            format!("{}({})", DATETIME_V2, fsp)
        }
        "TIME" => STRING.to_string(),

        // String types
        "CHAR" => {
            let len = byte_length(mysql_type, precision)?;
            if len > MAX_VARCHAR_LENGTH {
                STRING.to_string()
            } else if len > MAX_CHAR_LENGTH {
                format!("{}({})", VARCHAR, len)
            } else {
                format!("{}({})", CHAR, len)
            }
        }
        "VARCHAR" => {
            let len = byte_length(mysql_type, precision)?;
            if len > MAX_VARCHAR_LENGTH {
                STRING.to_string()
            } else {
                format!("{}({})", VARCHAR, len)
            }
        }
        "TINYTEXT" | "TEXT" | "MEDIUMTEXT" | "LONGTEXT" | "ENUM" | "SET" => STRING.to_string(),

        // Binary types
        "BINARY" | "VARBINARY" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" => {
            STRING.to_string()
        }

        // JSON
        "JSON" => JSON.to_string(),

        // Spatial types (stored as WKT/WKB text)
        "GEOMETRY" | "POINT" | "LINESTRING" | "POLYGON" | "MULTIPOINT" | "MULTILINESTRING"
        | "MULTIPOLYGON" | "GEOMETRYCOLLECTION" | "GEOMCOLLECTION" => STRING.to_string(),

        _ => return Err(TranslateError::UnsupportedType(mysql_type.to_string())),
    };

    Ok(doris)
}

/// Doris byte length for a MySQL character length.
fn byte_length(mysql_type: &str, precision: Option<u32>) -> Result<u64, TranslateError> {
    precision
        .map(|chars| u64::from(chars) * UTF8_BYTES_PER_CHAR)
        .ok_or_else(|| TranslateError::MissingPrecision(mysql_type.to_string()))
}
