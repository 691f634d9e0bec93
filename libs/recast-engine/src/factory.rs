use recast_api::{ConvertError, Dialect, FieldConverter};
use recast_converter_mysql::MySqlFieldConverter;
use recast_converter_oracle::OracleFieldConverter;
use recast_converter_postgres::PgFieldConverter;

/// Resolve the converter for a source name (`"MySQL"`, `"rds-mysql"`,
/// `"polardb-pg"`, `"oracle"`, ...).
pub fn converter_for(source_name: &str) -> Result<&'static dyn FieldConverter, ConvertError> {
    let dialect = Dialect::from_source_name(source_name)?;
    tracing::debug!(source = %source_name, dialect = %dialect, "resolved field converter");
    Ok(converter_for_dialect(dialect))
}

pub fn converter_for_dialect(dialect: Dialect) -> &'static dyn FieldConverter {
    match dialect {
        Dialect::MySql => &MySqlFieldConverter,
        Dialect::Oracle => &OracleFieldConverter,
        Dialect::PostgreSql => &PgFieldConverter,
    }
}
