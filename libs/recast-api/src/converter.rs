use std::fmt;

use crate::error::ConvertError;
use crate::logical::LogicalType;
use crate::value::{FieldValue, RawValue};

/// Source database family. Type codes are only meaningful together with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    MySql,
    Oracle,
    PostgreSql,
}

/// Recognized name suffixes, checked in order.
const SUFFIXES: [(&str, Dialect); 4] = [
    ("postgresql", Dialect::PostgreSql),
    ("pg", Dialect::PostgreSql),
    ("oracle", Dialect::Oracle),
    ("mysql", Dialect::MySql),
];

impl Dialect {
    pub fn name(self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::Oracle => "oracle",
            Dialect::PostgreSql => "postgresql",
        }
    }

    /// Resolve a source name such as `"Oracle"`, `"rds-mysql"` or `"polardb-pg"`.
    ///
    /// Matching is case-insensitive; the name must equal or end with one of
    /// `postgresql`, `pg`, `oracle`, `mysql`.
    pub fn from_source_name(name: &str) -> Result<Self, ConvertError> {
        let lowered = name.trim().to_ascii_lowercase();
        SUFFIXES
            .iter()
            .find(|(suffix, _)| lowered.ends_with(suffix))
            .map(|(_, dialect)| *dialect)
            .ok_or_else(|| ConvertError::UnsupportedDialect(name.to_string()))
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-dialect field converter.
///
/// Solves one task: turn a `(type code, raw value)` pair into a canonical
/// field value. Implementations are stateless and shared by any number of
/// threads once their dispatch table is built.
pub trait FieldConverter: Send + Sync {
    fn dialect(&self) -> Dialect;

    /// Convert one field. `raw == None` is SQL NULL.
    fn convert(&self, type_code: i32, raw: Option<&RawValue>) -> Result<FieldValue, ConvertError>;

    /// Logical type the adapter for `type_code` reports, if one is registered.
    fn logical_type(&self, type_code: i32) -> Option<LogicalType>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_name_matching() {
        assert_eq!(Dialect::from_source_name("MySQL").unwrap(), Dialect::MySql);
        assert_eq!(Dialect::from_source_name("oracle").unwrap(), Dialect::Oracle);
        assert_eq!(
            Dialect::from_source_name("PostgreSQL").unwrap(),
            Dialect::PostgreSql
        );
        assert_eq!(Dialect::from_source_name("PG").unwrap(), Dialect::PostgreSql);
        assert_eq!(
            Dialect::from_source_name("polardb-pg").unwrap(),
            Dialect::PostgreSql
        );
        assert_eq!(Dialect::from_source_name("rds-mysql").unwrap(), Dialect::MySql);
    }

    #[test]
    fn test_unknown_source_name() {
        for name in ["", "db2", "sqlserver", "mysql8", "oracle-19c"] {
            let err = Dialect::from_source_name(name).unwrap_err();
            assert_eq!(err, ConvertError::UnsupportedDialect(name.to_string()));
        }
    }
}
