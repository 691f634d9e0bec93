//! Oracle field converter.
//!
//! Maps Oracle column type codes onto [`OracleAdapter`]s. Fractions are
//! nanoseconds (nine digits); character text keeps its declared charset.

mod adapter;
pub mod types;

use std::sync::LazyLock;

use recast_api::{ConvertError, Dialect, DispatchTable, FieldConverter, FieldValue, LogicalType, RawValue};

pub use adapter::OracleAdapter;

static TABLE: LazyLock<DispatchTable<OracleAdapter>> = LazyLock::new(|| {
    use OracleAdapter::*;
    use types::*;

    DispatchTable::from_entries(
        Dialect::Oracle,
        &[
            (NUMBER, Decimal),
            (BINARY_FLOAT, Double),
            (BINARY_DOUBLE, Double),
            (VARCHAR2, Character),
            (CHAR, Character),
            (CLOB, Character),
            (LONG, Character),
            (XMLTYPE, Character),
            (DATE, Date),
            (TIMESTAMP, Timestamp),
            (TIMESTAMP_TZ, TimestampWithZone),
            // LTZ values arrive already normalized with their session zone.
            (TIMESTAMP_LTZ, TimestampWithZone),
            (ROWID, TextObject),
            (UROWID, TextObject),
            (BFILE, TextObject),
            (BLOB, Binary),
            (RAW, Binary),
            (LONG_RAW, Binary),
            (INTERVAL_YM, IntervalYearToMonth),
            (INTERVAL_DS, IntervalDayToSecond),
        ],
    )
});

/// Dispatch table shared by every [`OracleFieldConverter`].
pub fn table() -> &'static DispatchTable<OracleAdapter> {
    &TABLE
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OracleFieldConverter;

impl FieldConverter for OracleFieldConverter {
    fn dialect(&self) -> Dialect {
        Dialect::Oracle
    }

    fn convert(&self, type_code: i32, raw: Option<&RawValue>) -> Result<FieldValue, ConvertError> {
        TABLE.lookup(type_code)?.convert(raw)
    }

    fn logical_type(&self, type_code: i32) -> Option<LogicalType> {
        TABLE.get(type_code).map(OracleAdapter::logical_type)
    }
}
