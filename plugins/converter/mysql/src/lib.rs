//! MySQL field converter, keyed by binlog column type.

mod adapter;
pub mod types;

use std::sync::LazyLock;

use recast_api::{ConvertError, Dialect, DispatchTable, FieldConverter, FieldValue, LogicalType, RawValue};

pub use adapter::{MySqlAdapter, MySqlKind};

static TABLE: LazyLock<DispatchTable<MySqlAdapter>> = LazyLock::new(|| {
    use LogicalType as L;
    use MySqlKind::*;
    use types::*;

    let a = MySqlAdapter::new;
    DispatchTable::from_entries(
        Dialect::MySql,
        &[
            (DECIMAL, a(Decimal, L::BigDecimal)),
            (NEWDECIMAL, a(Decimal, L::BigDecimal)),
            (TINY, a(Integer, L::Integer)),
            (SHORT, a(Integer, L::Integer)),
            (LONG, a(Integer, L::Integer)),
            (INT24, a(Integer, L::Integer)),
            (LONGLONG, a(Integer, L::BigInteger)),
            (YEAR, a(Integer, L::Year)),
            (FLOAT, a(Float, L::Float)),
            (DOUBLE, a(Float, L::Double)),
            (TIMESTAMP, a(EpochTimestamp, L::Timestamp)),
            (TIMESTAMP2, a(EpochTimestamp, L::Timestamp)),
            (DATETIME, a(DateTime, L::DateTime)),
            (DATETIME2, a(DateTime, L::DateTime)),
            (DATE, a(Date, L::Date)),
            (NEWDATE, a(Date, L::Date)),
            (TIME, a(Time, L::Time)),
            (TIME2, a(Time, L::Time)),
            (VARCHAR, a(Character, L::String)),
            (VAR_STRING, a(Character, L::String)),
            (STRING, a(Character, L::String)),
            (ENUM, a(TextObject, L::String)),
            (SET, a(TextObject, L::String)),
            (JSON, a(TextObject, L::Json)),
            (BIT, a(TextObject, L::Bit)),
            (TINY_BLOB, a(Binary, L::Bytes)),
            (MEDIUM_BLOB, a(Binary, L::Bytes)),
            (LONG_BLOB, a(Binary, L::Bytes)),
            (BLOB, a(Binary, L::Bytes)),
            (GEOMETRY, a(Geometry, L::Geometry)),
        ],
    )
});

pub fn table() -> &'static DispatchTable<MySqlAdapter> {
    &TABLE
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlFieldConverter;

impl FieldConverter for MySqlFieldConverter {
    fn dialect(&self) -> Dialect {
        Dialect::MySql
    }

    fn convert(&self, type_code: i32, raw: Option<&RawValue>) -> Result<FieldValue, ConvertError> {
        TABLE.lookup(type_code)?.convert(raw)
    }

    fn logical_type(&self, type_code: i32) -> Option<LogicalType> {
        TABLE.get(type_code).map(MySqlAdapter::logical_type)
    }
}
