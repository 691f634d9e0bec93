//! PostgreSQL field converter, keyed by built-in type OID.

mod adapter;
pub mod oid;

use std::sync::LazyLock;

use recast_api::{ConvertError, Dialect, DispatchTable, FieldConverter, FieldValue, LogicalType, RawValue};

pub use adapter::{PgAdapter, PgKind};

static TABLE: LazyLock<DispatchTable<PgAdapter>> = LazyLock::new(|| {
    use LogicalType as L;
    use PgKind::*;
    use oid::*;

    let a = PgAdapter::new;
    DispatchTable::from_entries(
        Dialect::PostgreSql,
        &[
            // ---- numeric ----
            (INT2, a(Integer, L::Integer)),
            (INT4, a(Integer, L::Integer)),
            (INT8, a(Integer, L::BigInteger)),
            (OID, a(Integer, L::Long)),
            (NUMERIC, a(Decimal, L::BigDecimal)),
            (FLOAT4, a(Float, L::Float)),
            (FLOAT8, a(Float, L::Float)),
            // ---- character ----
            (BPCHAR, a(Character, L::String)),
            (CHAR, a(Character, L::String)),
            (VARCHAR, a(Character, L::String)),
            (TEXT, a(Character, L::String)),
            (NAME, a(Character, L::String)),
            // ---- date/time ----
            (DATE, a(Date, L::Date)),
            (TIME, a(Time, L::Time)),
            (TIMETZ, a(TimeWithZone, L::TimeTz)),
            (TIMESTAMP, a(Timestamp, L::Timestamp)),
            (TIMESTAMPTZ, a(TimestampWithZone, L::TimestampTimeZone)),
            // ---- binary ----
            (BYTEA, a(Binary, L::Bytes)),
            (JSONB, a(Binary, L::Bytes)),
            // ---- text pass-through ----
            (BOX, a(TextObject, L::Box)),
            (CIDR, a(TextObject, L::Cidr)),
            (CIRCLE, a(TextObject, L::Circle)),
            (JSON, a(TextObject, L::String)),
            (MONEY, a(TextObject, L::Money)),
            (LINE, a(TextObject, L::Line)),
            (LSEG, a(TextObject, L::Lseg)),
            (MACADDR, a(TextObject, L::MacAddr)),
            (MACADDR8, a(TextObject, L::MacAddr)),
            (PATH, a(TextObject, L::Path)),
            (PG_LSN, a(TextObject, L::Long)),
            (POINT, a(TextObject, L::Point)),
            (POLYGON, a(TextObject, L::Polygon)),
            (INET, a(TextObject, L::Inet)),
            (INTERVAL, a(TextObject, L::Interval)),
            (TSQUERY, a(TextObject, L::String)),
            (TSVECTOR, a(TextObject, L::String)),
            (TXID_SNAPSHOT, a(TextObject, L::String)),
            (UUID, a(TextObject, L::String)),
            (XML, a(TextObject, L::Xml)),
            (BOOL, a(TextObject, L::Boolean)),
            (BIT, a(TextObject, L::Bit)),
            (BIT_ARRAY, a(TextObject, L::Bit)),
            (VARBIT, a(TextObject, L::VarBit)),
        ],
    )
});

pub fn table() -> &'static DispatchTable<PgAdapter> {
    &TABLE
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PgFieldConverter;

impl FieldConverter for PgFieldConverter {
    fn dialect(&self) -> Dialect {
        Dialect::PostgreSql
    }

    fn convert(&self, type_code: i32, raw: Option<&RawValue>) -> Result<FieldValue, ConvertError> {
        TABLE.lookup(type_code)?.convert(raw)
    }

    fn logical_type(&self, type_code: i32) -> Option<LogicalType> {
        TABLE.get(type_code).map(PgAdapter::logical_type)
    }
}
