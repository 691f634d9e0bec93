use recast_api::adapt;
use recast_api::encode::{self, Precision};
use recast_api::{ConvertError, FieldValue, LogicalType, RawValue};

const PRECISION: Precision = Precision::Micros;

/// How a PostgreSQL value is turned into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PgKind {
    Integer,
    Decimal,
    Float,
    Character,
    Date,
    Time,
    TimeWithZone,
    Timestamp,
    TimestampWithZone,
    Binary,
    TextObject,
}

impl PgKind {
    pub fn name(self) -> &'static str {
        match self {
            PgKind::Integer => "postgres.integer",
            PgKind::Decimal => "postgres.decimal",
            PgKind::Float => "postgres.float",
            PgKind::Character => "postgres.character",
            PgKind::Date => "postgres.date",
            PgKind::Time => "postgres.time",
            PgKind::TimeWithZone => "postgres.timetz",
            PgKind::Timestamp => "postgres.timestamp",
            PgKind::TimestampWithZone => "postgres.timestamptz",
            PgKind::Binary => "postgres.binary",
            PgKind::TextObject => "postgres.text_object",
        }
    }
}

/// PostgreSQL adapter: a conversion kind plus the logical type it attaches.
///
/// Many OIDs share a kind and differ only in logical type (all the
/// geometric and network types are passed through as text, for instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PgAdapter {
    pub kind: PgKind,
    pub logical: LogicalType,
}

impl PgAdapter {
    pub const fn new(kind: PgKind, logical: LogicalType) -> Self {
        Self { kind, logical }
    }

    pub fn name(self) -> &'static str {
        self.kind.name()
    }

    pub fn logical_type(self) -> LogicalType {
        self.logical
    }

    /// PostgreSQL output never carries an `ASCII` tag; only character text
    /// is tagged, with its declared charset.
    pub fn convert(self, raw: Option<&RawValue>) -> Result<FieldValue, ConvertError> {
        let value = FieldValue::from_raw(raw, self.logical, |raw| self.encode(raw))?;
        Ok(match raw {
            Some(RawValue::Character { charset, .. }) if self.kind == PgKind::Character => {
                value.with_encoding(charset.clone())
            }
            _ => value,
        })
    }

    fn encode(self, raw: &RawValue) -> Result<Vec<u8>, ConvertError> {
        let name = self.name();
        match self.kind {
            PgKind::Integer => adapt::integer(name, raw),
            PgKind::Decimal => adapt::decimal(name, raw),
            PgKind::Float => adapt::float(name, raw),
            PgKind::Character => adapt::character(name, raw).map(|(bytes, _)| bytes),
            PgKind::Date => encode::date(adapt::date_time(name, raw)?, PRECISION),
            PgKind::Time => encode::time(adapt::date_time(name, raw)?, PRECISION, b""),
            // Same shape as PostgreSQL's own timetz text: `14:30:00+08`.
            PgKind::TimeWithZone => {
                let (dt, zone) = adapt::zoned(name, raw)?;
                encode::time(dt, PRECISION, zone.as_bytes())
            }
            PgKind::Timestamp => encode::timestamp(adapt::date_time(name, raw)?, PRECISION),
            PgKind::TimestampWithZone => {
                let (dt, zone) = adapt::zoned(name, raw)?;
                encode::timestamp_with_zone(dt, PRECISION, zone.as_bytes())
            }
            PgKind::Binary => adapt::binary(name, raw),
            PgKind::TextObject => adapt::text(name, raw),
        }
    }
}
