use std::borrow::Cow;

use recast_api::adapt;
use recast_api::encode::{self, Components, Precision};
use recast_api::{ConvertError, DateTime, FieldValue, LogicalType, RawValue};

const PRECISION: Precision = Precision::Nanos;

/// Oracle value adapters. One per family of column types; the dispatch
/// table maps type codes onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleAdapter {
    Decimal,
    Double,
    Character,
    Date,
    Timestamp,
    TimestampWithZone,
    Binary,
    TextObject,
    IntervalYearToMonth,
    IntervalDayToSecond,
}

impl OracleAdapter {
    pub fn name(self) -> &'static str {
        match self {
            OracleAdapter::Decimal => "oracle.decimal",
            OracleAdapter::Double => "oracle.double",
            OracleAdapter::Character => "oracle.character",
            OracleAdapter::Date => "oracle.date",
            OracleAdapter::Timestamp => "oracle.timestamp",
            OracleAdapter::TimestampWithZone => "oracle.timestamp_tz",
            OracleAdapter::Binary => "oracle.binary",
            OracleAdapter::TextObject => "oracle.text_object",
            OracleAdapter::IntervalYearToMonth => "oracle.interval_ym",
            OracleAdapter::IntervalDayToSecond => "oracle.interval_ds",
        }
    }

    pub fn logical_type(self) -> LogicalType {
        match self {
            OracleAdapter::Decimal => LogicalType::BigDecimal,
            OracleAdapter::Double => LogicalType::Double,
            OracleAdapter::Character
            | OracleAdapter::TextObject
            | OracleAdapter::IntervalYearToMonth
            | OracleAdapter::IntervalDayToSecond => LogicalType::String,
            OracleAdapter::Date => LogicalType::DateTime,
            OracleAdapter::Timestamp => LogicalType::Timestamp,
            OracleAdapter::TimestampWithZone => LogicalType::TimestampTimeZone,
            OracleAdapter::Binary => LogicalType::Bytes,
        }
    }

    /// Encoding tag: the declared charset for character text, `ASCII` for
    /// numeric and date/time text. NULL character columns are tagged
    /// `ASCII` too.
    fn encoding(self, raw: Option<&RawValue>) -> Option<Cow<'static, str>> {
        match (self, raw) {
            (OracleAdapter::Character, Some(RawValue::Character { charset, .. })) => {
                Some(Cow::Owned(charset.clone()))
            }
            (OracleAdapter::Character, None)
            | (
                OracleAdapter::Decimal
                | OracleAdapter::Date
                | OracleAdapter::Timestamp
                | OracleAdapter::TimestampWithZone,
                _,
            ) => Some(Cow::Borrowed(FieldValue::ASCII)),
            _ => None,
        }
    }

    fn encode(self, raw: &RawValue) -> Result<Vec<u8>, ConvertError> {
        let name = self.name();
        match self {
            OracleAdapter::Decimal => adapt::decimal(name, raw),
            OracleAdapter::Double => adapt::float(name, raw),
            OracleAdapter::Character => adapt::character(name, raw).map(|(bytes, _)| bytes),
            OracleAdapter::Date => date(adapt::date_time(name, raw)?),
            OracleAdapter::Timestamp => encode::timestamp(adapt::date_time(name, raw)?, PRECISION),
            OracleAdapter::TimestampWithZone => {
                let (dt, zone) = adapt::zoned(name, raw)?;
                encode::timestamp_with_zone(dt, PRECISION, zone.as_bytes())
            }
            OracleAdapter::Binary => adapt::binary(name, raw),
            OracleAdapter::TextObject => adapt::text(name, raw),
            OracleAdapter::IntervalYearToMonth => year_to_month(adapt::date_time(name, raw)?),
            OracleAdapter::IntervalDayToSecond => day_to_second(adapt::date_time(name, raw)?),
        }
    }

    pub fn convert(self, raw: Option<&RawValue>) -> Result<FieldValue, ConvertError> {
        let mut value = FieldValue::from_raw(raw, self.logical_type(), |raw| self.encode(raw))?;
        value.encoding = self.encoding(raw);
        Ok(value)
    }
}

// ---- DATE ----

/// `[-]YYYY-MM-DD HH:MM:SS`. Oracle DATE keeps a time of day but no
/// fraction; BCE years get a leading minus.
fn date(dt: &DateTime) -> Result<Vec<u8>, ConvertError> {
    if !(-9999..=9999).contains(&dt.year) {
        return Err(ConvertError::ComponentOutOfRange {
            component: "year",
            value: i64::from(dt.year),
        });
    }
    let negative = dt.year < 0;
    let unsigned = DateTime {
        year: dt.year.abs(),
        fraction: None,
        ..*dt
    };
    let parts = Components::checked(&unsigned, PRECISION)?;

    let mut out = Vec::with_capacity(usize::from(negative) + parts.timestamp_len());
    if negative {
        out.push(b'-');
    }
    parts.push_timestamp(&mut out);
    Ok(out)
}

// ---- INTERVAL ----

/// Every component of an interval carries the same sign; the first
/// nonzero one decides it.
fn is_negative(components: &[i32]) -> bool {
    components
        .iter()
        .find(|c| **c != 0)
        .is_some_and(|c| *c < 0)
}

fn magnitude(value: i32) -> u64 {
    u64::from(value.unsigned_abs())
}

/// `[-]{years}-{months}`
fn year_to_month(dt: &DateTime) -> Result<Vec<u8>, ConvertError> {
    let negative = is_negative(&[dt.year, dt.month]);
    let (years, months) = (magnitude(dt.year), magnitude(dt.month));

    let len = usize::from(negative) + encode::decimal_len(years) + 1 + encode::decimal_len(months);
    let mut out = Vec::with_capacity(len);
    if negative {
        out.push(b'-');
    }
    encode::push_decimal(&mut out, years);
    out.push(b'-');
    encode::push_decimal(&mut out, months);
    Ok(out)
}

/// `[-]{days} {hours}:{minutes}:{seconds}[.fffffffff]`
fn day_to_second(dt: &DateTime) -> Result<Vec<u8>, ConvertError> {
    let fraction = dt
        .fraction
        .map(|f| encode::fraction_magnitude(f, PRECISION))
        .transpose()?;
    let negative = is_negative(&[
        dt.day,
        dt.hour,
        dt.minute,
        dt.second,
        dt.fraction.unwrap_or(0),
    ]);
    let fields = [
        magnitude(dt.day),
        magnitude(dt.hour),
        magnitude(dt.minute),
        magnitude(dt.second),
    ];

    let len = usize::from(negative)
        + fields.iter().map(|v| encode::decimal_len(*v)).sum::<usize>()
        + 3
        + fraction.map_or(0, |_| PRECISION.fraction_len());
    let mut out = Vec::with_capacity(len);
    if negative {
        out.push(b'-');
    }
    for (value, separator) in fields.iter().zip([None, Some(b' '), Some(b':'), Some(b':')]) {
        out.extend(separator);
        encode::push_decimal(&mut out, *value);
    }
    if let Some(fraction) = fraction {
        encode::push_fraction(&mut out, fraction, PRECISION);
    }
    Ok(out)
}
