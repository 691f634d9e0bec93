use std::borrow::Cow;

use chrono::{Datelike, Timelike, Utc};
use recast_api::adapt;
use recast_api::encode::{self, Components, Precision};
use recast_api::{ConvertError, DateTime, FieldValue, LogicalType, RawValue};

const PRECISION: Precision = Precision::Micros;

/// `TIME` spans `-838:59:59` to `838:59:59`.
const MAX_TIME_HOURS: u32 = 838;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MySqlKind {
    Integer,
    Decimal,
    Float,
    Character,
    Date,
    Time,
    DateTime,
    /// `TIMESTAMP` columns, delivered as seconds since the epoch.
    EpochTimestamp,
    Binary,
    TextObject,
    Geometry,
}

impl MySqlKind {
    pub fn name(self) -> &'static str {
        match self {
            MySqlKind::Integer => "mysql.integer",
            MySqlKind::Decimal => "mysql.decimal",
            MySqlKind::Float => "mysql.float",
            MySqlKind::Character => "mysql.character",
            MySqlKind::Date => "mysql.date",
            MySqlKind::Time => "mysql.time",
            MySqlKind::DateTime => "mysql.datetime",
            MySqlKind::EpochTimestamp => "mysql.timestamp",
            MySqlKind::Binary => "mysql.binary",
            MySqlKind::TextObject => "mysql.text_object",
            MySqlKind::Geometry => "mysql.geometry",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MySqlAdapter {
    pub kind: MySqlKind,
    pub logical: LogicalType,
}

impl MySqlAdapter {
    pub const fn new(kind: MySqlKind, logical: LogicalType) -> Self {
        Self { kind, logical }
    }

    pub fn name(self) -> &'static str {
        self.kind.name()
    }

    pub fn logical_type(self) -> LogicalType {
        self.logical
    }

    /// Character text is tagged with its charset (`ASCII` when NULL);
    /// nothing else is tagged.
    pub fn convert(self, raw: Option<&RawValue>) -> Result<FieldValue, ConvertError> {
        let mut value = FieldValue::from_raw(raw, self.logical, |raw| self.encode(raw))?;
        if self.kind == MySqlKind::Character {
            value.encoding = Some(match raw {
                Some(RawValue::Character { charset, .. }) => Cow::Owned(charset.clone()),
                _ => Cow::Borrowed(FieldValue::ASCII),
            });
        }
        Ok(value)
    }

    fn encode(self, raw: &RawValue) -> Result<Vec<u8>, ConvertError> {
        let name = self.name();
        match self.kind {
            MySqlKind::Integer => adapt::integer(name, raw),
            MySqlKind::Decimal => adapt::decimal(name, raw),
            MySqlKind::Float => adapt::float(name, raw),
            MySqlKind::Character => adapt::character(name, raw).map(|(bytes, _)| bytes),
            MySqlKind::Date => encode::date(adapt::date_time(name, raw)?, PRECISION),
            MySqlKind::Time => time(adapt::date_time(name, raw)?),
            MySqlKind::DateTime => encode::timestamp(adapt::date_time(name, raw)?, PRECISION),
            MySqlKind::EpochTimestamp => match raw {
                RawValue::Timestamp { seconds, micros } => epoch_timestamp(*seconds, *micros),
                other => Err(adapt::unexpected(name, other)),
            },
            MySqlKind::Binary => adapt::binary(name, raw),
            MySqlKind::TextObject => adapt::text(name, raw),
            MySqlKind::Geometry => adapt::geometry(name, raw),
        }
    }
}

/// `[-]HH:MM:SS[.ffffff]`, hours widening to three digits past 99.
///
/// The binlog stores a duration, not a time of day, so the sign sits on
/// the components like an interval.
fn time(dt: &DateTime) -> Result<Vec<u8>, ConvertError> {
    let negative = [dt.hour, dt.minute, dt.second, dt.fraction.unwrap_or(0)]
        .iter()
        .find(|c| **c != 0)
        .is_some_and(|c| *c < 0);

    let hours = dt.hour.unsigned_abs();
    if hours > MAX_TIME_HOURS {
        return Err(ConvertError::ComponentOutOfRange {
            component: "hour",
            value: i64::from(dt.hour),
        });
    }
    let fraction = dt
        .fraction
        .map(|f| encode::fraction_magnitude(f, PRECISION))
        .transpose()?;
    let parts = Components {
        year: 0,
        month: 0,
        day: 0,
        hour: hours % 100,
        minute: sexagesimal("minute", dt.minute)?,
        second: sexagesimal("second", dt.second)?,
        fraction,
        precision: PRECISION,
    };

    let wide = hours >= 100;
    let mut out = Vec::with_capacity(usize::from(negative) + usize::from(wide) + parts.time_len());
    if negative {
        out.push(b'-');
    }
    if wide {
        out.push(b'0' + (hours / 100) as u8);
    }
    parts.push_time(&mut out);
    Ok(out)
}

/// Magnitude of a signed minute or second, which must stay below 60.
fn sexagesimal(component: &'static str, value: i32) -> Result<u32, ConvertError> {
    let magnitude = value.unsigned_abs();
    if magnitude > 59 {
        return Err(ConvertError::ComponentOutOfRange {
            component,
            value: i64::from(value),
        });
    }
    Ok(magnitude)
}

/// UTC civil time of an epoch timestamp.
fn epoch_timestamp(seconds: i64, micros: Option<i32>) -> Result<Vec<u8>, ConvertError> {
    let utc = chrono::DateTime::<Utc>::from_timestamp(seconds, 0).ok_or(
        ConvertError::ComponentOutOfRange {
            component: "seconds",
            value: seconds,
        },
    )?;
    let dt = DateTime {
        year: utc.year(),
        month: utc.month() as i32,
        day: utc.day() as i32,
        hour: utc.hour() as i32,
        minute: utc.minute() as i32,
        second: utc.second() as i32,
        fraction: micros,
    };
    encode::timestamp(&dt, PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(kind: MySqlKind) -> MySqlAdapter {
        MySqlAdapter::new(kind, LogicalType::String)
    }

    #[test]
    fn test_epoch_timestamp() {
        let raw = RawValue::Timestamp {
            seconds: 1_718_203_484,
            micros: Some(250_000),
        };
        let value = adapter(MySqlKind::EpochTimestamp).convert(Some(&raw)).unwrap();
        assert_eq!(value.as_str(), Some("2024-06-12 14:44:44.250000"));

        let raw = RawValue::Timestamp {
            seconds: 0,
            micros: None,
        };
        let value = adapter(MySqlKind::EpochTimestamp).convert(Some(&raw)).unwrap();
        assert_eq!(value.as_str(), Some("1970-01-01 00:00:00"));
    }

    #[test]
    fn test_epoch_timestamp_out_of_range() {
        let raw = RawValue::Timestamp {
            seconds: i64::MAX,
            micros: None,
        };
        assert_eq!(
            adapter(MySqlKind::EpochTimestamp).convert(Some(&raw)),
            Err(ConvertError::ComponentOutOfRange {
                component: "seconds",
                value: i64::MAX
            })
        );
    }

    #[test]
    fn test_time_durations() {
        let cases = [
            (DateTime::time(12, 5, 9), "12:05:09"),
            (DateTime::time(838, 59, 59), "838:59:59"),
            (DateTime::time(-1, -2, -3), "-01:02:03"),
            (DateTime::time(0, 0, -1).with_fraction(-5), "-00:00:01.000005"),
            (DateTime::time(100, 0, 0).with_fraction(0), "100:00:00.000000"),
        ];
        for (dt, expected) in cases {
            let value = adapter(MySqlKind::Time)
                .convert(Some(&RawValue::DateTime(dt)))
                .unwrap();
            assert_eq!(value.as_str(), Some(expected));
        }

        let err = adapter(MySqlKind::Time)
            .convert(Some(&RawValue::DateTime(DateTime::time(839, 0, 0))))
            .unwrap_err();
        assert!(matches!(err, ConvertError::ComponentOutOfRange { component: "hour", .. }));
    }

    #[test]
    fn test_time_rejects_extreme_components() {
        let cases = [
            (DateTime::time(1, i32::MIN, 0), "minute", i64::from(i32::MIN)),
            (DateTime::time(1, 0, i32::MIN), "second", i64::from(i32::MIN)),
            (DateTime::time(i32::MIN, 0, 0), "hour", i64::from(i32::MIN)),
            (DateTime::time(0, 60, 0), "minute", 60),
            (DateTime::time(0, 0, -60), "second", -60),
        ];
        for (dt, component, value) in cases {
            assert_eq!(
                adapter(MySqlKind::Time).convert(Some(&RawValue::DateTime(dt))),
                Err(ConvertError::ComponentOutOfRange { component, value })
            );
        }

        let dt = DateTime::time(1, 0, 0).with_fraction(i32::MIN);
        let err = adapter(MySqlKind::Time)
            .convert(Some(&RawValue::DateTime(dt)))
            .unwrap_err();
        assert!(matches!(err, ConvertError::ComponentOutOfRange { component: "fraction", .. }));
    }

    #[test]
    fn test_geometry_accepts_wkb_and_wkt() {
        let wkb = RawValue::BinaryGeometry(vec![1, 1, 0, 0, 0]);
        let value = adapter(MySqlKind::Geometry).convert(Some(&wkb)).unwrap();
        assert_eq!(value.bytes.as_deref(), Some(&[1, 1, 0, 0, 0][..]));

        let wkt = RawValue::TextGeometry("POINT(1 2)".into());
        let value = adapter(MySqlKind::Geometry).convert(Some(&wkt)).unwrap();
        assert_eq!(value.as_str(), Some("POINT(1 2)"));
    }

    #[test]
    fn test_character_tags() {
        let null = adapter(MySqlKind::Character).convert(None).unwrap();
        assert!(null.is_null());
        assert_eq!(null.encoding.as_deref(), Some("ASCII"));

        let raw = RawValue::character("naïve".as_bytes().to_vec(), "utf8mb4");
        let value = adapter(MySqlKind::Character).convert(Some(&raw)).unwrap();
        assert_eq!(value.encoding.as_deref(), Some("utf8mb4"));

        let null = adapter(MySqlKind::Decimal).convert(None).unwrap();
        assert_eq!(null.encoding, None);
    }
}
