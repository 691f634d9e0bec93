use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;
use crate::logical::LogicalType;

/// Calendar/clock components as delivered by the change stream.
///
/// All fields are signed: Oracle intervals carry the sign on every component
/// and Oracle DATE may carry a negative (BCE) year. `fraction` is the
/// sub-second part in the dialect's native unit (nanoseconds for Oracle,
/// microseconds for PostgreSQL and MySQL). `None` means the source carried no
/// sub-second part at all, which is different from `Some(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateTime {
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub month: i32,
    #[serde(default)]
    pub day: i32,
    #[serde(default)]
    pub hour: i32,
    #[serde(default)]
    pub minute: i32,
    #[serde(default)]
    pub second: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraction: Option<i32>,
}

impl DateTime {
    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            fraction: None,
        }
    }

    pub fn date(year: i32, month: i32, day: i32) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    pub fn time(hour: i32, minute: i32, second: i32) -> Self {
        Self::new(0, 0, 0, hour, minute, second)
    }

    pub fn with_fraction(mut self, fraction: i32) -> Self {
        self.fraction = Some(fraction);
        self
    }
}

/// Raw column value as tagged by the upstream record format.
///
/// A SQL NULL is not a variant: it is an absent value (`Option::None`) at
/// every call site. Byte payloads are base64 strings in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawValue {
    /// Integer digit string, e.g. `"-42"`.
    Integer(String),
    /// Decimal digit string in the upstream's canonical form, e.g. `"3.1400"`.
    Decimal(String),
    Float(f64),
    /// Text bytes in their declared source charset.
    Character {
        #[serde(with = "crate::b64")]
        value: Vec<u8>,
        charset: String,
    },
    TextObject(String),
    TextGeometry(String),
    BinaryObject(#[serde(with = "crate::b64")] Vec<u8>),
    BinaryGeometry(#[serde(with = "crate::b64")] Vec<u8>),
    DateTime(DateTime),
    TimestampWithTimeZone { value: DateTime, timezone: String },
    /// Seconds since the Unix epoch plus optional microseconds.
    Timestamp {
        seconds: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        micros: Option<i32>,
    },
}

impl RawValue {
    /// Variant name, used in error reports.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Integer(_) => "Integer",
            RawValue::Decimal(_) => "Decimal",
            RawValue::Float(_) => "Float",
            RawValue::Character { .. } => "Character",
            RawValue::TextObject(_) => "TextObject",
            RawValue::TextGeometry(_) => "TextGeometry",
            RawValue::BinaryObject(_) => "BinaryObject",
            RawValue::BinaryGeometry(_) => "BinaryGeometry",
            RawValue::DateTime(_) => "DateTime",
            RawValue::TimestampWithTimeZone { .. } => "TimestampWithTimeZone",
            RawValue::Timestamp { .. } => "Timestamp",
        }
    }

    pub fn character(value: impl Into<Vec<u8>>, charset: impl Into<String>) -> Self {
        RawValue::Character {
            value: value.into(),
            charset: charset.into(),
        }
    }

    pub fn zoned(value: DateTime, timezone: impl Into<String>) -> Self {
        RawValue::TimestampWithTimeZone {
            value,
            timezone: timezone.into(),
        }
    }
}

/// Canonical output of one field conversion.
///
/// `bytes` is `None` exactly when the raw value was NULL. `encoding` is
/// independent of that: some adapters declare `ASCII` even for NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    pub bytes: Option<Vec<u8>>,
    pub encoding: Option<Cow<'static, str>>,
    pub logical_type: LogicalType,
}

impl FieldValue {
    pub const ASCII: &'static str = "ASCII";

    pub fn new(bytes: Vec<u8>, logical_type: LogicalType) -> Self {
        Self {
            bytes: Some(bytes),
            encoding: None,
            logical_type,
        }
    }

    pub fn null(logical_type: LogicalType) -> Self {
        Self {
            bytes: None,
            encoding: None,
            logical_type,
        }
    }

    /// Run `encode` on a present raw value; NULL stays NULL.
    pub fn from_raw<F>(
        raw: Option<&RawValue>,
        logical_type: LogicalType,
        encode: F,
    ) -> Result<Self, ConvertError>
    where
        F: FnOnce(&RawValue) -> Result<Vec<u8>, ConvertError>,
    {
        Ok(Self {
            bytes: raw.map(encode).transpose()?,
            encoding: None,
            logical_type,
        })
    }

    pub fn with_encoding(mut self, encoding: impl Into<Cow<'static, str>>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    pub fn ascii(self) -> Self {
        self.with_encoding(Self::ASCII)
    }

    pub fn is_null(&self) -> bool {
        self.bytes.is_none()
    }

    /// Bytes as text, when present and valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.bytes
            .as_deref()
            .and_then(|b| std::str::from_utf8(b).ok())
    }
}
