//! Pass-through transforms shared by every dialect's adapter set.
//!
//! Each function takes a present (non-NULL) raw value and the adapter's name
//! for error reports, and yields the canonical bytes. Dialect crates decide
//! the logical type and encoding tag around them.

use crate::charset;
use crate::error::ConvertError;
use crate::value::{DateTime, RawValue};

pub fn unexpected(adapter: &'static str, raw: &RawValue) -> ConvertError {
    ConvertError::UnsupportedRawValueVariant {
        adapter,
        found: raw.kind(),
    }
}

/// Decimal digit string, verbatim.
pub fn decimal(adapter: &'static str, raw: &RawValue) -> Result<Vec<u8>, ConvertError> {
    match raw {
        RawValue::Decimal(digits) => Ok(digits.as_bytes().to_vec()),
        other => Err(unexpected(adapter, other)),
    }
}

/// Integer digit string, verbatim.
pub fn integer(adapter: &'static str, raw: &RawValue) -> Result<Vec<u8>, ConvertError> {
    match raw {
        RawValue::Integer(digits) => Ok(digits.as_bytes().to_vec()),
        other => Err(unexpected(adapter, other)),
    }
}

/// Shortest decimal text that parses back to the same `f64`.
pub fn float(adapter: &'static str, raw: &RawValue) -> Result<Vec<u8>, ConvertError> {
    match raw {
        RawValue::Float(value) => Ok(float_text(*value)),
        other => Err(unexpected(adapter, other)),
    }
}

pub fn float_text(value: f64) -> Vec<u8> {
    if value.is_nan() {
        b"NaN".to_vec()
    } else if value == f64::INFINITY {
        b"Infinity".to_vec()
    } else if value == f64::NEG_INFINITY {
        b"-Infinity".to_vec()
    } else {
        // Debug output is the shortest round-trip form and keeps a ".0" on
        // integral values (1.0, 1e300, 1e-7).
        format!("{value:?}").into_bytes()
    }
}

/// Character bytes, validated against their declared charset and returned
/// unchanged together with that charset name.
pub fn character<'a>(
    adapter: &'static str,
    raw: &'a RawValue,
) -> Result<(Vec<u8>, &'a str), ConvertError> {
    match raw {
        RawValue::Character { value, charset } => {
            charset::validate(value, charset)?;
            Ok((value.clone(), charset.as_str()))
        }
        other => Err(unexpected(adapter, other)),
    }
}

pub fn binary(adapter: &'static str, raw: &RawValue) -> Result<Vec<u8>, ConvertError> {
    match raw {
        RawValue::BinaryObject(bytes) => Ok(bytes.clone()),
        other => Err(unexpected(adapter, other)),
    }
}

/// Embedded text of a `TextObject` or `TextGeometry`, unmodified.
pub fn text(adapter: &'static str, raw: &RawValue) -> Result<Vec<u8>, ConvertError> {
    match raw {
        RawValue::TextObject(text) | RawValue::TextGeometry(text) => Ok(text.as_bytes().to_vec()),
        other => Err(unexpected(adapter, other)),
    }
}

/// Geometry in either wire shape: WKB bytes or well-known text.
pub fn geometry(adapter: &'static str, raw: &RawValue) -> Result<Vec<u8>, ConvertError> {
    match raw {
        RawValue::BinaryGeometry(bytes) => Ok(bytes.clone()),
        RawValue::TextGeometry(text) => Ok(text.as_bytes().to_vec()),
        other => Err(unexpected(adapter, other)),
    }
}

pub fn date_time<'a>(adapter: &'static str, raw: &'a RawValue) -> Result<&'a DateTime, ConvertError> {
    match raw {
        RawValue::DateTime(dt) => Ok(dt),
        other => Err(unexpected(adapter, other)),
    }
}

/// Components and the raw zone string of a `TimestampWithTimeZone`.
pub fn zoned<'a>(
    adapter: &'static str,
    raw: &'a RawValue,
) -> Result<(&'a DateTime, &'a str), ConvertError> {
    match raw {
        RawValue::TimestampWithTimeZone { value, timezone } => Ok((value, timezone.as_str())),
        other => Err(unexpected(adapter, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_is_verbatim() {
        for digits in ["0", "-0.000100", "12345678901234567890.123456789", "1E+5"] {
            let raw = RawValue::Decimal(digits.to_string());
            assert_eq!(decimal("test", &raw).unwrap(), digits.as_bytes());
        }
    }

    #[test]
    fn test_float_round_trips() {
        for value in [0.0, -0.0, 1.0, 0.1, -2.5, 1e300, 1e-7, f64::MAX, f64::MIN_POSITIVE, 1.0 / 3.0] {
            let bytes = float("test", &RawValue::Float(value)).unwrap();
            let parsed: f64 = std::str::from_utf8(&bytes).unwrap().parse().unwrap();
            assert_eq!(parsed.to_bits(), value.to_bits(), "{value}");
        }
    }

    #[test]
    fn test_float_special_values() {
        assert_eq!(float_text(f64::NAN), b"NaN");
        assert_eq!(float_text(f64::INFINITY), b"Infinity");
        assert_eq!(float_text(f64::NEG_INFINITY), b"-Infinity");
        assert_eq!(float_text(1.0), b"1.0");
        let inf: f64 = "Infinity".parse().unwrap();
        assert_eq!(inf, f64::INFINITY);
    }

    #[test]
    fn test_text_accepts_both_wrappers() {
        let obj = RawValue::TextObject("AAAR3sAAEAAAACXAAA".into());
        let geo = RawValue::TextGeometry("POINT(1 2)".into());
        assert_eq!(text("test", &obj).unwrap(), b"AAAR3sAAEAAAACXAAA");
        assert_eq!(text("test", &geo).unwrap(), b"POINT(1 2)");

        let err = text("test", &RawValue::Float(1.0)).unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnsupportedRawValueVariant {
                adapter: "test",
                found: "Float"
            }
        );
    }

    #[test]
    fn test_character_keeps_bytes_and_charset() {
        let raw = RawValue::character("héllo".as_bytes().to_vec(), "utf8mb4");
        let (bytes, charset) = character("test", &raw).unwrap();
        assert_eq!(bytes, "héllo".as_bytes());
        assert_eq!(charset, "utf8mb4");
    }
}
