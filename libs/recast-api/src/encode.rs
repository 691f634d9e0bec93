//! Fixed-width ASCII encoders for date/time text.
//!
//! Digits are written one by one into a buffer sized exactly for the result,
//! so every adapter call does a single allocation and no formatting
//! machinery runs on the per-row path.

use crate::error::ConvertError;
use crate::value::DateTime;

/// `YYYY-MM-DD`
pub const DATE_LEN: usize = 10;
/// `HH:MM:SS`
pub const TIME_LEN: usize = 8;
/// `YYYY-MM-DD HH:MM:SS`
pub const TIMESTAMP_LEN: usize = DATE_LEN + 1 + TIME_LEN;

/// Unit of a dialect's sub-second fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Micros,
    Nanos,
}

impl Precision {
    pub const fn digits(self) -> usize {
        match self {
            Precision::Micros => 6,
            Precision::Nanos => 9,
        }
    }

    /// Length of `.` plus the digits.
    pub const fn fraction_len(self) -> usize {
        1 + self.digits()
    }

    const fn top_divisor(self) -> u32 {
        match self {
            Precision::Micros => 100_000,
            Precision::Nanos => 100_000_000,
        }
    }

    const fn max(self) -> u32 {
        self.top_divisor() * 10 - 1
    }
}

#[inline]
fn digit(v: u32) -> u8 {
    b'0' + (v % 10) as u8
}

fn check(component: &'static str, value: i32, max: u32) -> Result<u32, ConvertError> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v <= max)
        .ok_or(ConvertError::ComponentOutOfRange {
            component,
            value: i64::from(value),
        })
}

/// Check a fraction magnitude against the precision's digit count.
pub fn check_fraction(value: i32, precision: Precision) -> Result<u32, ConvertError> {
    check("fraction", value, precision.max())
}

/// Magnitude of a signed fraction (interval components carry the sign).
pub fn fraction_magnitude(value: i32, precision: Precision) -> Result<u32, ConvertError> {
    let magnitude = value.unsigned_abs();
    if magnitude > precision.max() {
        return Err(ConvertError::ComponentOutOfRange {
            component: "fraction",
            value: i64::from(value),
        });
    }
    Ok(magnitude)
}

/// Range-checked, unsigned view of a [`DateTime`], ready for digit output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Components {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub fraction: Option<u32>,
    pub precision: Precision,
}

impl Components {
    pub fn checked(dt: &DateTime, precision: Precision) -> Result<Self, ConvertError> {
        Ok(Self {
            year: check("year", dt.year, 9999)?,
            month: check("month", dt.month, 99)?,
            day: check("day", dt.day, 99)?,
            hour: check("hour", dt.hour, 99)?,
            minute: check("minute", dt.minute, 99)?,
            second: check("second", dt.second, 99)?,
            fraction: dt
                .fraction
                .map(|f| check_fraction(f, precision))
                .transpose()?,
            precision,
        })
    }

    /// Drop the sub-second part; it will not be written.
    pub fn without_fraction(mut self) -> Self {
        self.fraction = None;
        self
    }

    /// `HH:MM:SS` plus `.fff…` when a fraction is present.
    pub fn time_len(&self) -> usize {
        match self.fraction {
            Some(_) => TIME_LEN + self.precision.fraction_len(),
            None => TIME_LEN,
        }
    }

    pub fn timestamp_len(&self) -> usize {
        DATE_LEN + 1 + self.time_len()
    }

    pub fn push_date(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&[
            digit(self.year / 1000),
            digit(self.year / 100),
            digit(self.year / 10),
            digit(self.year),
            b'-',
            digit(self.month / 10),
            digit(self.month),
            b'-',
            digit(self.day / 10),
            digit(self.day),
        ]);
    }

    /// `HH:MM:SS[.fff…]`
    pub fn push_time(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&[
            digit(self.hour / 10),
            digit(self.hour),
            b':',
            digit(self.minute / 10),
            digit(self.minute),
            b':',
            digit(self.second / 10),
            digit(self.second),
        ]);
        if let Some(fraction) = self.fraction {
            push_fraction(out, fraction, self.precision);
        }
    }

    /// `YYYY-MM-DD HH:MM:SS[.fff…]`
    pub fn push_timestamp(&self, out: &mut Vec<u8>) {
        self.push_date(out);
        out.push(b' ');
        self.push_time(out);
    }
}

/// `.` followed by exactly `precision.digits()` digits, most significant first.
///
/// `value` must already be range-checked (see [`check_fraction`]).
pub fn push_fraction(out: &mut Vec<u8>, value: u32, precision: Precision) {
    out.push(b'.');
    let mut rem = value;
    let mut div = precision.top_divisor();
    while div > 0 {
        out.push(b'0' + (rem / div) as u8);
        rem %= div;
        div /= 10;
    }
}

/// Number of decimal digits in `value` (at least one).
pub fn decimal_len(value: u64) -> usize {
    let mut len = 1;
    let mut rest = value / 10;
    while rest > 0 {
        len += 1;
        rest /= 10;
    }
    len
}

/// Unpadded decimal text of `value`.
pub fn push_decimal(out: &mut Vec<u8>, value: u64) {
    let len = decimal_len(value);
    let start = out.len();
    out.resize(start + len, b'0');
    let mut rest = value;
    for slot in out[start..].iter_mut().rev() {
        *slot = b'0' + (rest % 10) as u8;
        rest /= 10;
    }
}

/// `YYYY-MM-DD`
pub fn date(dt: &DateTime, precision: Precision) -> Result<Vec<u8>, ConvertError> {
    let parts = Components::checked(dt, precision)?;
    let mut out = Vec::with_capacity(DATE_LEN);
    parts.push_date(&mut out);
    Ok(out)
}

/// `HH:MM:SS[.fff…]` followed by `suffix`.
pub fn time(dt: &DateTime, precision: Precision, suffix: &[u8]) -> Result<Vec<u8>, ConvertError> {
    let parts = Components::checked(dt, precision)?;
    let mut out = Vec::with_capacity(parts.time_len() + suffix.len());
    parts.push_time(&mut out);
    out.extend_from_slice(suffix);
    Ok(out)
}

/// `YYYY-MM-DD HH:MM:SS[.fff…]`
pub fn timestamp(dt: &DateTime, precision: Precision) -> Result<Vec<u8>, ConvertError> {
    let parts = Components::checked(dt, precision)?;
    let mut out = Vec::with_capacity(parts.timestamp_len());
    parts.push_timestamp(&mut out);
    Ok(out)
}

/// Timestamp text, one space, then `zone` verbatim.
pub fn timestamp_with_zone(
    dt: &DateTime,
    precision: Precision,
    zone: &[u8],
) -> Result<Vec<u8>, ConvertError> {
    let parts = Components::checked(dt, precision)?;
    let mut out = Vec::with_capacity(parts.timestamp_len() + 1 + zone.len());
    parts.push_timestamp(&mut out);
    out.push(b' ');
    out.extend_from_slice(zone);
    Ok(out)
}
