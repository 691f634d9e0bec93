use std::fmt;

/// Canonical logical type attached to every converted field.
///
/// The integer codes are a wire contract with downstream writers and must not
/// be renumbered. Text search types (tsvector, tsquery) share code 33 with
/// `Line` upstream, so they are reported as `Line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum LogicalType {
    Bit = 1,
    BigDecimal = 2,
    Bytes = 3,
    Float = 4,
    Double = 5,
    Long = 6,
    Boolean = 7,
    String = 8,
    Date = 9,
    DateTime = 10,
    Integer = 11,
    Interval = 12,
    Time = 13,
    Timestamp = 14,
    TimeMs = 15,
    TimestampTimeZone = 16,
    TimeTz = 17,
    Money = 18,
    Xml = 19,
    Circle = 20,
    Cidr = 21,
    Box = 22,
    VarBit = 23,
    Uuid = 24,
    Polygon = 25,
    Point = 26,
    Path = 27,
    MacAddr = 28,
    Lseg = 29,
    Inet = 30,
    Year = 31,
    BigInteger = 32,
    Line = 33,
    Array = 34,
    Json = 35,
    Composite = 36,
    TsRange = 37,
    Hstore = 38,
    Geometry = 39,
    IntervalYearMonth = 40,
    IntervalDaySecond = 41,
    Jsonb = 42,
    TimestampLocalTimeZone = 43,
}

const ALL: [LogicalType; 43] = [
    LogicalType::Bit,
    LogicalType::BigDecimal,
    LogicalType::Bytes,
    LogicalType::Float,
    LogicalType::Double,
    LogicalType::Long,
    LogicalType::Boolean,
    LogicalType::String,
    LogicalType::Date,
    LogicalType::DateTime,
    LogicalType::Integer,
    LogicalType::Interval,
    LogicalType::Time,
    LogicalType::Timestamp,
    LogicalType::TimeMs,
    LogicalType::TimestampTimeZone,
    LogicalType::TimeTz,
    LogicalType::Money,
    LogicalType::Xml,
    LogicalType::Circle,
    LogicalType::Cidr,
    LogicalType::Box,
    LogicalType::VarBit,
    LogicalType::Uuid,
    LogicalType::Polygon,
    LogicalType::Point,
    LogicalType::Path,
    LogicalType::MacAddr,
    LogicalType::Lseg,
    LogicalType::Inet,
    LogicalType::Year,
    LogicalType::BigInteger,
    LogicalType::Line,
    LogicalType::Array,
    LogicalType::Json,
    LogicalType::Composite,
    LogicalType::TsRange,
    LogicalType::Hstore,
    LogicalType::Geometry,
    LogicalType::IntervalYearMonth,
    LogicalType::IntervalDaySecond,
    LogicalType::Jsonb,
    LogicalType::TimestampLocalTimeZone,
];

impl LogicalType {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        // Codes are contiguous from 1.
        usize::try_from(code)
            .ok()
            .and_then(|c| c.checked_sub(1))
            .and_then(|idx| ALL.get(idx).copied())
    }

    pub fn name(self) -> &'static str {
        match self {
            LogicalType::Bit => "BIT",
            LogicalType::BigDecimal => "BIG_DECIMAL",
            LogicalType::Bytes => "BYTES",
            LogicalType::Float => "FLOAT",
            LogicalType::Double => "DOUBLE",
            LogicalType::Long => "LONG",
            LogicalType::Boolean => "BOOLEAN",
            LogicalType::String => "STRING",
            LogicalType::Date => "DATE",
            LogicalType::DateTime => "DATETIME",
            LogicalType::Integer => "INTEGER",
            LogicalType::Interval => "INTERVAL",
            LogicalType::Time => "TIME",
            LogicalType::Timestamp => "TIMESTAMP",
            LogicalType::TimeMs => "TIMEMS",
            LogicalType::TimestampTimeZone => "TIMESTAMP_TIMEZONE",
            LogicalType::TimeTz => "TIMETZ",
            LogicalType::Money => "MONEY",
            LogicalType::Xml => "XML",
            LogicalType::Circle => "CIRCLE",
            LogicalType::Cidr => "CIDR",
            LogicalType::Box => "BOX",
            LogicalType::VarBit => "VARBIT",
            LogicalType::Uuid => "UUID",
            LogicalType::Polygon => "POLYGON",
            LogicalType::Point => "POINT",
            LogicalType::Path => "PATH",
            LogicalType::MacAddr => "MACADDR",
            LogicalType::Lseg => "LSEG",
            LogicalType::Inet => "INET",
            LogicalType::Year => "YEAR",
            LogicalType::BigInteger => "BIG_INTEGER",
            LogicalType::Line => "LINE",
            LogicalType::Array => "ARRAY",
            LogicalType::Json => "JSON",
            LogicalType::Composite => "COMPOSITE",
            LogicalType::TsRange => "TSRANGE",
            LogicalType::Hstore => "HSTORE",
            LogicalType::Geometry => "GEOMETRY",
            LogicalType::IntervalYearMonth => "INTERVAL_YM",
            LogicalType::IntervalDaySecond => "INTERVAL_DS",
            LogicalType::Jsonb => "JSONB",
            LogicalType::TimestampLocalTimeZone => "TIMESTAMP_LOCAL_TIMEZONE",
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
