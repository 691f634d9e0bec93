//! Oracle column type codes as reported by the redo-log reader.

pub const VARCHAR2: u16 = 1;
pub const NUMBER: u16 = 2;
pub const LONG: u16 = 8;
pub const DATE: u16 = 12;
pub const RAW: u16 = 23;
pub const LONG_RAW: u16 = 24;
pub const XMLTYPE: u16 = 58;
pub const ROWID: u16 = 69;
pub const CHAR: u16 = 96;
pub const BINARY_FLOAT: u16 = 100;
pub const BINARY_DOUBLE: u16 = 101;
pub const CLOB: u16 = 112;
pub const BLOB: u16 = 113;
pub const BFILE: u16 = 114;
pub const TIMESTAMP: u16 = 180;
pub const TIMESTAMP_TZ: u16 = 181;
pub const INTERVAL_YM: u16 = 182;
pub const INTERVAL_DS: u16 = 183;
pub const UROWID: u16 = 208;
pub const TIMESTAMP_LTZ: u16 = 231;
