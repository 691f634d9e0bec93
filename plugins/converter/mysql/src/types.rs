//! MySQL binlog column type codes (`enum_field_types`).

pub const DECIMAL: u16 = 0;
pub const TINY: u16 = 1;
pub const SHORT: u16 = 2;
pub const LONG: u16 = 3;
pub const FLOAT: u16 = 4;
pub const DOUBLE: u16 = 5;
pub const TIMESTAMP: u16 = 7;
pub const LONGLONG: u16 = 8;
pub const INT24: u16 = 9;
pub const DATE: u16 = 10;
pub const TIME: u16 = 11;
pub const DATETIME: u16 = 12;
pub const YEAR: u16 = 13;
pub const NEWDATE: u16 = 14;
pub const VARCHAR: u16 = 15;
pub const BIT: u16 = 16;
pub const TIMESTAMP2: u16 = 17;
pub const DATETIME2: u16 = 18;
pub const TIME2: u16 = 19;
pub const JSON: u16 = 245;
pub const NEWDECIMAL: u16 = 246;
pub const ENUM: u16 = 247;
pub const SET: u16 = 248;
pub const TINY_BLOB: u16 = 249;
pub const MEDIUM_BLOB: u16 = 250;
pub const LONG_BLOB: u16 = 251;
pub const BLOB: u16 = 252;
pub const VAR_STRING: u16 = 253;
pub const STRING: u16 = 254;
pub const GEOMETRY: u16 = 255;
