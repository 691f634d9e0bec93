//! Built-in PostgreSQL type OIDs (`pg_type.oid`).

pub const BOOL: u16 = 16;
pub const BYTEA: u16 = 17;
pub const CHAR: u16 = 18;
pub const NAME: u16 = 19;
pub const INT8: u16 = 20;
pub const INT2: u16 = 21;
pub const INT4: u16 = 23;
pub const TEXT: u16 = 25;
pub const OID: u16 = 26;
pub const JSON: u16 = 114;
pub const XML: u16 = 142;
pub const POINT: u16 = 600;
pub const LSEG: u16 = 601;
pub const PATH: u16 = 602;
pub const BOX: u16 = 603;
pub const POLYGON: u16 = 604;
pub const LINE: u16 = 628;
pub const CIDR: u16 = 650;
pub const FLOAT4: u16 = 700;
pub const FLOAT8: u16 = 701;
pub const CIRCLE: u16 = 718;
pub const MACADDR8: u16 = 774;
pub const MONEY: u16 = 790;
pub const MACADDR: u16 = 829;
pub const INET: u16 = 869;
pub const BPCHAR: u16 = 1042;
pub const VARCHAR: u16 = 1043;
pub const DATE: u16 = 1082;
pub const TIME: u16 = 1083;
pub const TIMESTAMP: u16 = 1114;
pub const TIMESTAMPTZ: u16 = 1184;
pub const INTERVAL: u16 = 1186;
pub const TIMETZ: u16 = 1266;
pub const BIT: u16 = 1560;
pub const BIT_ARRAY: u16 = 1561;
pub const VARBIT: u16 = 1562;
pub const NUMERIC: u16 = 1700;
pub const UUID: u16 = 2950;
pub const TXID_SNAPSHOT: u16 = 2970;
pub const PG_LSN: u16 = 3220;
pub const TSVECTOR: u16 = 3614;
pub const TSQUERY: u16 = 3615;
pub const JSONB: u16 = 3802;
