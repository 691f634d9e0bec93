pub mod adapt;
pub mod b64;
pub mod charset;
pub mod converter;
pub mod dispatch;
pub mod encode;
pub mod error;
pub mod logical;
pub mod record;
pub mod value;

pub use converter::{Dialect, FieldConverter};
pub use dispatch::DispatchTable;
pub use error::ConvertError;
pub use logical::LogicalType;
pub use record::{ChangeRecord, Operation, RawField};
pub use value::{DateTime, FieldValue, RawValue};
