use serde::{Deserialize, Serialize};

use crate::value::RawValue;

/// Kind of change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    Insert,
    Update,
    Delete,
    Ddl,
    Heartbeat,
    Begin,
    Commit,
    Unknown,
}

impl Operation {
    /// Operations whose column values are handed to the converter.
    pub fn carries_fields(self) -> bool {
        matches!(
            self,
            Operation::Insert
                | Operation::Update
                | Operation::Delete
                | Operation::Ddl
                | Operation::Heartbeat
        )
    }
}

/// One column of a change record: dialect type code plus raw value
/// (`None` = SQL NULL).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawField {
    pub type_code: i32,
    #[serde(default)]
    pub value: Option<RawValue>,
    /// Column name, for observability only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RawField {
    pub fn new(type_code: i32, value: Option<RawValue>) -> Self {
        Self {
            type_code,
            value,
            name: None,
        }
    }
}

/// Change event as delivered by the record source.
///
/// The core never looks at `operation` or `source_timestamp`; they travel
/// with the record so the caller can filter and checkpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub operation: Operation,
    /// Source commit time, seconds since epoch. Non-decreasing along a stream.
    pub source_timestamp: i64,
    #[serde(default)]
    pub fields: Vec<RawField>,
}
