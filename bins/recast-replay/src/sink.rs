//! JSON-lines rendering of converted records.
//!
//! Text values are written as UTF-8 strings (character text is transcoded
//! from its declared charset for display only); byte payloads and anything
//! that is not valid text go out as base64.

use std::borrow::Cow;
use std::io::Write;

use base64::Engine;
use serde::Serialize;
use serde::ser::SerializeStruct;

use recast_api::charset::Charset;
use recast_api::{FieldValue, LogicalType, Operation};
use recast_engine::{ConvertedField, ConvertedRecord};

#[derive(Serialize)]
struct RecordOut<'a> {
    operation: Operation,
    source_timestamp: i64,
    fields: Vec<FieldOut<'a>>,
}

struct FieldOut<'a>(&'a ConvertedField);

enum Rendered<'a> {
    Null,
    Text(Cow<'a, str>),
    Base64(String),
}

fn render(value: &FieldValue) -> Rendered<'_> {
    let Some(bytes) = value.bytes.as_deref() else {
        return Rendered::Null;
    };
    if matches!(value.logical_type, LogicalType::Bytes | LogicalType::Geometry) {
        return Rendered::Base64(base64::engine::general_purpose::STANDARD.encode(bytes));
    }
    let text = match value.encoding.as_deref() {
        Some(name) => Charset::resolve(name).and_then(|c| c.decode(bytes)),
        None => std::str::from_utf8(bytes).ok().map(Cow::Borrowed),
    };
    match text {
        Some(text) => Rendered::Text(text),
        None => Rendered::Base64(base64::engine::general_purpose::STANDARD.encode(bytes)),
    }
}

impl Serialize for FieldOut<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let field = self.0;
        let mut s = serializer.serialize_struct("Field", 5)?;
        if let Some(name) = &field.name {
            s.serialize_field("name", name)?;
        }
        s.serialize_field("type_code", &field.type_code)?;
        if let Some(logical) = field.logical_type {
            s.serialize_field("logical_type", logical.name())?;
        }
        let Some(value) = &field.value else {
            s.serialize_field("skipped", &true)?;
            return s.end();
        };
        if let Some(encoding) = &value.encoding {
            s.serialize_field("encoding", encoding)?;
        }
        match render(value) {
            Rendered::Null => s.serialize_field("value", &())?,
            Rendered::Text(text) => s.serialize_field("value", &text)?,
            Rendered::Base64(encoded) => s.serialize_field("value_base64", &encoded)?,
        }
        s.end()
    }
}

/// Write one record as a single JSON line.
pub fn write_record<W: Write + ?Sized>(out: &mut W, record: &ConvertedRecord) -> std::io::Result<()> {
    let line = RecordOut {
        operation: record.operation,
        source_timestamp: record.source_timestamp,
        fields: record.fields.iter().map(FieldOut).collect(),
    };
    serde_json::to_writer(&mut *out, &line)?;
    out.write_all(b"\n")
}
