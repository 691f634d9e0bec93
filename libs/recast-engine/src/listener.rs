//! Record-level conversion on top of a [`FieldConverter`].
//!
//! The converters themselves are strictly per field and never decide what
//! a failure means for the record. [`RecordConverter`] is where that
//! decision is made, according to the configured [`FieldErrorPolicy`].

use serde::Deserialize;

use recast_api::{ChangeRecord, FieldConverter, FieldValue, LogicalType, Operation};

use crate::config::RecastConfig;
use crate::error::EngineError;
use crate::factory;

/// Reaction to a field that fails to convert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorPolicy {
    /// The record fails with the field's index attached.
    #[default]
    Abort,
    /// The field is dropped from the output, the record goes on.
    Skip,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Records converted (with or without fields).
    pub records: u64,
    /// Fields converted successfully.
    pub fields: u64,
    /// Fields that failed, whatever the policy did with them.
    pub failed_fields: u64,
    /// Records filtered out by `start_timestamp`.
    pub skipped_records: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedField {
    pub name: Option<String>,
    pub type_code: i32,
    /// Logical type the adapter attaches, when the type code is known.
    pub logical_type: Option<LogicalType>,
    /// `None` when the field failed and was skipped.
    pub value: Option<FieldValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedRecord {
    pub operation: Operation,
    pub source_timestamp: i64,
    pub fields: Vec<ConvertedField>,
}

pub struct RecordConverter {
    converter: &'static dyn FieldConverter,
    policy: FieldErrorPolicy,
    start_timestamp: Option<i64>,
    stats: ConversionStats,
}

impl std::fmt::Debug for RecordConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordConverter")
            .field("dialect", &self.converter.dialect())
            .field("policy", &self.policy)
            .field("start_timestamp", &self.start_timestamp)
            .field("stats", &self.stats)
            .finish()
    }
}

impl RecordConverter {
    pub fn new(converter: &'static dyn FieldConverter, policy: FieldErrorPolicy) -> Self {
        Self {
            converter,
            policy,
            start_timestamp: None,
            stats: ConversionStats::default(),
        }
    }

    /// Resolve the dialect from `config.source` and apply the rest of the
    /// settings. An unknown source is reported here, before any record.
    pub fn from_config(config: &RecastConfig) -> Result<Self, EngineError> {
        let converter = factory::converter_for(&config.source)?;
        tracing::info!(
            source = %config.source,
            dialect = %converter.dialect(),
            policy = ?config.on_field_error,
            "record converter ready"
        );
        Ok(Self::new(converter, config.on_field_error).with_start_timestamp(config.start_timestamp))
    }

    pub fn with_start_timestamp(mut self, start_timestamp: Option<i64>) -> Self {
        self.start_timestamp = start_timestamp;
        self
    }

    pub fn converter(&self) -> &'static dyn FieldConverter {
        self.converter
    }

    pub fn stats(&self) -> ConversionStats {
        self.stats
    }

    /// Convert every field of `record`.
    ///
    /// Returns `Ok(None)` for records older than the start timestamp.
    /// Operations that carry no column values (BEGIN, COMMIT, ...) come back
    /// with an empty field list.
    pub fn convert(&mut self, record: &ChangeRecord) -> Result<Option<ConvertedRecord>, EngineError> {
        if self
            .start_timestamp
            .is_some_and(|start| record.source_timestamp < start)
        {
            self.stats.skipped_records += 1;
            return Ok(None);
        }

        let mut fields = Vec::new();
        if record.operation.carries_fields() {
            fields.reserve_exact(record.fields.len());
            for (index, field) in record.fields.iter().enumerate() {
                let value = match self.converter.convert(field.type_code, field.value.as_ref()) {
                    Ok(value) => {
                        self.stats.fields += 1;
                        Some(value)
                    }
                    Err(source) => {
                        self.stats.failed_fields += 1;
                        match self.policy {
                            FieldErrorPolicy::Abort => {
                                return Err(EngineError::Field { index, source });
                            }
                            FieldErrorPolicy::Skip => {
                                tracing::warn!(
                                    index,
                                    column = field.name.as_deref().unwrap_or(""),
                                    type_code = field.type_code,
                                    error = %source,
                                    "skipping field"
                                );
                                None
                            }
                        }
                    }
                };
                fields.push(ConvertedField {
                    name: field.name.clone(),
                    type_code: field.type_code,
                    logical_type: self.converter.logical_type(field.type_code),
                    value,
                });
            }
        }

        self.stats.records += 1;
        Ok(Some(ConvertedRecord {
            operation: record.operation,
            source_timestamp: record.source_timestamp,
            fields,
        }))
    }
}
