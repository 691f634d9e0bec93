pub mod config;
pub mod error;
pub mod factory;
pub mod listener;

pub use config::RecastConfig;
pub use error::EngineError;
pub use factory::converter_for;
pub use listener::{ConversionStats, ConvertedField, ConvertedRecord, FieldErrorPolicy, RecordConverter};
