use crate::converter::Dialect;

/// Field-level conversion failure.
///
/// Every variant except `UnsupportedDialect` concerns a single field: the
/// core never aborts a record or a batch on its own. What to do with a failed
/// field (abort the record, substitute a sentinel, skip) is the caller's call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Source name did not match any known dialect. Raised at setup time.
    #[error("unsupported dialect: '{0}'")]
    UnsupportedDialect(String),

    /// The dialect's dispatch table has no adapter for this type code.
    #[error("{dialect}: unknown field type code {code}")]
    UnknownTypeCode { dialect: Dialect, code: i32 },

    /// The raw value shape does not match what the adapter expects.
    #[error("{adapter}: unsupported raw value variant '{found}'")]
    UnsupportedRawValueVariant {
        adapter: &'static str,
        found: &'static str,
    },

    /// Text bytes could not be decoded under their declared charset.
    #[error("cannot decode text as '{charset}': {reason}")]
    CharsetDecodingFailure {
        charset: String,
        reason: &'static str,
    },

    /// A date/time component does not fit its fixed-width text slot.
    #[error("{component} out of range: {value}")]
    ComponentOutOfRange {
        component: &'static str,
        value: i64,
    },
}

impl ConvertError {
    /// `true` for errors that make the whole converter unusable, as opposed
    /// to failures scoped to one field.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ConvertError::UnsupportedDialect(_))
    }
}
