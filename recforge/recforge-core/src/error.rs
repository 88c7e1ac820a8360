//! Error types for record compilation and record construction.

/// Error returned when a schema cannot be compiled into a [`RecordType`](crate::RecordType).
///
/// These are fatal to a single compile call. Compilation is deterministic, so
/// retrying with the same schema yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// A model name (given or synthesized from a field name) is not a valid identifier.
    #[error("invalid record type name '{model}' (from field '{field}')")]
    InvalidIdentifier { model: String, field: String },

    /// Nesting went deeper than the configured limit.
    #[error("schema nesting exceeds depth limit {limit} at '{model}.{field}'")]
    DepthExceeded {
        model: String,
        field: String,
        limit: usize,
    },

    /// Two synthesized record types in the same compile call share a name.
    #[error("record type name '{name}' synthesized for '{model}.{field}' is already in use")]
    NameCollision {
        name: String,
        model: String,
        field: String,
    },
}

/// Why a value was rejected during record construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationErrorKind {
    #[error("expected {expected}, found {actual}")]
    TypeMismatch {
        expected: String,
        actual: &'static str,
    },

    #[error("expected {expected}, found null")]
    NullValue { expected: String },

    #[error("integer {value} does not fit in i64")]
    IntegerOutOfRange { value: String },
}

/// Error returned by [`RecordType::construct`](crate::RecordType::construct).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid '{record}' at {path}: {kind}")]
pub struct ValidationError {
    /// Name of the top-level record type being constructed.
    pub record: String,
    /// Location of the offending value, e.g. `$.experience[2].title`.
    pub path: String,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(record: impl Into<String>, path: impl Into<String>, kind: ValidationErrorKind) -> Self {
        Self {
            record: record.into(),
            path: path.into(),
            kind,
        }
    }
}

/// Error returned by typed accessors on [`Value`](crate::Value) and
/// [`DynamicRecord`](crate::DynamicRecord).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueTypeError {
    #[error("expected {expected}, found {actual}")]
    Mismatch {
        expected: String,
        actual: &'static str,
    },

    #[error("record '{record}' has no field '{field}'")]
    UnknownField { record: String, field: String },
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: &'static str) -> Self {
        Self::Mismatch {
            expected: expected.into(),
            actual,
        }
    }
}
