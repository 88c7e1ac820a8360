//! Format-agnostic core types for `recforge`.
//!
//! This crate provides the compiled schema representation ([`RecordType`] /
//! [`FieldType`]), the runtime record container ([`DynamicRecord`] /
//! [`Value`]) and construction-time validation of record instances.
//!
//! Record types are produced at runtime by a schema front end (see
//! `recforge-json`), so there is no nominal Rust type per record. A
//! [`DynamicRecord`] instead keeps one [`Value`] slot per declared field and
//! is only ever built through [`RecordType::construct`] or
//! [`RecordType::default_record`].

mod error;
mod record;
mod schema;
mod validate;
mod value;

pub use error::{ConfigurationError, ValidationError, ValidationErrorKind, ValueTypeError};
pub use record::DynamicRecord;
pub use schema::{FieldDef, FieldDefs, FieldType, RecordType, format_record_type};
pub use value::Value;
