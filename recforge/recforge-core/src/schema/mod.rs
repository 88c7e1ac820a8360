//! Compiled record schema representation.

mod format;
mod types;

pub use format::format_record_type;
pub use types::{FieldDef, FieldDefs, FieldType, RecordType};
