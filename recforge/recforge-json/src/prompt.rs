//! Render compiled record types back into the descriptor dialect.
//!
//! The output is what an extractor is shown to describe the fields it should
//! fill. Compiling the rendered descriptor under the same model name gives a
//! record type equal to the input.

use recforge_core::{FieldType, RecordType};

use crate::{
    descriptor::{FieldDescriptor, SchemaDescriptor},
    type_tag::TypeTag,
};

/// Tag emitted for `Any` fields. It is not a recognized tag, so it resolves
/// back to `Any`.
const ANY_TAG: &str = "any";

/// Descriptor for every field of `record`, in declaration order.
pub fn to_descriptor(record: &RecordType) -> SchemaDescriptor {
    record
        .fields()
        .iter()
        .map(|field| {
            let mut descriptor = type_descriptor(&field.field_type)
                .with_default(field.default.to_json());
            if !field.description.is_empty() {
                descriptor = descriptor.with_description(field.description.clone());
            }
            (field.name.clone(), descriptor)
        })
        .collect()
}

pub fn to_descriptor_value(record: &RecordType) -> serde_json::Value {
    // Descriptors hold only strings, maps and JSON values; serializing them
    // into a `Value` cannot fail.
    serde_json::to_value(to_descriptor(record)).unwrap_or(serde_json::Value::Null)
}

/// Pretty-printed prompt schema. With `include_fields`, only those top-level
/// fields are kept; names the record does not declare are ignored.
pub fn render_prompt_schema(
    record: &RecordType,
    include_fields: Option<&[&str]>,
) -> Result<String, serde_json::Error> {
    let mut descriptor = to_descriptor(record);
    if let Some(include) = include_fields {
        descriptor.retain(|name, _| include.contains(&name.as_str()));
    }
    serde_json::to_string_pretty(&descriptor)
}

fn type_descriptor(field_type: &FieldType) -> FieldDescriptor {
    match field_type {
        FieldType::String => FieldDescriptor::new(TypeTag::String),
        FieldType::Integer => FieldDescriptor::new(TypeTag::Integer),
        FieldType::Number => FieldDescriptor::new(TypeTag::Number),
        FieldType::Boolean => FieldDescriptor::new(TypeTag::Boolean),
        FieldType::Record(record) => {
            FieldDescriptor::new(TypeTag::Object).with_properties(to_descriptor(record))
        }
        // Elements carry no default or description.
        FieldType::List(elem) => FieldDescriptor::new(TypeTag::Array).with_items(type_descriptor(elem)),
        FieldType::UntypedList => FieldDescriptor::new(TypeTag::Array),
        FieldType::Map | FieldType::Named(_) => FieldDescriptor::new(TypeTag::Object),
        FieldType::Any => FieldDescriptor::new(TypeTag::Unknown(ANY_TAG.to_string())),
    }
}

