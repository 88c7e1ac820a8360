//! Type-tag resolution for descriptors that do not synthesize a record.
//!
//! | tag                              | resolved type          |
//! |----------------------------------|------------------------|
//! | `string` / `integer` / `number` / `boolean` | scalar      |
//! | `array` with `items`             | `List(resolve(items))` |
//! | `array` without `items`          | `UntypedList`          |
//! | `object` with an object-name hint | `Named(hint)`         |
//! | `object` without a hint          | `Map`                  |
//! | anything else                    | `Any`                  |
//!
//! Resolution never fails; unknown input degrades to the most permissive
//! applicable type.

use recforge_core::FieldType;
use tracing::warn;

use crate::{descriptor::FieldDescriptor, type_tag::TypeTag};

/// Resolve a type tag, the optional `items` descriptor for arrays and an
/// optional object-name hint for bare objects.
pub fn resolve_type_tag(
    tag: &TypeTag,
    items: Option<&FieldDescriptor>,
    object_name: Option<&str>,
) -> FieldType {
    match tag {
        TypeTag::String => FieldType::String,
        TypeTag::Integer => FieldType::Integer,
        TypeTag::Number => FieldType::Number,
        TypeTag::Boolean => FieldType::Boolean,
        TypeTag::Array => match items {
            Some(items) => FieldType::List(Box::new(resolve_type_tag(
                &items.tag(),
                items.items.as_deref(),
                None,
            ))),
            None => FieldType::UntypedList,
        },
        TypeTag::Object => match object_name {
            Some(name) => FieldType::Named(name.to_string()),
            None => FieldType::Map,
        },
        TypeTag::Unknown(raw) => {
            warn!(tag = %raw, "unrecognized type tag, field accepts any value");
            FieldType::Any
        }
    }
}

/// Resolve a whole descriptor, ignoring `properties`.
pub fn resolve_descriptor_type(descriptor: &FieldDescriptor, object_name: Option<&str>) -> FieldType {
    resolve_type_tag(&descriptor.tag(), descriptor.items.as_deref(), object_name)
}
