//! Field descriptors: the JSON dialect accepted by the compiler.
//!
//! Only `type`, `description`, `default`, `properties` and `items` are read.
//! Other keys (`required`, `enum`, `$ref`, `title`, ...) are ignored.
//!
//! ```json
//! {
//!   "name": { "type": "string", "description": "Customer's name", "default": "John Doe" },
//!   "address": {
//!     "type": "object",
//!     "description": "Customer's address",
//!     "properties": { "city": { "type": "string", "description": "City" } }
//!   },
//!   "orders": {
//!     "type": "array",
//!     "description": "Orders",
//!     "items": { "type": "object", "properties": { "sku": { "type": "string" } } }
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{error::SchemaParseError, type_tag::TypeTag};

/// Top-level schema: field name → descriptor, in declaration order.
pub type SchemaDescriptor = IndexMap<String, FieldDescriptor>;

/// One schema entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// `None` (absent or `null`) means `string`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_tag: Option<TypeTag>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `Some(Value::Null)` for an explicit `"default": null`, `None` when absent.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<serde_json::Value>,

    /// Sub-fields; meaningful only for `object`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<SchemaDescriptor>,

    /// Element descriptor; meaningful only for `array`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<FieldDescriptor>>,
}

impl FieldDescriptor {
    pub fn new(type_tag: TypeTag) -> Self {
        Self {
            type_tag: Some(type_tag),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_properties(mut self, properties: SchemaDescriptor) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn with_items(mut self, items: FieldDescriptor) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    /// The declared tag, or `string` when absent.
    pub fn tag(&self) -> TypeTag {
        self.type_tag.clone().unwrap_or_default()
    }
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// Parse a schema from JSON text, reporting the JSON path of any error.
pub fn parse_schema_str(src: &str) -> Result<SchemaDescriptor, SchemaParseError> {
    parse_with(serde_json::Deserializer::from_str(src))
}

/// Parse a schema from JSON bytes, reporting the JSON path of any error.
pub fn parse_schema_slice(bytes: &[u8]) -> Result<SchemaDescriptor, SchemaParseError> {
    parse_with(serde_json::Deserializer::from_slice(bytes))
}

/// Interpret an already-parsed JSON value as a schema.
pub fn schema_from_value(value: serde_json::Value) -> Result<SchemaDescriptor, SchemaParseError> {
    Ok(serde_path_to_error::deserialize(value)?)
}

fn parse_with<'de, R>(mut de: serde_json::Deserializer<R>) -> Result<SchemaDescriptor, SchemaParseError>
where
    R: serde_json::de::Read<'de>,
{
    let schema = serde_path_to_error::deserialize(&mut de)?;
    de.end().map_err(SchemaParseError::trailing)?;
    Ok(schema)
}
