use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Type tags recognized in the `type` key of a field descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TypeTag {
    /// `string`; also the tag assumed when `type` is absent.
    #[default]
    String,
    /// `integer`
    Integer,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `array`
    Array,
    /// `object`
    Object,
    /// Anything else, kept verbatim. Non-string JSON in `type` lands here too.
    Unknown(String),
}

impl TypeTag {
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for TypeTag {
    fn from(s: &str) -> Self {
        match s {
            "string" => Self::String,
            "integer" => Self::Integer,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "array" => Self::Array,
            "object" => Self::Object,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => TypeTag::from(s.as_str()),
            other => TypeTag::Unknown(other.to_string()),
        })
    }
}
