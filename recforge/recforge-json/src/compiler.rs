//! Record synthesis: [`SchemaDescriptor`] → [`RecordType`].
//!
//! For each field, in declaration order:
//! 1. `object` with `properties` → nested record `<Parent><Field>`
//! 2. `array` with `items` → list; object items with `properties` become the
//!    record `<Parent>_<Field>Item`, nested arrays recurse
//! 3. anything else → [`resolve_type_tag`] with the parent name as the
//!    object-name hint
//!
//! Nested records are built eagerly, before the parent is returned.

use std::{collections::HashSet, sync::Arc};

use recforge_core::{ConfigurationError, FieldDef, FieldType, RecordType, Value};
use tracing::debug;

use crate::{
    descriptor::{FieldDescriptor, SchemaDescriptor},
    naming::{is_identifier, item_record_name, nested_record_name},
    type_resolver::resolve_type_tag,
    type_tag::TypeTag,
};

pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Default used for fields whose descriptor has no `default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingDefault {
    /// Every such field defaults to `""`, whatever its type. This is the
    /// behavior existing schemas were written against.
    #[default]
    EmptyString,
    /// Use the type's zero value (`0`, `false`, `[]`, nested defaults, ...).
    ZeroValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Maximum nesting of records and arrays below the top-level record.
    pub max_depth: usize,
    pub missing_default: MissingDefault,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            missing_default: MissingDefault::default(),
        }
    }
}

/// Compiles schemas into record types. Holds only options, so one instance
/// can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct SchemaCompiler {
    options: CompileOptions,
}

impl SchemaCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn compile(
        &self,
        model_name: &str,
        schema: &SchemaDescriptor,
    ) -> Result<Arc<RecordType>, ConfigurationError> {
        let mut synthesis = Synthesis {
            options: &self.options,
            names: HashSet::new(),
        };
        synthesis.record(model_name, ("", ""), schema, 0)
    }
}

/// Compile with default options.
pub fn compile(
    model_name: &str,
    schema: &SchemaDescriptor,
) -> Result<Arc<RecordType>, ConfigurationError> {
    SchemaCompiler::new().compile(model_name, schema)
}

/// State of one compile call: the record names synthesized so far.
struct Synthesis<'a> {
    options: &'a CompileOptions,
    names: HashSet<String>,
}

impl Synthesis<'_> {
    /// `origin` is the parent record and field the record was synthesized for,
    /// both empty for the top-level record.
    fn record(
        &mut self,
        name: &str,
        origin: (&str, &str),
        schema: &SchemaDescriptor,
        depth: usize,
    ) -> Result<Arc<RecordType>, ConfigurationError> {
        if !is_identifier(name) {
            return Err(ConfigurationError::InvalidIdentifier {
                model: name.to_string(),
                field: origin.1.to_string(),
            });
        }
        if !self.names.insert(name.to_string()) {
            return Err(ConfigurationError::NameCollision {
                name: name.to_string(),
                model: origin.0.to_string(),
                field: origin.1.to_string(),
            });
        }

        let mut fields = Vec::with_capacity(schema.len());
        for (field_name, descriptor) in schema {
            let field_type = self.field_type(name, field_name, descriptor, depth)?;
            let default = match &descriptor.default {
                Some(raw) => declared_default(&field_type, raw),
                None => self.missing_default(&field_type),
            };
            let description = descriptor.description.clone().unwrap_or_default();
            fields.push(FieldDef::new(field_name, field_type, default, description));
        }

        debug!(record = name, fields = fields.len(), depth, "synthesized record type");
        Ok(Arc::new(RecordType::new(name, fields)))
    }

    fn field_type(
        &mut self,
        model_name: &str,
        field_name: &str,
        descriptor: &FieldDescriptor,
        depth: usize,
    ) -> Result<FieldType, ConfigurationError> {
        match (descriptor.tag(), &descriptor.properties, &descriptor.items) {
            (TypeTag::Object, Some(properties), _) => {
                self.check_depth(model_name, field_name, depth + 1)?;
                let nested = nested_record_name(model_name, field_name);
                let record = self.record(&nested, (model_name, field_name), properties, depth + 1)?;
                Ok(FieldType::Record(record))
            }
            (TypeTag::Array, _, Some(items)) => {
                self.check_depth(model_name, field_name, depth + 1)?;
                let item_name = item_record_name(model_name, field_name);
                let elem = self.element_type(model_name, &item_name, field_name, items, depth + 1)?;
                Ok(FieldType::List(Box::new(elem)))
            }
            (tag, _, items) => Ok(resolve_type_tag(&tag, items.as_deref(), Some(model_name))),
        }
    }

    /// Element type of an array. `item_name` is the record name used if the
    /// element is an object with `properties`.
    fn element_type(
        &mut self,
        model_name: &str,
        item_name: &str,
        field_name: &str,
        items: &FieldDescriptor,
        depth: usize,
    ) -> Result<FieldType, ConfigurationError> {
        match (items.tag(), &items.properties, &items.items) {
            (TypeTag::Object, Some(properties), _) => {
                let record = self.record(item_name, (model_name, field_name), properties, depth)?;
                Ok(FieldType::Record(record))
            }
            (TypeTag::Array, _, Some(inner)) => {
                self.check_depth(model_name, field_name, depth + 1)?;
                let inner_name = format!("{item_name}Item");
                let elem = self.element_type(model_name, &inner_name, field_name, inner, depth + 1)?;
                Ok(FieldType::List(Box::new(elem)))
            }
            (tag, _, inner) => Ok(resolve_type_tag(&tag, inner.as_deref(), None)),
        }
    }

    fn check_depth(&self, model: &str, field: &str, depth: usize) -> Result<(), ConfigurationError> {
        if depth > self.options.max_depth {
            return Err(ConfigurationError::DepthExceeded {
                model: model.to_string(),
                field: field.to_string(),
                limit: self.options.max_depth,
            });
        }
        Ok(())
    }

    fn missing_default(&self, field_type: &FieldType) -> Value {
        match self.options.missing_default {
            MissingDefault::EmptyString => Value::empty_string(),
            MissingDefault::ZeroValue => field_type.zero_value(),
        }
    }
}

/// An object default on a record field becomes a record when it constructs
/// cleanly, so rendered zero-value defaults compile back to the same value.
/// Anything else is kept as declared.
fn declared_default(field_type: &FieldType, raw: &serde_json::Value) -> Value {
    if let (FieldType::Record(record), serde_json::Value::Object(_)) = (field_type, raw)
        && let Ok(instance) = record.construct(raw)
    {
        return Value::Record(instance);
    }
    Value::from(raw)
}
