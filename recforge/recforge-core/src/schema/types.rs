use std::{
    fmt::{Display, Formatter, Result},
    ops::Deref,
    sync::Arc,
};

use indexmap::IndexMap;

use crate::{record::DynamicRecord, value::Value};

/// Resolved type of a record field.
///
/// Variant names mirror [`Value`] where a one-to-one mapping exists.
/// Equality is structural: two independently compiled record types with the
/// same names, fields and defaults compare equal.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
    /// Nested record synthesized from an object descriptor with `properties`.
    Record(Arc<RecordType>),
    /// Homogeneous sequence.
    List(Box<FieldType>),
    /// Array descriptor without `items`; elements are unconstrained.
    UntypedList,
    /// Object descriptor without `properties`; an untyped key-value mapping.
    Map,
    /// Object descriptor resolved with an object-name hint. Kept as an opaque
    /// alias of that name; instances accept any mapping.
    Named(String),
    /// Unrecognized type tag; accepts any value.
    Any,
}

impl FieldType {
    pub fn is_primitive(&self) -> bool {
        !matches!(self, FieldType::Record(_) | FieldType::List(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Record(_) => "record",
            FieldType::List(_) => "list",
            FieldType::UntypedList => "untyped_list",
            FieldType::Map => "map",
            FieldType::Named(_) => "named",
            FieldType::Any => "any",
        }
    }

    /// Human-readable description used in validation messages, e.g.
    /// `list<record CustomerAddress>`.
    pub fn describe(&self) -> String {
        match self {
            FieldType::Record(record) => format!("record {}", record.name()),
            FieldType::List(elem) => format!("list<{}>", elem.describe()),
            FieldType::Named(alias) => format!("named {alias}"),
            other => other.type_name().to_string(),
        }
    }

    /// Type-correct empty value for this type.
    pub fn zero_value(&self) -> Value {
        match self {
            FieldType::String => Value::empty_string(),
            FieldType::Integer => Value::Integer(0),
            FieldType::Number => Value::Number(0.0),
            FieldType::Boolean => Value::Bool(false),
            FieldType::Record(record) => Value::Record(record.default_record()),
            FieldType::List(_) | FieldType::UntypedList => Value::List(Vec::new()),
            FieldType::Map | FieldType::Named(_) => Value::Map(IndexMap::new()),
            FieldType::Any => Value::Null,
        }
    }
}

/// One compiled field: name, resolved type, default and description.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub field_type: FieldType,
    pub default: Value,
    pub description: String,
}

impl FieldDef {
    pub fn new(
        name: impl Into<String>,
        field_type: FieldType,
        default: Value,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field_type,
            default,
            description: description.into(),
        }
    }
}

/// Ordered collection of [`FieldDef`]; order is schema declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldDefs(pub Vec<FieldDef>);

impl FieldDefs {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self(fields)
    }

    pub fn as_slice(&self) -> &[FieldDef] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDef> {
        self.0.iter()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|f| f.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&FieldDef> {
        self.0.iter().find(|f| f.name == name)
    }
}

impl From<Vec<FieldDef>> for FieldDefs {
    fn from(value: Vec<FieldDef>) -> Self {
        Self(value)
    }
}

impl From<FieldDefs> for Vec<FieldDef> {
    fn from(value: FieldDefs) -> Self {
        value.0
    }
}

impl AsRef<[FieldDef]> for FieldDefs {
    fn as_ref(&self) -> &[FieldDef] {
        self.as_slice()
    }
}

impl Deref for FieldDefs {
    type Target = [FieldDef];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

/// A named record type synthesized at runtime.
///
/// Nested record types are held by the fields that reference them, so a
/// `RecordType` owns the whole tree it was compiled from. It is immutable once
/// built and is shared via `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordType {
    name: String,
    fields: FieldDefs,
}

impl RecordType {
    pub fn new(name: impl Into<String>, fields: impl Into<FieldDefs>) -> Self {
        Self {
            name: name.into(),
            fields: fields.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &FieldDefs {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Record types referenced directly by this record's fields, including
    /// element types of lists, in field order.
    pub fn nested_records(&self) -> Vec<&Arc<RecordType>> {
        fn collect<'a>(ty: &'a FieldType, out: &mut Vec<&'a Arc<RecordType>>) {
            match ty {
                FieldType::Record(record) => out.push(record),
                FieldType::List(elem) => collect(elem, out),
                _ => {}
            }
        }

        let mut out = Vec::new();
        for field in self.fields.iter() {
            collect(&field.field_type, &mut out);
        }
        out
    }

    /// Look up a record type by name anywhere in this tree (including `self`).
    pub fn find_record(&self, name: &str) -> Option<&RecordType> {
        if self.name == name {
            return Some(self);
        }
        self.nested_records()
            .into_iter()
            .find_map(|nested| nested.find_record(name))
    }

    /// Instance with every field set to its declared default.
    pub fn default_record(self: &Arc<Self>) -> DynamicRecord {
        let values = self.fields.iter().map(|f| f.default.clone()).collect();
        DynamicRecord::from_parts(Arc::clone(self), values)
    }
}

impl Display for RecordType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_record_type(self)?;
        f.write_str(&text)
    }
}
