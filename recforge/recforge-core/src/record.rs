//! Runtime instance of a [`RecordType`].

use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{error::ValueTypeError, schema::{FieldDef, RecordType}, value::Value};

/// A record instance: its type plus one [`Value`] per declared field, in
/// declaration order.
///
/// Instances are created by [`RecordType::construct`] and
/// [`RecordType::default_record`] and are immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicRecord {
    record_type: Arc<RecordType>,
    values: Vec<Value>,
}

impl DynamicRecord {
    pub(crate) fn from_parts(record_type: Arc<RecordType>, values: Vec<Value>) -> Self {
        debug_assert_eq!(record_type.fields().len(), values.len());
        Self {
            record_type,
            values,
        }
    }

    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.record_type
    }

    pub fn type_name(&self) -> &str {
        self.record_type.name()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        let idx = self.record_type.fields().position(name)?;
        self.values.get(idx)
    }

    /// Field definitions paired with their values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldDef, &Value)> {
        self.record_type.fields().iter().zip(self.values.iter())
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get_str(&self, name: &str) -> Result<Option<&str>, ValueTypeError> {
        self.field_value(name)?.try_str()
    }

    pub fn get_i64(&self, name: &str) -> Result<Option<i64>, ValueTypeError> {
        self.field_value(name)?.try_i64()
    }

    pub fn get_f64(&self, name: &str) -> Result<Option<f64>, ValueTypeError> {
        self.field_value(name)?.try_f64()
    }

    pub fn get_bool(&self, name: &str) -> Result<Option<bool>, ValueTypeError> {
        self.field_value(name)?.try_bool()
    }

    pub fn get_list(&self, name: &str) -> Result<Option<&[Value]>, ValueTypeError> {
        self.field_value(name)?.try_list()
    }

    pub fn get_record(&self, name: &str) -> Result<Option<&DynamicRecord>, ValueTypeError> {
        self.field_value(name)?.try_record()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.iter()
                .map(|(field, value)| (field.name.clone(), value.to_json()))
                .collect(),
        )
    }

    fn field_value(&self, name: &str) -> Result<&Value, ValueTypeError> {
        self.get(name).ok_or_else(|| ValueTypeError::UnknownField {
            record: self.type_name().to_string(),
            field: name.to_string(),
        })
    }
}

impl Serialize for DynamicRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(&field.name, value)?;
        }
        map.end()
    }
}
