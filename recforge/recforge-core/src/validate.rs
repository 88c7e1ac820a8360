//! Construction-time validation of record instances.
//!
//! Rules:
//! - the input must be a JSON object; undeclared keys are ignored
//! - an absent field takes the field's declared default, unchecked
//! - a present field must match the field type exactly; the only widening is
//!   integer input for number fields
//! - `null` is rejected for every type except `Any`

use std::sync::Arc;

use serde_json::Value as Json;

use crate::{
    error::{ValidationError, ValidationErrorKind},
    record::DynamicRecord,
    schema::{FieldType, RecordType},
    value::Value,
};

const ROOT_PATH: &str = "$";

impl RecordType {
    /// Build an instance from JSON input, validating every supplied field.
    pub fn construct(self: &Arc<Self>, input: &Json) -> Result<DynamicRecord, ValidationError> {
        let validator = Validator { root: self.name() };
        validator.record(self, input, ROOT_PATH)
    }
}

struct Validator<'a> {
    root: &'a str,
}

impl Validator<'_> {
    fn record(
        &self,
        record_type: &Arc<RecordType>,
        input: &Json,
        path: &str,
    ) -> Result<DynamicRecord, ValidationError> {
        let Json::Object(obj) = input else {
            return Err(self.mismatch(path, format!("record {}", record_type.name()), input));
        };

        let mut values = Vec::with_capacity(record_type.fields().len());
        for field in record_type.fields().iter() {
            let value = match obj.get(&field.name) {
                Some(raw) => self.value(&field.field_type, raw, &make_path(path, &field.name))?,
                None => field.default.clone(),
            };
            values.push(value);
        }

        Ok(DynamicRecord::from_parts(Arc::clone(record_type), values))
    }

    fn value(&self, field_type: &FieldType, raw: &Json, path: &str) -> Result<Value, ValidationError> {
        if raw.is_null() && !matches!(field_type, FieldType::Any) {
            return Err(ValidationError::new(
                self.root,
                path,
                ValidationErrorKind::NullValue {
                    expected: field_type.describe(),
                },
            ));
        }

        match (field_type, raw) {
            (FieldType::String, Json::String(s)) => Ok(Value::string(s)),
            (FieldType::Integer, Json::Number(n)) if n.is_i64() || n.is_u64() => match n.as_i64() {
                Some(i) => Ok(Value::Integer(i)),
                None => Err(ValidationError::new(
                    self.root,
                    path,
                    ValidationErrorKind::IntegerOutOfRange {
                        value: n.to_string(),
                    },
                )),
            },
            (FieldType::Number, Json::Number(n)) => match n.as_f64() {
                Some(f) => Ok(Value::Number(f)),
                None => Err(self.mismatch(path, field_type.describe(), raw)),
            },
            (FieldType::Boolean, Json::Bool(b)) => Ok(Value::Bool(*b)),
            (FieldType::Record(record_type), Json::Object(_)) => {
                Ok(Value::Record(self.record(record_type, raw, path)?))
            }
            (FieldType::List(elem), Json::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| self.value(elem, item, &format!("{path}[{i}]")))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            (FieldType::UntypedList, Json::Array(_))
            | (FieldType::Map | FieldType::Named(_), Json::Object(_))
            | (FieldType::Any, _) => Ok(Value::from(raw)),
            _ => Err(self.mismatch(path, field_type.describe(), raw)),
        }
    }

    fn mismatch(&self, path: &str, expected: String, actual: &Json) -> ValidationError {
        ValidationError::new(
            self.root,
            path,
            ValidationErrorKind::TypeMismatch {
                expected,
                actual: json_type_name(actual),
            },
        )
    }
}

fn make_path(prefix: &str, key: &str) -> String {
    format!("{prefix}.{key}")
}

fn json_type_name(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(n) if n.is_f64() => "number",
        Json::Number(_) => "integer",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
