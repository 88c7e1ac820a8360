use std::sync::Arc;

use recforge_core::{FieldDef, FieldType, RecordType, Value, ValueTypeError};
use serde_json::json;

fn customer() -> Arc<RecordType> {
    Arc::new(RecordType::new(
        "Customer",
        vec![
            FieldDef::new("name", FieldType::String, Value::string("John Doe"), "Customer's name"),
            FieldDef::new("age", FieldType::Integer, Value::Integer(30), "Customer's age"),
            FieldDef::new("score", FieldType::Number, Value::Integer(1), ""),
        ],
    ))
}

#[test]
fn value_string_creates_arc_str_value() {
    let value = Value::string("hello");
    match value {
        Value::String(s) => assert_eq!(&*s, "hello"),
        other => panic!("unexpected value variant: {:?}", other),
    }
}

#[test]
fn value_from_json_keeps_integers_and_order() {
    let value = Value::from(&json!({"b": 1, "a": [1.5, "x", null], "c": true}));
    let map = value.try_map().unwrap().unwrap();
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    assert_eq!(map["b"], Value::Integer(1));
    assert_eq!(
        map["a"],
        Value::List(vec![Value::Number(1.5), Value::string("x"), Value::Null])
    );
    assert_eq!(map["c"], Value::Bool(true));
}

#[test]
fn value_to_json_round_trips_plain_json() {
    let input = json!({"name": "Alice", "tags": ["a", "b"], "nested": {"n": 2}, "none": null});
    assert_eq!(Value::from(&input).to_json(), input);
}

#[test]
fn try_accessors_report_mismatch_and_null() {
    let value = Value::string("text");
    assert_eq!(value.try_str().unwrap(), Some("text"));
    assert_eq!(
        value.try_i64().unwrap_err(),
        ValueTypeError::new("Integer", "String")
    );
    assert_eq!(Value::Null.try_bool().unwrap(), None);
    assert_eq!(Value::Integer(3).try_f64().unwrap(), Some(3.0));
}

#[test]
fn default_record_exposes_declared_defaults() {
    let record = customer().default_record();
    assert_eq!(record.type_name(), "Customer");
    assert_eq!(record.get_str("name").unwrap(), Some("John Doe"));
    assert_eq!(record.get_i64("age").unwrap(), Some(30));
    assert_eq!(record.get_f64("score").unwrap(), Some(1.0));
}

#[test]
fn unknown_field_access_is_an_error() {
    let record = customer().default_record();
    assert!(record.get("email").is_none());
    assert!(matches!(
        record.get_str("email"),
        Err(ValueTypeError::UnknownField { record, field }) if record == "Customer" && field == "email"
    ));
}

#[test]
fn record_serializes_in_declaration_order() {
    let record = customer()
        .construct(&json!({"age": 20, "name": "Alice", "ignored": 1}))
        .unwrap();
    let text = serde_json::to_string(&record).unwrap();
    assert_eq!(text, r#"{"name":"Alice","age":20,"score":1}"#);
    assert_eq!(record.to_json(), json!({"name": "Alice", "age": 20, "score": 1}));
}

#[test]
fn nested_records_and_find_record() {
    let address = Arc::new(RecordType::new(
        "CustomerAddress",
        vec![FieldDef::new("city", FieldType::String, Value::empty_string(), "")],
    ));
    let tag = Arc::new(RecordType::new("Customer_TagsItem", Vec::<FieldDef>::new()));
    let customer = RecordType::new(
        "Customer",
        vec![
            FieldDef::new("address", FieldType::Record(address), Value::empty_string(), ""),
            FieldDef::new(
                "tags",
                FieldType::List(Box::new(FieldType::Record(tag))),
                Value::empty_string(),
                "",
            ),
        ],
    );

    let names: Vec<&str> = customer.nested_records().iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["CustomerAddress", "Customer_TagsItem"]);
    assert!(customer.find_record("CustomerAddress").is_some());
    assert!(customer.find_record("Missing").is_none());
}

#[test]
fn zero_values_are_type_correct() {
    assert_eq!(FieldType::Integer.zero_value(), Value::Integer(0));
    assert_eq!(FieldType::Boolean.zero_value(), Value::Bool(false));
    assert_eq!(FieldType::UntypedList.zero_value(), Value::List(Vec::new()));
    assert_eq!(FieldType::Any.zero_value(), Value::Null);

    let zero = FieldType::Record(customer()).zero_value();
    let record = zero.try_record().unwrap().unwrap();
    assert_eq!(record.get_str("name").unwrap(), Some("John Doe"));
}

#[test]
fn large_unsigned_json_widens_to_number() {
    assert_eq!(
        Value::from(&json!(u64::MAX)),
        Value::Number(u64::MAX as f64)
    );
    assert_eq!(Value::from(&json!(i64::MAX)), Value::Integer(i64::MAX));

    let record = Arc::new(RecordType::new(
        "Counter",
        vec![FieldDef::new("total", FieldType::Integer, Value::Integer(0), "")],
    ));
    assert!(record.construct(&json!({ "total": u64::MAX })).is_err());
}
