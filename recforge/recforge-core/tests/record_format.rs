use std::sync::Arc;

use recforge_core::{FieldDef, FieldType, RecordType, Value, format_record_type};

#[test]
fn nested_record_keeps_type_line_and_indentation() -> Result<(), std::fmt::Error> {
    let address = Arc::new(RecordType::new(
        "CustomerAddress",
        vec![FieldDef::new(
            "city",
            FieldType::String,
            Value::string("Bandung"),
            "Customer's city",
        )],
    ));
    let record = RecordType::new(
        "Customer",
        vec![
            FieldDef::new("age", FieldType::Integer, Value::Integer(30), ""),
            FieldDef::new(
                "address",
                FieldType::Record(address),
                Value::empty_string(),
                "Customer's address",
            ),
        ],
    );

    let text = format_record_type(&record)?;
    let expected = "\
Customer:
    age: { type: integer, default: 30 }
    address:
        type: record
        name: CustomerAddress
        default: \"\"
        description: \"Customer's address\"
        fields:
            city: { type: string, default: \"Bandung\", description: \"Customer's city\" }
";
    assert_eq!(text, expected);
    assert_eq!(record.to_string(), expected);
    Ok(())
}

#[test]
fn list_of_records_is_rendered_as_block() -> Result<(), std::fmt::Error> {
    let item = Arc::new(RecordType::new(
        "Customer_OrdersItem",
        vec![FieldDef::new("sku", FieldType::String, Value::empty_string(), "")],
    ));
    let record = RecordType::new(
        "Customer",
        vec![
            FieldDef::new(
                "orders",
                FieldType::List(Box::new(FieldType::Record(item))),
                Value::empty_string(),
                "",
            ),
            FieldDef::new(
                "parent",
                FieldType::Named("Customer".to_string()),
                Value::empty_string(),
                "",
            ),
        ],
    );

    let text = format_record_type(&record)?;
    let expected = "\
Customer:
    orders:
        type: list
        default: \"\"
        item:
            type: record
            name: Customer_OrdersItem
            fields:
                sku: { type: string, default: \"\" }
    parent: { type: named, alias: Customer, default: \"\" }
";
    assert_eq!(text, expected);
    Ok(())
}
