use std::fmt::{Error, Result, Write as _};

use super::{FieldDef, FieldType, RecordType};
use crate::value::Value;

/// Format a record type in a readable style:
/// scalar fields are rendered in one line, records and lists are
/// pretty-printed. Nested fields follow the same rule.
pub fn format_record_type(record: &RecordType) -> std::result::Result<String, Error> {
    let mut out = String::new();
    writeln!(out, "{}:", record.name())?;
    for field in record.fields().iter() {
        format_field(field, 4, &mut out)?;
    }
    Ok(out)
}

fn format_field(field: &FieldDef, indent: usize, out: &mut String) -> Result {
    format_labeled_type(
        &field.name,
        &field.field_type,
        Some((&field.default, field.description.as_str())),
        indent,
        out,
    )
}

fn format_compound_type(
    field_type: &FieldType,
    meta: Option<(&Value, &str)>,
    indent: usize,
    out: &mut String,
) -> Result {
    let pad = " ".repeat(indent);
    writeln!(out, "{pad}type: {}", field_type.type_name())?;
    if let FieldType::Record(record) = field_type {
        writeln!(out, "{pad}name: {}", record.name())?;
    }
    if let Some((default, description)) = meta {
        writeln!(out, "{pad}default: {}", default.to_json())?;
        if !description.is_empty() {
            writeln!(out, "{pad}description: {description:?}")?;
        }
    }

    match field_type {
        FieldType::Record(record) => {
            writeln!(out, "{pad}fields:")?;
            for child in record.fields().iter() {
                format_field(child, indent + 4, out)?;
            }
        }
        FieldType::List(elem) => {
            format_labeled_type("item", elem, None, indent, out)?;
        }
        _ => unreachable!("{field_type:?} is not a compound type"),
    }

    Ok(())
}

fn format_labeled_type(
    label: &str,
    field_type: &FieldType,
    meta: Option<(&Value, &str)>,
    indent: usize,
    out: &mut String,
) -> Result {
    let pad = " ".repeat(indent);
    if field_type.is_primitive() {
        write!(out, "{pad}{label}: {{ type: {}", field_type.type_name())?;
        if let FieldType::Named(alias) = field_type {
            write!(out, ", alias: {alias}")?;
        }
        if let Some((default, description)) = meta {
            write!(out, ", default: {}", default.to_json())?;
            if !description.is_empty() {
                write!(out, ", description: {description:?}")?;
            }
        }
        writeln!(out, " }}")?;
    } else {
        writeln!(out, "{pad}{label}:")?;
        format_compound_type(field_type, meta, indent + 4, out)?;
    }
    Ok(())
}
