//! Names of synthesized record types.
//!
//! | descriptor                         | record name                 |
//! |------------------------------------|-----------------------------|
//! | `object` field with `properties`   | `<Parent><Field>`           |
//! | `array` field, object `items`      | `<Parent>_<Field>Item`      |
//! | each further array nesting level   | one more `Item` suffix      |
//!
//! `<Field>` is the field name with its first character upper-cased and the
//! rest lower-cased, so `firstName` becomes `Firstname`.

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn nested_record_name(parent: &str, field: &str) -> String {
    format!("{parent}{}", capitalize(field))
}

pub fn item_record_name(parent: &str, field: &str) -> String {
    format!("{parent}_{}Item", capitalize(field))
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {
            bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
        }
        _ => false,
    }
}
