//! JSON front end for `recforge`: field descriptors in, record types out.
//!
//! ```text
//! schema JSON ──parse_schema_str──▶ SchemaDescriptor ──compile──▶ Arc<RecordType>
//!                                                                  │
//!                                     render_prompt_schema ◀───────┘
//! ```
//!
//! ```
//! use recforge_json::{compile, parse_schema_str};
//!
//! let schema = parse_schema_str(r#"{
//!     "name": { "type": "string", "description": "Customer's name" },
//!     "age": { "type": "integer", "default": 0 }
//! }"#).unwrap();
//! let customer = compile("Customer", &schema).unwrap();
//!
//! assert_eq!(customer.name(), "Customer");
//! assert_eq!(customer.field_names().collect::<Vec<_>>(), ["name", "age"]);
//! ```

mod compiler;
mod descriptor;
mod error;
mod naming;
mod prompt;
mod type_resolver;
mod type_tag;

pub use compiler::{CompileOptions, DEFAULT_MAX_DEPTH, MissingDefault, SchemaCompiler, compile};
pub use descriptor::{
    FieldDescriptor, SchemaDescriptor, parse_schema_slice, parse_schema_str, schema_from_value,
};
pub use error::SchemaParseError;
pub use naming::{capitalize, is_identifier, item_record_name, nested_record_name};
pub use prompt::{render_prompt_schema, to_descriptor, to_descriptor_value};
pub use type_resolver::{resolve_descriptor_type, resolve_type_tag};
pub use type_tag::TypeTag;
