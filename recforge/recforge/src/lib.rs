//! Compile JSON field descriptors into record types at runtime, validate
//! instances against them and track which fields an extractor has filled.
//!
//! ```
//! use recforge::{Extraction, ModelCompiler, Route};
//! use serde_json::json;
//!
//! let compiler = ModelCompiler::builder().with_max_depth(8).build();
//! let customer = compiler
//!     .compile_value("Customer", json!({
//!         "name": { "type": "string", "description": "Customer's name" },
//!         "age": { "type": "integer", "description": "Customer's age" }
//!     }))
//!     .unwrap();
//!
//! let extraction = Extraction::from_arguments(&customer, &json!({ "name": "Alice" })).unwrap();
//! assert_eq!(extraction.route(), Route::AskMore(vec!["age".to_string()]));
//! ```

mod compiler;
mod error;
mod extraction;

pub use compiler::{ModelCompiler, ModelCompilerBuilder};
pub use error::{ExtractorError, RecforgeError};
pub use extraction::{Extraction, ExtractionSession, Extractor, Message, Role, Route};
pub use recforge_core as core;
pub use recforge_json as json;
