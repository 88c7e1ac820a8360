//! Error types for the `recforge` facade.

use recforge_core::{ConfigurationError, ValidationError};
use recforge_json::SchemaParseError;

/// Boxed error returned by an [`Extractor`](crate::Extractor).
pub type ExtractorError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced by [`ModelCompiler`](crate::ModelCompiler) and
/// [`ExtractionSession`](crate::ExtractionSession).
#[derive(Debug, thiserror::Error)]
pub enum RecforgeError {
    /// Schema file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    SchemaParse(#[from] SchemaParseError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An error returned by the user-supplied extractor.
    #[error("extractor failed: {0}")]
    Extractor(#[source] ExtractorError),
}
