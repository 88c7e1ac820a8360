//! Error type for schema parsing.

/// Schema JSON could not be read into field descriptors.
#[derive(Debug, thiserror::Error)]
#[error("failed to parse schema at JSON path {path}: {source}")]
pub struct SchemaParseError {
    /// Location of the error, e.g. `address.properties.city.items`.
    pub path: String,
    #[source]
    pub source: serde_json::Error,
}

impl SchemaParseError {
    pub(crate) fn trailing(source: serde_json::Error) -> Self {
        Self {
            path: ".".to_string(),
            source,
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for SchemaParseError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        Self {
            path,
            source: err.into_inner(),
        }
    }
}
