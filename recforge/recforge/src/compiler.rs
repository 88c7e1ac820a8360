//! Schema loading and compilation with configurable options.

use std::{fs, path::Path, sync::Arc};

use recforge_core::RecordType;
use recforge_json::{
    CompileOptions, MissingDefault, SchemaCompiler, SchemaDescriptor, parse_schema_slice,
    parse_schema_str, schema_from_value,
};
use tracing::debug;

use crate::error::RecforgeError;

/// Compiles schemas from descriptors, JSON text or files.
#[derive(Debug, Clone, Default)]
pub struct ModelCompiler {
    compiler: SchemaCompiler,
}

/// Builder for configuring [`ModelCompiler`].
#[derive(Debug, Clone, Default)]
pub struct ModelCompilerBuilder {
    options: CompileOptions,
}

impl ModelCompiler {
    pub fn builder() -> ModelCompilerBuilder {
        ModelCompilerBuilder::default()
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &CompileOptions {
        self.compiler.options()
    }

    pub fn compile(
        &self,
        model_name: &str,
        schema: &SchemaDescriptor,
    ) -> Result<Arc<RecordType>, RecforgeError> {
        Ok(self.compiler.compile(model_name, schema)?)
    }

    pub fn compile_str(&self, model_name: &str, src: &str) -> Result<Arc<RecordType>, RecforgeError> {
        let schema = parse_schema_str(src)?;
        self.compile(model_name, &schema)
    }

    pub fn compile_value(
        &self,
        model_name: &str,
        value: serde_json::Value,
    ) -> Result<Arc<RecordType>, RecforgeError> {
        let schema = schema_from_value(value)?;
        self.compile(model_name, &schema)
    }

    /// Read a schema file and compile it as `model_name`.
    pub fn compile_file(
        &self,
        model_name: &str,
        path: &Path,
    ) -> Result<Arc<RecordType>, RecforgeError> {
        let bytes = fs::read(path).map_err(|source| RecforgeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let schema = parse_schema_slice(&bytes)?;
        debug!(path = %path.display(), fields = schema.len(), "loaded schema");
        self.compile(model_name, &schema)
    }
}

impl ModelCompilerBuilder {
    /// Set the maximum record/array nesting depth (default: 32).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = max_depth;
        self
    }

    /// Choose the default for fields declared without one (default: `""`).
    pub fn with_missing_default(mut self, missing_default: MissingDefault) -> Self {
        self.options.missing_default = missing_default;
        self
    }

    pub fn build(self) -> ModelCompiler {
        ModelCompiler {
            compiler: SchemaCompiler::with_options(self.options),
        }
    }
}
