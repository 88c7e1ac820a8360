pub mod schema;
pub mod show;
pub mod validate;

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Args;
use recforge::{
    ModelCompiler,
    core::RecordType,
    json::{DEFAULT_MAX_DEPTH, MissingDefault},
};
use tracing::debug;

/// Compiler options shared by every subcommand.
#[derive(Args)]
pub struct CompileOpts {
    /// Maximum record/array nesting depth
    #[arg(long, global = true, env = "RECFORGE_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Default fields declared without a default to their type's zero value
    /// instead of ""
    #[arg(long, global = true, env = "RECFORGE_ZERO_DEFAULTS")]
    zero_defaults: bool,
}

impl CompileOpts {
    fn compiler(&self) -> ModelCompiler {
        let missing_default = if self.zero_defaults {
            MissingDefault::ZeroValue
        } else {
            MissingDefault::EmptyString
        };
        ModelCompiler::builder()
            .with_max_depth(self.max_depth)
            .with_missing_default(missing_default)
            .build()
    }
}

/// Schema file and the model name to compile it as.
#[derive(Args)]
pub struct SchemaSource {
    /// Path to the schema JSON file
    schema: PathBuf,

    /// Name of the top-level record type
    #[arg(short, long)]
    model: String,
}

impl SchemaSource {
    fn compile(&self, opts: &CompileOpts) -> Result<Arc<RecordType>> {
        let record = opts
            .compiler()
            .compile_file(&self.model, &self.schema)
            .with_context(|| format!("failed to compile {}", self.schema.display()))?;
        debug!(model = %self.model, fields = record.fields().len(), "compiled schema");
        Ok(record)
    }
}
