use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result, bail};
use clap::Args;
use rayon::prelude::*;
use recforge::{Extraction, core::RecordType};
use tracing::{info, warn};

use super::{CompileOpts, SchemaSource};

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    source: SchemaSource,

    /// Instance JSON files to validate
    #[arg(required = true)]
    instances: Vec<PathBuf>,

    /// Print each valid record as JSON
    #[arg(long)]
    print: bool,
}

impl ValidateArgs {
    pub fn run(self, opts: &CompileOpts) -> Result<()> {
        let record = self.source.compile(opts)?;

        let results: Vec<_> = self
            .instances
            .par_iter()
            .map(|path| (path, check_instance(&record, path)))
            .collect();

        let mut failed = 0;
        for (path, result) in &results {
            match result {
                Ok(extraction) => {
                    println!("{}: ok", path.display());
                    if !extraction.is_complete() {
                        println!("  missing: {}", extraction.missing().join(", "));
                    }
                    if self.print {
                        println!("{}", serde_json::to_string_pretty(extraction.record())?);
                    }
                }
                Err(err) => {
                    failed += 1;
                    warn!(path = %path.display(), "instance failed validation");
                    println!("{}: error: {err:#}", path.display());
                }
            }
        }

        info!(total = results.len(), failed, "validation finished");
        if failed > 0 {
            bail!("{failed} of {} instances failed validation", results.len());
        }
        Ok(())
    }
}

fn check_instance(record: &Arc<RecordType>, path: &Path) -> Result<Extraction> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(Extraction::from_instance(record, &value)?)
}
