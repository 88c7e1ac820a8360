use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Args;
use recforge::json::render_prompt_schema;

use super::{CompileOpts, SchemaSource};

#[derive(Args)]
pub struct SchemaArgs {
    #[command(flatten)]
    source: SchemaSource,

    /// Only include these top-level fields
    #[arg(short, long, value_delimiter = ',')]
    include: Vec<String>,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self, opts: &CompileOpts) -> Result<()> {
        let record = self.source.compile(opts)?;
        let include: Vec<&str> = self.include.iter().map(String::as_str).collect();
        let filter = (!include.is_empty()).then_some(include.as_slice());
        let text = render_prompt_schema(&record, filter)?;

        match self.output {
            Some(path) => fs::write(path, format!("{text}\n"))?,
            None => println!("{text}"),
        }
        Ok(())
    }
}
