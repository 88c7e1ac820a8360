use anyhow::Result;
use clap::Args;
use recforge::core::format_record_type;

use super::{CompileOpts, SchemaSource};

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    source: SchemaSource,
}

impl ShowArgs {
    pub fn run(self, opts: &CompileOpts) -> Result<()> {
        let record = self.source.compile(opts)?;
        print!("{}", format_record_type(&record)?);
        Ok(())
    }
}
