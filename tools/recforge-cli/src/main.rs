mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{CompileOpts, schema::SchemaArgs, show::ShowArgs, validate::ValidateArgs};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "recforge",
    version,
    about = "Compile field-descriptor schemas into record types"
)]
struct Cli {
    #[command(flatten)]
    compile: CompileOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the compiled record type
    Show(ShowArgs),
    /// Print the prompt schema for a record type
    Schema(SchemaArgs),
    /// Validate instance files against a record type
    Validate(ValidateArgs),
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show(args) => args.run(&cli.compile),
        Commands::Schema(args) => args.run(&cli.compile),
        Commands::Validate(args) => args.run(&cli.compile),
    }
}
