//! senpart command-line entry point

use anyhow::Result;
use clap::Parser;
use senpart_cli::commands::Commands;

/// Split sentences into passive-voice candidate clauses
#[derive(Debug, Parser)]
#[command(name = "senpart", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Process(args) => args.execute(),
        Commands::List { subcommand } => subcommand.execute(),
    }
}
