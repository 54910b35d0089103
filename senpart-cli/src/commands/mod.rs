//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use senpart_core::LanguageProfile;

pub mod process;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split sentences from text input into passive-voice candidate clauses
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List registered language profiles
    Languages,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages => {
                for code in LanguageProfile::available() {
                    let profile = LanguageProfile::get(code)?;
                    println!("{code}\t{}", profile.name());
                }
            }
            ListCommands::Formats => {
                println!("text");
                println!("json");
            }
        }
        Ok(())
    }
}
