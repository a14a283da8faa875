// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Constrained password generation and strength analysis", long_about = None)]
pub struct Args {
    /// Use JSON for output (for scripting)
    #[arg(long)]
    pub json: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: CliCommand,
}
