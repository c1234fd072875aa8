// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON for output (for scripting use)
    #[arg(long)]
    pub json: bool,

    /// Command to execute; without one the interactive menu starts
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
