// src/cli/commands.rs
use clap::Subcommand;

use crate::generators::password::DEFAULT_LENGTH;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate {
        /// Password length
        #[arg(long, short, default_value_t = DEFAULT_LENGTH)]
        length: usize,

        /// Exclude uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Exclude lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Exclude digits
        #[arg(long)]
        no_digits: bool,

        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,

        /// Include the space character
        #[arg(long)]
        spaces: bool,
    },

    /// Score the strength of a password
    Score {
        /// Password to rate
        #[arg(required = true)]
        password: String,
    },

    /// Estimate the entropy of a password in bits
    Entropy {
        /// Password to rate
        #[arg(required = true)]
        password: String,
    },
}
