// src/main.rs
use std::error::Error;

use clap::Parser;

use passforge::cli::{handlers, menu, Args, CliCommand};
use passforge::PasswordGenerator;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let args = Args::parse();
    log::debug!("command line args: {:?}", args);

    let generator = PasswordGenerator::new();

    match args.command {
        Some(CliCommand::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_digits,
            no_symbols,
            spaces,
        }) => {
            let categories = handlers::selected_categories(
                no_uppercase,
                no_lowercase,
                no_digits,
                no_symbols,
                spaces,
            );
            handlers::handle_generate(&generator, length, categories, args.json)
        }
        Some(CliCommand::Score { password }) => {
            handlers::handle_score(&generator, &password, args.json)
        }
        Some(CliCommand::Entropy { password }) => {
            handlers::handle_entropy(&generator, &password, args.json)
        }
        None => menu::run_cli_menu(&generator),
    }
}
