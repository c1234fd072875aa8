// src/cli/menu.rs
use std::error::Error;

use console::style;
use inquire::{Confirm, Select, Text};

use crate::cli::handlers::styled_label;
use crate::generators::password::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};
use crate::generators::PasswordGenerator;
use crate::models::{CharCategory, GenerationRequest};

pub fn run_cli_menu(generator: &PasswordGenerator) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║          🔐 PASSFORGE                ║");
    println!("╚══════════════════════════════════════╝");

    loop {
        let options = vec![
            "🔐  Generate secure password",
            "📊  Rate an existing password",
            "🚪  Exit",
        ];

        let selection = Select::new("What would you like to do?", options).prompt()?;

        match selection {
            "🔐  Generate secure password" => {
                let length: usize = Text::new(&format!(
                    "Password length ({}-{}):",
                    MIN_LENGTH, MAX_LENGTH
                ))
                .with_default(&DEFAULT_LENGTH.to_string())
                .prompt()
                .and_then(|s| {
                    s.parse()
                        .map_err(|_| inquire::InquireError::Custom("Invalid number".into()))
                })?;

                let mut categories = Vec::new();
                for category in CharCategory::ALL {
                    // Original defaults: everything but spaces on.
                    let default = category != CharCategory::Space;
                    let include = Confirm::new(&format!(
                        "Include {}? ({})",
                        category.label().to_lowercase(),
                        category.hint()
                    ))
                    .with_default(default)
                    .prompt()?;

                    if include {
                        categories.push(category);
                    }
                }

                let request = GenerationRequest::new(length, categories);
                match generator.generate(&request) {
                    Ok(password) => {
                        let score = generator.score_strength(&password);
                        let entropy = generator.estimate_entropy(&password);

                        println!("\nGenerated password: {}", style(&password).bold());
                        println!("Strength: {}/100 ({})", score.score, styled_label(&score));
                        println!("Estimated entropy: {:.2} bits\n", entropy);
                    }
                    Err(e) => {
                        eprintln!("❌ Failed to generate password: {}", e);
                    }
                }
            }
            "📊  Rate an existing password" => {
                let password = Text::new("Password to rate:").prompt()?;

                let score = generator.score_strength(&password);
                let entropy = generator.estimate_entropy(&password);

                println!("Strength: {}/100 ({})", score.score, styled_label(&score));
                println!("Estimated entropy: {:.2} bits\n", entropy);
            }
            "🚪  Exit" => {
                println!("👋 Goodbye!");
                break;
            }
            _ => unreachable!(),
        }
    }

    Ok(())
}
