// src/cli/handlers.rs
use std::collections::BTreeSet;
use std::error::Error;

use console::style;
use serde_json::json;

use crate::generators::PasswordGenerator;
use crate::models::{CharCategory, GenerationRequest, ScoreResult, StrengthLabel};

// Handlers for CLI commands
pub fn handle_generate(
    generator: &PasswordGenerator,
    length: usize,
    categories: BTreeSet<CharCategory>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    log::debug!("generating password: length={}, categories={:?}", length, categories);

    let request = GenerationRequest { length, categories };
    let password = generator.generate(&request)?;
    let score = generator.score_strength(&password);
    let entropy = generator.estimate_entropy(&password);

    if json {
        println!(
            "{}",
            json!({
                "password": password,
                "score": score.score,
                "label": score.label.to_string(),
                "entropy_bits": entropy,
            })
        );
    } else {
        println!("Generated password: {}", style(&password).bold());
        println!("Strength: {}/100 ({})", score.score, styled_label(&score));
        println!("Estimated entropy: {:.2} bits", entropy);
    }

    Ok(())
}

pub fn handle_score(
    generator: &PasswordGenerator,
    password: &str,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let score = generator.score_strength(password);

    if json {
        println!(
            "{}",
            json!({
                "score": score.score,
                "label": score.label.to_string(),
            })
        );
    } else {
        println!("Strength: {}/100 ({})", score.score, styled_label(&score));
    }

    Ok(())
}

pub fn handle_entropy(
    generator: &PasswordGenerator,
    password: &str,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let entropy = generator.estimate_entropy(password);

    if json {
        println!("{}", json!({ "entropy_bits": entropy }));
    } else {
        println!("Estimated entropy: {:.2} bits", entropy);
    }

    Ok(())
}

/// Build the category selection from the generate command's flags.
pub fn selected_categories(
    no_uppercase: bool,
    no_lowercase: bool,
    no_digits: bool,
    no_symbols: bool,
    spaces: bool,
) -> BTreeSet<CharCategory> {
    let mut categories = BTreeSet::new();
    if !no_uppercase {
        categories.insert(CharCategory::Uppercase);
    }
    if !no_lowercase {
        categories.insert(CharCategory::Lowercase);
    }
    if !no_digits {
        categories.insert(CharCategory::Digits);
    }
    if !no_symbols {
        categories.insert(CharCategory::Symbols);
    }
    if spaces {
        categories.insert(CharCategory::Space);
    }
    categories
}

pub fn styled_label(score: &ScoreResult) -> String {
    let text = score.label.to_string();
    match score.label {
        StrengthLabel::NoPassword | StrengthLabel::Weak => style(text).red().to_string(),
        StrengthLabel::Medium => style(text).yellow().to_string(),
        StrengthLabel::Strong | StrengthLabel::VeryStrong => style(text).green().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_select_the_four_common_categories() {
        let categories = selected_categories(false, false, false, false, false);
        assert_eq!(categories.len(), 4);
        assert!(!categories.contains(&CharCategory::Space));
    }

    #[test]
    fn all_exclusions_yield_empty_selection() {
        // The generator rejects this; the CLI just passes it through.
        let categories = selected_categories(true, true, true, true, false);
        assert!(categories.is_empty());
    }
}
