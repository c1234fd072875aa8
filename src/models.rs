// src/models.rs
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::generators::password::DEFAULT_LENGTH;

/// One of the five fixed character categories a password can draw from.
///
/// Categories are process-wide constants: each carries its member set, a
/// display label and a short hint for UI consumers. They are never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharCategory {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
    Space,
}

impl CharCategory {
    pub const ALL: [CharCategory; 5] = [
        CharCategory::Uppercase,
        CharCategory::Lowercase,
        CharCategory::Digits,
        CharCategory::Symbols,
        CharCategory::Space,
    ];

    /// The fixed member set of this category.
    pub fn members(&self) -> &'static str {
        match self {
            CharCategory::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharCategory::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharCategory::Digits => "0123456789",
            CharCategory::Symbols => "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
            CharCategory::Space => " ",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CharCategory::Uppercase => "Uppercase letters",
            CharCategory::Lowercase => "Lowercase letters",
            CharCategory::Digits => "Digits",
            CharCategory::Symbols => "Symbols",
            CharCategory::Space => "Space",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            CharCategory::Uppercase => "A-Z",
            CharCategory::Lowercase => "a-z",
            CharCategory::Digits => "0-9",
            CharCategory::Symbols => "!@#$...",
            CharCategory::Space => " ",
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.members().contains(c)
    }
}

// Password generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub length: usize,
    pub categories: BTreeSet<CharCategory>,
}

impl GenerationRequest {
    /// Duplicate categories collapse; selection order is irrelevant.
    pub fn new(length: usize, categories: impl IntoIterator<Item = CharCategory>) -> Self {
        Self {
            length,
            categories: categories.into_iter().collect(),
        }
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(
            DEFAULT_LENGTH,
            [
                CharCategory::Uppercase,
                CharCategory::Lowercase,
                CharCategory::Digits,
                CharCategory::Symbols,
            ],
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLabel {
    NoPassword,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Band for a non-empty password's score. The empty-password label is
    /// assigned separately, before any band lookup.
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => StrengthLabel::VeryStrong,
            60..=79 => StrengthLabel::Strong,
            40..=59 => StrengthLabel::Medium,
            _ => StrengthLabel::Weak,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::NoPassword => write!(f, "no password"),
            StrengthLabel::Weak => write!(f, "weak"),
            StrengthLabel::Medium => write!(f, "medium"),
            StrengthLabel::Strong => write!(f, "strong"),
            StrengthLabel::VeryStrong => write!(f, "very strong"),
        }
    }
}

/// Strength score in [0, 100] with its qualitative band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub label: StrengthLabel,
}
