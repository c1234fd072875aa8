// src/lib.rs
//! Secure password generation with entropy estimation and strength scoring.
//!
//! The [`PasswordGenerator`] exposes three operations: category-constrained
//! generation from the OS CSPRNG, an assumed-alphabet entropy estimate, and a
//! heuristic 0-100 strength score. Everything else in this crate is a thin
//! CLI consumer around that core.

pub mod cli;
pub mod generators;
pub mod models;

pub use generators::password::{GeneratorError, DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};
pub use generators::PasswordGenerator;
pub use models::{CharCategory, GenerationRequest, ScoreResult, StrengthLabel};
