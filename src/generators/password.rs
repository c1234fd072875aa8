// src/generators/password.rs
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{Arc, Mutex};

use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

use crate::models::{CharCategory, GenerationRequest, ScoreResult, StrengthLabel};

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 100;
pub const DEFAULT_LENGTH: usize = 16;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("at least one character category must be selected")]
    EmptyCategorySet,

    #[error("length must be between {MIN_LENGTH} and {MAX_LENGTH}, got {0}")]
    LengthOutOfRange(usize),

    #[error("secure random source failure: {0}")]
    RandomSource(#[from] rand::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Generates category-constrained random passwords and rates arbitrary ones.
///
/// Every random draw, including every swap index of the final shuffle, reads
/// the operating-system CSPRNG. A failed read aborts the call with
/// [`GeneratorError::RandomSource`]; there is no fallback source.
pub struct PasswordGenerator {
    // Union pools memoized per category selection. Purely an optimization:
    // a cache miss under contention recomputes the same pool.
    pool_cache: Mutex<HashMap<BTreeSet<CharCategory>, Arc<Vec<char>>>>,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self {
            pool_cache: Mutex::new(HashMap::new()),
        }
    }

    /// Generate a password of exactly `request.length` characters.
    ///
    /// Every selected category contributes at least one character. The
    /// request is validated before any randomness is consumed: an empty
    /// category set or a length outside [`MIN_LENGTH`]..=[`MAX_LENGTH`]
    /// fails with the matching error.
    pub fn generate(&self, request: &GenerationRequest) -> Result<String> {
        if request.categories.is_empty() {
            return Err(GeneratorError::EmptyCategorySet);
        }
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&request.length) {
            return Err(GeneratorError::LengthOutOfRange(request.length));
        }

        let mut rng = OsRng;
        let mut chars: Vec<char> = Vec::with_capacity(request.length);

        // One draw per selected category from its own member set, so every
        // category is guaranteed to appear in the output.
        for category in &request.categories {
            let members: Vec<char> = category.members().chars().collect();
            chars.push(members[random_index(&mut rng, members.len())?]);
        }

        // Fill the remainder from the union of all selected categories.
        let pool = self.union_pool(&request.categories);
        while chars.len() < request.length {
            chars.push(pool[random_index(&mut rng, pool.len())?]);
        }

        // The guaranteed characters sit at the front at this point, which
        // would leak the selection method. An unbiased shuffle of the whole
        // sequence removes any positional structure.
        shuffle(&mut rng, &mut chars)?;

        Ok(chars.into_iter().collect())
    }

    /// Estimate password entropy in bits, rounded to 2 decimals.
    ///
    /// The alphabet size is the sum of the member counts of the categories
    /// present in `text`, and the estimate is `len * log2(alphabet)`. This
    /// assumes independent uniform draws from that alphabet; it is a model,
    /// not a true information-theoretic measurement of an arbitrary string.
    pub fn estimate_entropy(&self, text: &str) -> f64 {
        if text.is_empty() {
            return 0.0;
        }

        let mut alphabet = 0usize;
        for category in CharCategory::ALL {
            if text.chars().any(|c| category.contains(c)) {
                alphabet += category.members().chars().count();
            }
        }
        // Non-empty text outside all five categories carries no alphabet.
        if alphabet == 0 {
            return 0.0;
        }

        let bits = text.chars().count() as f64 * (alphabet as f64).log2();
        (bits * 100.0).round() / 100.0
    }

    /// Heuristic strength score in [0, 100] with a qualitative band.
    ///
    /// `min(2 * len, 40)` points for length, plus 15 points for each of
    /// uppercase, lowercase, digits and symbols present. The space category
    /// is not scored. Pure function of the text; generated and externally
    /// supplied passwords rate identically.
    pub fn score_strength(&self, text: &str) -> ScoreResult {
        if text.is_empty() {
            return ScoreResult {
                score: 0,
                label: StrengthLabel::NoPassword,
            };
        }

        let mut score = (2 * text.chars().count()).min(40) as u8;
        for category in [
            CharCategory::Uppercase,
            CharCategory::Lowercase,
            CharCategory::Digits,
            CharCategory::Symbols,
        ] {
            if text.chars().any(|c| category.contains(c)) {
                score += 15;
            }
        }

        ScoreResult {
            score,
            label: StrengthLabel::from_score(score),
        }
    }

    // Deduplicated union of the selected categories' members, memoized per
    // selection. Holding the lock only around the map access keeps draws
    // lock-free.
    fn union_pool(&self, categories: &BTreeSet<CharCategory>) -> Arc<Vec<char>> {
        if let Some(pool) = self.pool_cache.lock().unwrap().get(categories) {
            return Arc::clone(pool);
        }

        let mut seen = HashSet::new();
        let mut pool = Vec::new();
        for category in categories {
            for c in category.members().chars() {
                if seen.insert(c) {
                    pool.push(c);
                }
            }
        }

        let pool = Arc::new(pool);
        self.pool_cache
            .lock()
            .unwrap()
            .insert(categories.clone(), Arc::clone(&pool));
        pool
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn random_u32(rng: &mut OsRng) -> Result<u32> {
    let mut buf = [0u8; 4];
    rng.try_fill_bytes(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

// Uniform index in [0, bound) via rejection sampling. Raw `v % bound` would
// favor low indices whenever bound does not divide 2^32.
fn random_index(rng: &mut OsRng, bound: usize) -> Result<usize> {
    debug_assert!(bound > 0 && bound <= u32::MAX as usize);
    let bound = bound as u32;
    let zone = ((1u64 << 32) / u64::from(bound)) * u64::from(bound);
    loop {
        let v = random_u32(rng)?;
        if u64::from(v) < zone {
            return Ok((v % bound) as usize);
        }
    }
}

// Fisher-Yates over the full sequence; every ordering is equally likely.
fn shuffle(rng: &mut OsRng, chars: &mut [char]) -> Result<()> {
    for i in (1..chars.len()).rev() {
        let j = random_index(rng, i + 1)?;
        chars.swap(i, j);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CharCategory, GenerationRequest};

    fn request(length: usize, categories: &[CharCategory]) -> GenerationRequest {
        GenerationRequest::new(length, categories.iter().copied())
    }

    #[test]
    fn generates_exact_length() {
        let generator = PasswordGenerator::new();
        for length in [MIN_LENGTH, 16, 50, MAX_LENGTH] {
            let password = generator
                .generate(&request(length, &CharCategory::ALL))
                .unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn every_selected_category_is_covered() {
        let generator = PasswordGenerator::new();
        let categories = CharCategory::ALL;
        // The shuffle is random, so check repeatedly.
        for _ in 0..50 {
            let password = generator.generate(&request(8, &categories)).unwrap();
            for category in categories {
                assert!(
                    password.chars().any(|c| category.contains(c)),
                    "{:?} missing from {:?}",
                    category,
                    password
                );
            }
        }
    }

    #[test]
    fn digits_only_at_min_length() {
        let generator = PasswordGenerator::new();
        let password = generator
            .generate(&request(MIN_LENGTH, &[CharCategory::Digits]))
            .unwrap();
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn rejects_length_below_minimum() {
        let generator = PasswordGenerator::new();
        let err = generator
            .generate(&request(MIN_LENGTH - 1, &[CharCategory::Digits]))
            .unwrap_err();
        assert!(matches!(err, GeneratorError::LengthOutOfRange(7)));
    }

    #[test]
    fn rejects_length_above_maximum() {
        let generator = PasswordGenerator::new();
        let err = generator
            .generate(&request(MAX_LENGTH + 1, &[CharCategory::Lowercase]))
            .unwrap_err();
        assert!(matches!(err, GeneratorError::LengthOutOfRange(101)));
    }

    #[test]
    fn rejects_empty_category_set() {
        let generator = PasswordGenerator::new();
        let err = generator.generate(&request(16, &[])).unwrap_err();
        assert!(matches!(err, GeneratorError::EmptyCategorySet));
    }

    #[test]
    fn output_stays_within_selected_categories() {
        let generator = PasswordGenerator::new();
        let categories = [CharCategory::Lowercase, CharCategory::Digits];
        let password = generator.generate(&request(40, &categories)).unwrap();
        assert!(password
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn repeated_requests_differ() {
        let generator = PasswordGenerator::new();
        let req = request(32, &[CharCategory::Lowercase, CharCategory::Uppercase]);
        let first = generator.generate(&req).unwrap();
        let second = generator.generate(&req).unwrap();
        // 52^32 possibilities; a collision here means broken randomness.
        assert_ne!(first, second);
    }

    #[test]
    fn union_pool_is_deduplicated_and_cached() {
        let generator = PasswordGenerator::new();
        let categories: BTreeSet<CharCategory> =
            [CharCategory::Lowercase, CharCategory::Digits].into();
        let pool = generator.union_pool(&categories);
        assert_eq!(pool.len(), 36);
        // Second lookup returns the memoized pool.
        let again = generator.union_pool(&categories);
        assert!(Arc::ptr_eq(&pool, &again));
    }

    #[test]
    fn entropy_of_empty_text_is_zero() {
        let generator = PasswordGenerator::new();
        assert_eq!(generator.estimate_entropy(""), 0.0);
    }

    #[test]
    fn entropy_uses_observed_classes_only() {
        let generator = PasswordGenerator::new();
        // Four lowercase chars: 4 * log2(26) = 18.8018 -> 18.80.
        assert_eq!(generator.estimate_entropy("aaaa"), 18.80);
        // Digits only: alphabet is 10 regardless of length.
        assert_eq!(generator.estimate_entropy("1234"), 13.29);
    }

    #[test]
    fn entropy_adds_classes_additively() {
        let generator = PasswordGenerator::new();
        // Lowercase + uppercase + digits + symbols + space = 95.
        let text = "aA1! ";
        let expected = (5.0 * 95f64.log2() * 100.0).round() / 100.0;
        assert_eq!(generator.estimate_entropy(text), expected);
    }

    #[test]
    fn entropy_of_unclassified_text_is_zero() {
        let generator = PasswordGenerator::new();
        assert_eq!(generator.estimate_entropy("äöü"), 0.0);
    }

    #[test]
    fn score_of_empty_text() {
        let generator = PasswordGenerator::new();
        let result = generator.score_strength("");
        assert_eq!(result.score, 0);
        assert_eq!(result.label, StrengthLabel::NoPassword);
    }

    #[test]
    fn score_combines_length_and_class_diversity() {
        let generator = PasswordGenerator::new();
        // 16 chars, all four scored classes: min(32, 40) + 60 = 92.
        let result = generator.score_strength("Ab1!Ab1!Ab1!Ab1!");
        assert_eq!(result.score, 92);
        assert_eq!(result.label, StrengthLabel::VeryStrong);

        // 8 digits: min(16, 40) + 15 = 31.
        let result = generator.score_strength("12345678");
        assert_eq!(result.score, 31);
        assert_eq!(result.label, StrengthLabel::Weak);
    }

    #[test]
    fn score_caps_at_one_hundred() {
        let generator = PasswordGenerator::new();
        let long = "Ab1!".repeat(25);
        let result = generator.score_strength(&long);
        assert_eq!(result.score, 100);
        assert_eq!(result.label, StrengthLabel::VeryStrong);
    }

    #[test]
    fn space_is_not_scored() {
        let generator = PasswordGenerator::new();
        let with_space = generator.score_strength("abcd efgh");
        let without = generator.score_strength("abcdefghi");
        assert_eq!(with_space.score, without.score);
    }

    #[test]
    fn rating_functions_are_pure() {
        let generator = PasswordGenerator::new();
        let text = "Tr0ub4dor&3";
        assert_eq!(
            generator.estimate_entropy(text),
            generator.estimate_entropy(text)
        );
        assert_eq!(generator.score_strength(text), generator.score_strength(text));
    }
}
