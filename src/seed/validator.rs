//! Seed Validation
//!
//! The only path from unchecked input to a [`Seed`]. Checks run in a fixed
//! order: empty, length, then characters (lowest offending position wins).

use zeroize::Zeroizing;

use super::alphabet::{self, SEED_LENGTH};
use super::types::Seed;
use super::SeedError;

/// Validate a seed typed or pasted by the user
pub fn validate(candidate: &str) -> Result<Seed, SeedError> {
    if candidate.is_empty() {
        return Err(SeedError::EmptyOrNull);
    }

    let actual = candidate.chars().count();
    if actual != SEED_LENGTH {
        return Err(SeedError::InvalidLength {
            expected: SEED_LENGTH,
            actual,
        });
    }

    if let Some(position) = candidate.chars().position(|c| !alphabet::contains_char(c)) {
        return Err(SeedError::InvalidCharacter { position });
    }

    // All symbols are ASCII here, so bytes and chars line up
    validate_bytes(candidate.as_bytes())
}

/// Validate a raw symbol buffer
pub fn validate_bytes(candidate: &[u8]) -> Result<Seed, SeedError> {
    if candidate.is_empty() {
        return Err(SeedError::EmptyOrNull);
    }

    if candidate.len() != SEED_LENGTH {
        return Err(SeedError::InvalidLength {
            expected: SEED_LENGTH,
            actual: candidate.len(),
        });
    }

    let mut symbols = Zeroizing::new([0u8; SEED_LENGTH]);
    for (position, (&symbol, slot)) in candidate.iter().zip(symbols.iter_mut()).enumerate() {
        if !alphabet::contains(symbol) {
            return Err(SeedError::InvalidCharacter { position });
        }
        *slot = symbol;
    }

    Ok(Seed::from_checked(*symbols))
}

/// Validate a seed that may be absent
pub fn validate_optional(candidate: Option<&str>) -> Result<Seed, SeedError> {
    match candidate {
        Some(value) => validate(value),
        None => Err(SeedError::EmptyOrNull),
    }
}

/// Check a candidate without keeping the resulting seed
pub fn is_valid_seed(candidate: &str) -> bool {
    validate(candidate).is_ok()
}
