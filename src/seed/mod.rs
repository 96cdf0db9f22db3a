//! Seed Module
//!
//! Generation, validation and review-time editing of wallet seeds.
//!
//! A seed is 81 symbols from `9ABCDEFGHIJKLMNOPQRSTUVWXYZ`. The validator is
//! the single authority on what counts as a seed: [`Seed`] has no public
//! constructor, so holding one proves it passed the checks.
//!
//! # Usage
//! ```rust,ignore
//! use seed_core::seed::{self, SeedDraft, SeedGenerator};
//!
//! let mut generator = SeedGenerator::new();
//! let mut draft = SeedDraft::from(generator.generate()?);
//! draft.randomize_symbol(4, &mut generator)?;
//! let accepted = draft.validate()?;
//! ```
//!
//! Nothing in this module logs or retries.

pub mod alphabet;
mod draft;
mod generator;
mod types;
mod validator;

pub use alphabet::{contains, ALPHABET_SIZE, SEED_ALPHABET, SEED_LENGTH};
pub use draft::SeedDraft;
pub use generator::{generate, SeedGenerator, DEFAULT_MAX_ENTROPY_ROUNDS};
pub use types::{Seed, SEED_TRIT_LENGTH};
pub use validator::{is_valid_seed, validate, validate_bytes, validate_optional};

use thiserror::Error;

/// Seed module errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("Secure random source unavailable: {0}")]
    RandomSourceUnavailable(String),

    #[error("Seed is empty")]
    EmptyOrNull,

    #[error("Seed must be {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid seed character at position {position}")]
    InvalidCharacter { position: usize },

    #[error("Position {position} is outside a seed of length {length}")]
    PositionOutOfRange { position: usize, length: usize },
}

impl SeedError {
    /// Offending position, for errors tied to one
    pub fn position(&self) -> Option<usize> {
        match self {
            SeedError::InvalidCharacter { position }
            | SeedError::PositionOutOfRange { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// User-input faults the caller can fix by re-entering or regenerating
    pub fn is_user_error(&self) -> bool {
        !matches!(self, SeedError::RandomSourceUnavailable(_))
    }
}
