//! Editable seed buffer used while the user reviews a seed.
//!
//! A draft is never a seed. Edits replace whole symbols only, and the only
//! way back to a [`Seed`] is through validation. Positions count characters,
//! the same unit [`validator::validate`] reports.

use std::fmt;

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::alphabet;
use super::generator::SeedGenerator;
use super::types::Seed;
use super::{validator, SeedError};

/// Unvalidated symbol buffer, zeroized on drop
#[derive(Default)]
pub struct SeedDraft {
    symbols: Zeroizing<Vec<char>>,
}

impl SeedDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a draft from raw user input
    pub fn from_input(input: &str) -> Self {
        Self {
            symbols: Zeroizing::new(input.chars().collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Replace the symbol at `position` with another alphabet symbol
    pub fn replace_symbol(&mut self, position: usize, symbol: char) -> Result<(), SeedError> {
        self.check_position(position)?;
        if !alphabet::contains_char(symbol) {
            return Err(SeedError::InvalidCharacter { position });
        }
        self.symbols[position] = symbol;
        Ok(())
    }

    /// Draw a new random symbol for `position`
    pub fn randomize_symbol<R: RngCore + CryptoRng>(
        &mut self,
        position: usize,
        generator: &mut SeedGenerator<R>,
    ) -> Result<(), SeedError> {
        self.check_position(position)?;
        self.symbols[position] = char::from(generator.random_symbol()?);
        Ok(())
    }

    /// Run the draft through the validator
    pub fn validate(&self) -> Result<Seed, SeedError> {
        validator::validate(&self.text())
    }

    /// Copy the draft out as text
    pub fn to_text(&self) -> String {
        self.text().as_str().to_owned()
    }

    fn text(&self) -> Zeroizing<String> {
        let mut text = Zeroizing::new(String::with_capacity(self.symbols.len() * 4));
        text.extend(self.symbols.iter());
        text
    }

    /// Wipe and empty the draft
    pub fn clear(&mut self) {
        zeroize::Zeroize::zeroize(&mut *self.symbols);
    }

    fn check_position(&self, position: usize) -> Result<(), SeedError> {
        if position >= self.symbols.len() {
            return Err(SeedError::PositionOutOfRange {
                position,
                length: self.symbols.len(),
            });
        }
        Ok(())
    }
}

impl From<Seed> for SeedDraft {
    fn from(seed: Seed) -> Self {
        Self {
            symbols: Zeroizing::new(seed.as_str().chars().collect()),
        }
    }
}

impl fmt::Debug for SeedDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedDraft")
            .field("len", &self.symbols.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::alphabet::SEED_LENGTH;
    use crate::seed::generate;

    #[test]
    fn test_edit_then_validate() {
        let seed = generate().unwrap();
        let mut draft = SeedDraft::from(seed);
        draft.replace_symbol(0, 'Z').unwrap();
        draft.replace_symbol(80, '9').unwrap();

        let edited = draft.validate().unwrap();
        assert_eq!(edited.symbol_at(0), Some('Z'));
        assert_eq!(edited.symbol_at(80), Some('9'));
    }

    #[test]
    fn test_rejects_non_symbol_edit() {
        let mut draft = SeedDraft::from_input(&"A".repeat(SEED_LENGTH));
        assert_eq!(
            draft.replace_symbol(3, 'a').unwrap_err(),
            SeedError::InvalidCharacter { position: 3 }
        );
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        let mut draft = SeedDraft::from_input("ABC");
        assert_eq!(
            draft.replace_symbol(3, 'A').unwrap_err(),
            SeedError::PositionOutOfRange { position: 3, length: 3 }
        );

        let mut generator = SeedGenerator::new();
        assert!(matches!(
            draft.randomize_symbol(10, &mut generator),
            Err(SeedError::PositionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_randomize_fixes_bad_symbol() {
        let mut input = "A".repeat(SEED_LENGTH);
        input.replace_range(9..10, "!");
        let mut draft = SeedDraft::from_input(&input);
        assert!(draft.validate().is_err());

        let mut generator = SeedGenerator::new();
        draft.randomize_symbol(9, &mut generator).unwrap();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_to_text() {
        let mut draft = SeedDraft::from_input("AB9");
        draft.replace_symbol(1, 'Z').unwrap();
        assert_eq!(draft.to_text(), "AZ9");
    }

    #[test]
    fn test_multibyte_symbol_is_one_position() {
        let mut input = "A".repeat(SEED_LENGTH - 1);
        input.insert(7, 'é');
        let mut draft = SeedDraft::from_input(&input);
        assert_eq!(draft.len(), SEED_LENGTH);
        assert_eq!(
            draft.validate().unwrap_err(),
            SeedError::InvalidCharacter { position: 7 }
        );

        let mut generator = SeedGenerator::new();
        draft.randomize_symbol(7, &mut generator).unwrap();
        let seed = draft.validate().unwrap();
        assert!(seed.as_str().chars().enumerate().all(|(i, c)| i == 7 || c == 'A'));

        let mut draft = SeedDraft::from_input(&input);
        draft.replace_symbol(7, '9').unwrap();
        assert_eq!(draft.to_text().chars().nth(7), Some('9'));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_clear() {
        let mut draft = SeedDraft::from_input(&"B".repeat(SEED_LENGTH));
        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft.validate().unwrap_err(), SeedError::EmptyOrNull);
    }

    #[test]
    fn test_debug_hides_symbols() {
        let draft = SeedDraft::from_input("SECRETSEED");
        assert!(!format!("{:?}", draft).contains("SECRET"));
    }
}
