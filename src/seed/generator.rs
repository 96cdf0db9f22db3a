//! Seed Generation
//!
//! Draws seeds from a cryptographically secure source.
//!
//! SECURITY: bytes are rejection-sampled so every symbol is equally likely,
//! and scratch buffers are zeroized on drop. Only `CryptoRng` sources are
//! accepted; there is no fallback to a weaker generator.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::alphabet::{ALPHABET_SIZE, SEED_ALPHABET, SEED_LENGTH};
use super::types::Seed;
use super::SeedError;
use crate::utils::config::SeedSettings;

/// Bytes at or above this value are discarded (243 = 9 * 27)
const REJECTION_THRESHOLD: u8 = (256 - 256 % ALPHABET_SIZE) as u8;

/// Default refill limit before the source is considered unusable
pub const DEFAULT_MAX_ENTROPY_ROUNDS: u32 = 32;

/// Random seed generator over an injectable secure source
#[derive(Debug)]
pub struct SeedGenerator<R = OsRng> {
    rng: R,
    max_rounds: u32,
}

impl SeedGenerator<OsRng> {
    /// Generator backed by the operating system CSPRNG
    pub fn new() -> Self {
        Self::from_rng(OsRng)
    }

    /// OS-backed generator honouring the configured round limit
    pub fn with_settings(settings: &SeedSettings) -> Self {
        Self::from_rng(OsRng).with_max_rounds(settings.max_entropy_rounds)
    }
}

impl Default for SeedGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> SeedGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            max_rounds: DEFAULT_MAX_ENTROPY_ROUNDS,
        }
    }

    /// Limit how many times the source may be refilled per draw
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds.max(1);
        self
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Generate a fresh seed of [`SEED_LENGTH`] uniform symbols
    pub fn generate(&mut self) -> Result<Seed, SeedError> {
        let mut symbols = Zeroizing::new([0u8; SEED_LENGTH]);
        self.fill_symbols(&mut symbols[..])?;
        Ok(Seed::from_checked(*symbols))
    }

    /// Draw a single uniform symbol
    pub fn random_symbol(&mut self) -> Result<u8, SeedError> {
        let mut symbol = [0u8; 1];
        self.fill_symbols(&mut symbol)?;
        Ok(symbol[0])
    }

    fn fill_symbols(&mut self, out: &mut [u8]) -> Result<(), SeedError> {
        let mut entropy = Zeroizing::new(vec![0u8; out.len()]);
        let mut filled = 0;

        for _ in 0..self.max_rounds {
            self.rng
                .try_fill_bytes(entropy.as_mut_slice())
                .map_err(|e| SeedError::RandomSourceUnavailable(e.to_string()))?;

            for &byte in entropy.iter() {
                if byte >= REJECTION_THRESHOLD {
                    continue;
                }
                out[filled] = SEED_ALPHABET[byte as usize % ALPHABET_SIZE];
                filled += 1;
                if filled == out.len() {
                    return Ok(());
                }
            }
        }

        Err(SeedError::RandomSourceUnavailable(format!(
            "source produced no usable entropy after {} rounds",
            self.max_rounds
        )))
    }
}

/// Generate a seed from the operating system CSPRNG
pub fn generate() -> Result<Seed, SeedError> {
    SeedGenerator::new().generate()
}
