//! The validated seed value.
//!
//! SECURITY: symbols are zeroized on drop, never printed by `Debug`,
//! and compared in constant time.

use std::fmt;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::alphabet::{self, SEED_LENGTH, TRITS_PER_SYMBOL};

/// Number of trits in a seed
pub const SEED_TRIT_LENGTH: usize = SEED_LENGTH * TRITS_PER_SYMBOL;

/// An accepted wallet seed: exactly [`SEED_LENGTH`] alphabet symbols.
///
/// There is no public constructor. Values come from the generator or
/// from a successful validation.
pub struct Seed {
    symbols: [u8; SEED_LENGTH],
}

impl Seed {
    /// Wrap symbols already known to satisfy the alphabet and length rules.
    pub(crate) fn from_checked(symbols: [u8; SEED_LENGTH]) -> Self {
        debug_assert!(symbols.iter().all(|&s| alphabet::contains(s)));
        Self { symbols }
    }

    /// Seed symbols as ASCII bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    /// Seed symbols as a string slice
    pub fn as_str(&self) -> &str {
        // Symbols are ASCII, so this never falls back
        std::str::from_utf8(&self.symbols).unwrap_or_default()
    }

    /// Symbol at a position, if in range
    pub fn symbol_at(&self, position: usize) -> Option<char> {
        self.symbols.get(position).map(|&s| s as char)
    }

    pub fn len(&self) -> usize {
        SEED_LENGTH
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Balanced ternary expansion used for key derivation.
    ///
    /// The returned buffer is zeroized when dropped.
    pub fn to_trits(&self) -> Zeroizing<Vec<i8>> {
        let mut trits = Zeroizing::new(Vec::with_capacity(SEED_TRIT_LENGTH));
        for &symbol in self.symbols.iter() {
            // Symbols are checked on construction, so the fallback is unreachable
            let group = alphabet::tryte_to_trits(symbol).unwrap_or_default();
            trits.extend_from_slice(&group);
        }
        trits
    }
}

impl Drop for Seed {
    fn drop(&mut self) {
        self.symbols.zeroize();
    }
}

impl ZeroizeOnDrop for Seed {}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.symbols[..].ct_eq(&other.symbols[..]).into()
    }
}

impl Eq for Seed {}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed")
            .field("symbols", &"[REDACTED]")
            .field("len", &SEED_LENGTH)
            .finish()
    }
}
