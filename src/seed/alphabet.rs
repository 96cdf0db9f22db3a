//! Seed Alphabet
//!
//! The tryte alphabet: `9` followed by `A`-`Z`. Each symbol is one balanced
//! ternary digit group of three trits.

/// Ordered symbol set. The index of a symbol is its draw bucket.
pub const SEED_ALPHABET: &[u8; ALPHABET_SIZE] = b"9ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols in the alphabet
pub const ALPHABET_SIZE: usize = 27;

/// Required number of symbols in a seed
pub const SEED_LENGTH: usize = 81;

/// Trits encoded by one symbol
pub const TRITS_PER_SYMBOL: usize = 3;

/// Check whether a byte is a seed symbol
#[inline]
pub fn contains(symbol: u8) -> bool {
    symbol == b'9' || symbol.is_ascii_uppercase()
}

/// Check whether a character is a seed symbol
#[inline]
pub fn contains_char(symbol: char) -> bool {
    symbol.is_ascii() && contains(symbol as u8)
}

/// Position of a symbol within [`SEED_ALPHABET`]
pub fn index_of(symbol: u8) -> Option<usize> {
    match symbol {
        b'9' => Some(0),
        b'A'..=b'Z' => Some((symbol - b'A') as usize + 1),
        _ => None,
    }
}

/// Symbol at a given alphabet index
pub fn symbol_at(index: usize) -> Option<u8> {
    SEED_ALPHABET.get(index).copied()
}

/// Balanced ternary value of a symbol: `9` = 0, `A`..`M` = 1..13, `N`..`Z` = -13..-1
pub fn tryte_value(symbol: u8) -> Option<i8> {
    let index = index_of(symbol)? as i8;
    if index > 13 {
        Some(index - ALPHABET_SIZE as i8)
    } else {
        Some(index)
    }
}

/// Expand a symbol into its three trits, least significant first
pub fn tryte_to_trits(symbol: u8) -> Option<[i8; TRITS_PER_SYMBOL]> {
    let mut value = tryte_value(symbol)?;
    let mut trits = [0i8; TRITS_PER_SYMBOL];
    for trit in trits.iter_mut() {
        let mut rem = value % 3;
        value /= 3;
        if rem > 1 {
            rem -= 3;
            value += 1;
        } else if rem < -1 {
            rem += 3;
            value -= 1;
        }
        *trit = rem;
    }
    Some(trits)
}
