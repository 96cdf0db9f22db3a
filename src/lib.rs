//! Seed Core Library
//!
//! Seed generation and validation for the wallet's onboarding flow.
//!
//! # Architecture
//!
//! This crate provides:
//! - **seed**: Alphabet, generator, validator and the review-time draft
//! - **error**: Serializable error codes for the shells
//! - **ffi**: C-ABI exports for the desktop and mobile shells
//! - **utils**: Configuration and redacting logging
//!
//! # FFI Usage
//!
//! All public FFI functions are in the `ffi` module and follow this pattern:
//! - Input: JSON string (null-terminated C string)
//! - Output: JSON string (must be freed with `seedcore_free_string`)
//!
//! # Security
//!
//! Seeds are generated from the operating system CSPRNG only, zeroized on
//! drop, and never written to logs.
//!
//! # Example
//!
//! ```rust,ignore
//! use seed_core::seed;
//!
//! let generated = seed::generate()?;
//! let accepted = seed::validate(generated.as_str())?;
//! assert_eq!(generated, accepted);
//! ```

pub mod error;
pub mod types;
pub mod ffi;
pub mod seed;
pub mod utils;

// Re-export key types for convenience
pub use error::{CoreError, CoreResult, ErrorCode};
pub use types::*;

// Re-export seed operations
pub use seed::{
    generate,
    is_valid_seed,
    validate,
    validate_optional,
    Seed,
    SeedDraft,
    SeedError,
    SeedGenerator,
};

// Re-export FFI functions at crate root
pub use ffi::{
    seedcore_free_string,
    seedcore_generate_seed,
    seedcore_randomize_symbol,
    seedcore_validate_seed,
};
