//! Shared types for Seed Core
//!
//! Request and response payloads that cross the FFI and CLI boundaries.
//!
//! SECURITY: payloads that carry seed text zeroize it on drop.

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::error::CoreError;

// =============================================================================
// Seed Payloads
// =============================================================================

/// A seed rendered as text for the calling shell
#[derive(Clone, Serialize, Deserialize)]
pub struct SeedResponse {
    pub seed: String,
}

impl Drop for SeedResponse {
    fn drop(&mut self) {
        self.seed.zeroize();
    }
}

/// Batch of seeds printed by the CLI
#[derive(Serialize, Deserialize)]
pub struct SeedBatchResponse {
    pub seeds: Vec<String>,
}

impl Drop for SeedBatchResponse {
    fn drop(&mut self) {
        self.seeds.iter_mut().for_each(|s| s.zeroize());
    }
}

/// Validation request; a missing or null seed is reported as `empty_or_null`
#[derive(Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub seed: Option<String>,
}

impl Drop for ValidateRequest {
    fn drop(&mut self) {
        if let Some(seed) = self.seed.as_mut() {
            seed.zeroize();
        }
    }
}

/// Re-draw one symbol of a seed under review
#[derive(Deserialize)]
pub struct RandomizeRequest {
    pub seed: String,
    pub position: usize,
}

impl Drop for RandomizeRequest {
    fn drop(&mut self) {
        self.seed.zeroize();
    }
}

/// Outcome of a validation, as reported by the CLI with `--json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<CoreError>,
}

impl ValidationReport {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: CoreError) -> Self {
        Self {
            valid: false,
            error: Some(error),
        }
    }
}

// =============================================================================
// API Response Wrapper
// =============================================================================

/// Standard API response wrapper for FFI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<CoreError>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: CoreError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":{"code":"internal","message":"Serialization failed"}}"#.to_string()
        })
    }
}
