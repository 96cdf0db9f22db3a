//! Unified error types for Seed Core
//!
//! Module errors are converted into [`CoreError`] at the FFI and CLI
//! boundaries for consistent, serializable reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::seed::SeedError;

/// Main error type for all boundary operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl CoreError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            position: None,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    // Convenience constructors
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ParseError, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, msg)
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for CoreError {}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Seed errors
    EmptyOrNull,
    InvalidLength,
    InvalidCharacter,
    PositionOutOfRange,
    RandomSourceUnavailable,

    // Input errors
    InvalidInput,
    ParseError,
    JsonError,

    // Internal
    Internal,
}

/// Result type alias for boundary operations
pub type CoreResult<T> = Result<T, CoreError>;

// Conversions from common error types

impl From<SeedError> for CoreError {
    fn from(e: SeedError) -> Self {
        let code = match e {
            SeedError::RandomSourceUnavailable(_) => ErrorCode::RandomSourceUnavailable,
            SeedError::EmptyOrNull => ErrorCode::EmptyOrNull,
            SeedError::InvalidLength { .. } => ErrorCode::InvalidLength,
            SeedError::InvalidCharacter { .. } => ErrorCode::InvalidCharacter,
            SeedError::PositionOutOfRange { .. } => ErrorCode::PositionOutOfRange,
        };
        let mut err = CoreError::new(code, e.to_string());
        err.position = e.position();
        err
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::new(ErrorCode::JsonError, e.to_string())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::new(ErrorCode::Internal, e.to_string())
    }
}
