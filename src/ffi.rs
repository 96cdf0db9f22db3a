//! FFI Layer for Seed Core
//!
//! All C-ABI exports are defined here. This is the ONLY file that should
//! contain `extern "C"` functions. All functions follow a consistent pattern:
//! - Input: JSON string (null-terminated C string)
//! - Output: JSON string (must be freed with `seedcore_free_string`)
//!
//! Error handling: All functions return JSON with `success` field.
//! On error, `success: false` and `error` object is populated.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use crate::error::CoreError;
use crate::seed::{self, SeedDraft, SeedGenerator};
use crate::types::*;
use crate::utils::config::{get_seed_config, SeedSettings};
use crate::utils::logging;
use crate::{log_debug, log_info, log_warn};

const LOG_MODULE: &str = "ffi";

// =============================================================================
// Memory Management
// =============================================================================

/// Free a string returned by any seedcore_* function
///
/// # Safety
/// The pointer must have been returned by a seedcore_* function
#[unsafe(no_mangle)]
pub extern "C" fn seedcore_free_string(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    unsafe {
        let _ = CString::from_raw(s);
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Convert C string to Rust string, returning error JSON if invalid
fn parse_input<'a>(input: *const c_char) -> Result<&'a str, *mut c_char> {
    if input.is_null() {
        return Err(error_response(CoreError::invalid_input("Null input pointer")));
    }

    let c_str = unsafe { CStr::from_ptr(input) };
    c_str
        .to_str()
        .map_err(|_| error_response(CoreError::invalid_input("Invalid UTF-8 string")))
}

/// Parse a JSON request body
fn parse_request<T: serde::de::DeserializeOwned>(input: *const c_char) -> Result<T, *mut c_char> {
    let json_str = parse_input(input)?;
    serde_json::from_str(json_str)
        .map_err(|e| error_response(CoreError::parse_error(format!("Invalid JSON: {}", e))))
}

/// Current settings, with logging brought in line.
/// An invalid `SEEDCORE_*` environment becomes an error response.
fn current_settings() -> Result<SeedSettings, *mut c_char> {
    let settings = get_seed_config().map_err(error_response)?.settings();
    logging::init_from_settings(&settings);
    Ok(settings)
}

/// Create a success response JSON string
fn success_response<T: serde::Serialize>(data: T) -> *mut c_char {
    let response = ApiResponse::ok(data);
    string_to_ptr(response.to_json())
}

/// Create an error response JSON string
fn error_response(error: CoreError) -> *mut c_char {
    let response: ApiResponse<()> = ApiResponse::err(error);
    string_to_ptr(response.to_json())
}

/// Convert Rust string to C string pointer
fn string_to_ptr(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c_str) => c_str.into_raw(),
        Err(_) => {
            // Last resort: return a minimal error
            CString::new(r#"{"success":false,"error":{"code":"internal","message":"String conversion failed"}}"#)
                .map(CString::into_raw)
                .unwrap_or(std::ptr::null_mut())
        }
    }
}

// =============================================================================
// Seed Operations
// =============================================================================

/// Generate a new random seed
///
/// # Input
/// None
///
/// # Output
/// ```json
/// { "success": true, "data": { "seed": "ABC...9XZ" } }
/// ```
#[unsafe(no_mangle)]
pub extern "C" fn seedcore_generate_seed() -> *mut c_char {
    let settings = match current_settings() {
        Ok(s) => s,
        Err(ptr) => return ptr,
    };
    let mut generator = SeedGenerator::with_settings(&settings);

    match generator.generate() {
        Ok(seed) => {
            log_debug!(LOG_MODULE, "Seed generated", max_rounds = settings.max_entropy_rounds);
            success_response(SeedResponse { seed: seed.as_str().to_string() })
        }
        Err(e) => {
            log_warn!(LOG_MODULE, "Seed generation failed", reason = e);
            error_response(e.into())
        }
    }
}

/// Validate a seed entered or edited by the user
///
/// # Input
/// ```json
/// { "seed": "ABC...9XZ" }
/// ```
/// A missing or `null` seed is reported as `empty_or_null`.
///
/// # Output
/// ```json
/// { "success": true, "data": { "valid": true } }
/// { "success": false, "error": { "code": "invalid_character", "message": "...", "position": 5 } }
/// ```
#[unsafe(no_mangle)]
pub extern "C" fn seedcore_validate_seed(input: *const c_char) -> *mut c_char {
    if let Err(ptr) = current_settings() {
        return ptr;
    }
    let request: ValidateRequest = match parse_request(input) {
        Ok(r) => r,
        Err(ptr) => return ptr,
    };

    match seed::validate_optional(request.seed.as_deref()) {
        Ok(_seed) => {
            log_debug!(LOG_MODULE, "Seed accepted");
            success_response(ValidationReport::valid())
        }
        Err(e) => {
            let err = CoreError::from(e);
            log_info!(LOG_MODULE, "Seed rejected", reason = err.message);
            error_response(err)
        }
    }
}

/// Re-draw the symbol at one position of a seed under review
///
/// # Input
/// ```json
/// { "seed": "ABC...9XZ", "position": 4 }
/// ```
///
/// # Output
/// ```json
/// { "success": true, "data": { "seed": "ABCD?...9XZ" } }
/// ```
#[unsafe(no_mangle)]
pub extern "C" fn seedcore_randomize_symbol(input: *const c_char) -> *mut c_char {
    let settings = match current_settings() {
        Ok(s) => s,
        Err(ptr) => return ptr,
    };
    let request: RandomizeRequest = match parse_request(input) {
        Ok(r) => r,
        Err(ptr) => return ptr,
    };

    let mut draft = SeedDraft::from_input(&request.seed);
    let mut generator = SeedGenerator::with_settings(&settings);

    match draft.randomize_symbol(request.position, &mut generator) {
        Ok(()) => {
            log_debug!(LOG_MODULE, "Symbol randomized", position = request.position);
            success_response(SeedResponse { seed: draft.to_text() })
        }
        Err(e) => error_response(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn take_string(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null());
        let output = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
        seedcore_free_string(ptr);
        output
    }

    #[test]
    fn test_null_input() {
        let json = take_string(seedcore_validate_seed(std::ptr::null()));
        let response: ApiResponse<ValidationReport> = serde_json::from_str(&json).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.unwrap().code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_bad_json() {
        let input = CString::new("{not json").unwrap();
        let json = take_string(seedcore_validate_seed(input.as_ptr()));
        let response: ApiResponse<ValidationReport> = serde_json::from_str(&json).unwrap();
        assert_eq!(response.error.unwrap().code, ErrorCode::ParseError);
    }

    #[test]
    fn test_free_null_is_noop() {
        seedcore_free_string(std::ptr::null_mut());
    }
}
