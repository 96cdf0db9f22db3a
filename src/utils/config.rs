//! Seed Core Configuration
//!
//! Runtime settings with:
//! - Environment loading (`SEEDCORE_*`)
//! - Consistency warnings
//! - A process-wide, lock-protected instance

use std::env;
use std::sync::{OnceLock, RwLock};

use crate::error::{CoreError, CoreResult};
use crate::log_warn;
use crate::seed::DEFAULT_MAX_ENTROPY_ROUNDS;

const LOG_MODULE: &str = "config";

/// Environment variable overriding the entropy refill limit
pub const ENV_MAX_ENTROPY_ROUNDS: &str = "SEEDCORE_MAX_ENTROPY_ROUNDS";

/// Environment variable enabling debug logging
pub const ENV_DEBUG: &str = "SEEDCORE_DEBUG";

/// Settings consumed by the generator and the logging surfaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSettings {
    /// How many times the generator may refill from the random source
    /// before reporting it unavailable
    pub max_entropy_rounds: u32,
    /// Emit debug-level log lines
    pub debug_logging: bool,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            max_entropy_rounds: DEFAULT_MAX_ENTROPY_ROUNDS,
            debug_logging: false,
        }
    }
}

impl SeedSettings {
    /// Defaults overridden by `SEEDCORE_*` variables
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(raw) = lookup(ENV_MAX_ENTROPY_ROUNDS) {
            settings.max_entropy_rounds = raw.trim().parse().map_err(|_| {
                CoreError::invalid_input(format!("{} must be a positive integer", ENV_MAX_ENTROPY_ROUNDS))
                    .with_details(raw.clone())
            })?;
            if settings.max_entropy_rounds == 0 {
                return Err(CoreError::invalid_input(format!(
                    "{} must be at least 1",
                    ENV_MAX_ENTROPY_ROUNDS
                )));
            }
        }

        if let Some(raw) = lookup(ENV_DEBUG) {
            settings.debug_logging = parse_flag(&raw).ok_or_else(|| {
                CoreError::invalid_input(format!("{} must be a boolean flag", ENV_DEBUG)).with_details(raw.clone())
            })?;
        }

        Ok(settings)
    }

    /// Validate settings consistency
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.max_entropy_rounds < 4 {
            warnings.push(
                "Warning: Entropy round limit is very low; healthy sources may be reported unavailable".to_string()
            );
        }

        if self.max_entropy_rounds > 1024 {
            warnings.push(
                "Warning: Entropy round limit is very high; a stuck source will take long to detect".to_string()
            );
        }

        warnings
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Lock-protected settings holder
pub struct SeedConfig {
    config: RwLock<SeedSettings>,
}

impl SeedConfig {
    pub fn new() -> Self {
        Self::with_settings(SeedSettings::default())
    }

    pub fn with_settings(settings: SeedSettings) -> Self {
        Self {
            config: RwLock::new(settings),
        }
    }

    /// Get current settings
    pub fn settings(&self) -> SeedSettings {
        self.config.read()
            .map(|c| c.clone())
            .unwrap_or_default()
    }

    /// Update settings in place, returning consistency warnings
    pub fn update<F>(&self, updater: F) -> Vec<String>
    where
        F: FnOnce(&mut SeedSettings),
    {
        let Ok(mut config) = self.config.write() else {
            return vec!["Failed to acquire config lock".to_string()];
        };
        updater(&mut config);
        config.validate()
    }

    pub fn debug_logging(&self) -> bool {
        self.config.read()
            .map(|c| c.debug_logging)
            .unwrap_or(false)
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a config from a key lookup, logging why it was rejected
pub fn load_seed_config<F>(lookup: F) -> CoreResult<SeedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let settings = SeedSettings::from_lookup(lookup).map_err(|e| {
        log_warn!(LOG_MODULE, "Rejected environment configuration", reason = e.message);
        e
    })?;
    for warning in settings.validate() {
        log_warn!(LOG_MODULE, "Configuration warning", reason = warning);
    }
    Ok(SeedConfig::with_settings(settings))
}

static SEED_CONFIG: OnceLock<CoreResult<SeedConfig>> = OnceLock::new();

/// Process-wide configuration, loaded from the environment on first use.
/// An invalid environment is reported on every call.
pub fn get_seed_config() -> CoreResult<&'static SeedConfig> {
    SEED_CONFIG
        .get_or_init(|| load_seed_config(|key| env::var(key).ok()))
        .as_ref()
        .map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = SeedSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, SeedSettings::default());
        assert_eq!(settings.max_entropy_rounds, DEFAULT_MAX_ENTROPY_ROUNDS);
        assert!(!settings.debug_logging);
        assert!(settings.validate().is_empty());
    }

    #[test]
    fn test_overrides() {
        let settings = SeedSettings::from_lookup(lookup(&[
            (ENV_MAX_ENTROPY_ROUNDS, "64"),
            (ENV_DEBUG, "true"),
        ]))
        .unwrap();
        assert_eq!(settings.max_entropy_rounds, 64);
        assert!(settings.debug_logging);
    }

    #[test]
    fn test_invalid_values() {
        assert!(SeedSettings::from_lookup(lookup(&[(ENV_MAX_ENTROPY_ROUNDS, "lots")])).is_err());
        assert!(SeedSettings::from_lookup(lookup(&[(ENV_MAX_ENTROPY_ROUNDS, "0")])).is_err());
        assert!(SeedSettings::from_lookup(lookup(&[(ENV_DEBUG, "maybe")])).is_err());
    }

    #[test]
    fn test_load_config() {
        let config = load_seed_config(lookup(&[(ENV_MAX_ENTROPY_ROUNDS, "8")])).unwrap();
        assert_eq!(config.settings().max_entropy_rounds, 8);

        let err = load_seed_config(lookup(&[(ENV_MAX_ENTROPY_ROUNDS, "lots")])).err().unwrap();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains(ENV_MAX_ENTROPY_ROUNDS));
        assert_eq!(err.details.as_deref(), Some("lots"));
    }

    #[test]
    fn test_update_settings() {
        let config = SeedConfig::new();

        let warnings = config.update(|s| {
            s.max_entropy_rounds = 2;
            s.debug_logging = true;
        });

        assert_eq!(warnings.len(), 1);
        assert_eq!(config.settings().max_entropy_rounds, 2);
        assert!(config.debug_logging());
    }
}
