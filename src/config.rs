//! Length bounds configuration.
//!
//! The evaluator takes its bounds explicitly on every call; there is no global
//! state. Defaults match the interactive meter's requirements (8 to 64
//! characters) and can be overridden per call or loaded from the environment.

use thiserror::Error;

/// Default minimum acceptable password length.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Default maximum acceptable password length.
pub const DEFAULT_MAX_LENGTH: usize = 64;

const MIN_LENGTH_VAR: &str = "PWD_METER_MIN_LENGTH";
const MAX_LENGTH_VAR: &str = "PWD_METER_MAX_LENGTH";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid length bounds (min {min}, max {max})")]
    InvalidBounds { min: usize, max: usize },
    #[error("invalid value for {var}: {value}")]
    InvalidEnvValue { var: &'static str, value: String },
}

/// Inclusive acceptable-length band for the length criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    min: usize,
    max: usize,
}

impl Default for LengthBounds {
    fn default() -> Self {
        LengthBounds {
            min: DEFAULT_MIN_LENGTH,
            max: DEFAULT_MAX_LENGTH,
        }
    }
}

impl LengthBounds {
    /// Creates validated bounds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBounds` if `min` is zero or exceeds `max`.
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        if min == 0 || min > max {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        Ok(LengthBounds { min, max })
    }

    /// Loads bounds from the environment.
    ///
    /// # Environment Variables
    ///
    /// Reads `PWD_METER_MIN_LENGTH` and `PWD_METER_MAX_LENGTH`. Either variable
    /// may be absent, in which case its default (8 / 64) applies.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - A variable is set but is not a positive integer
    /// - The resulting pair is not a valid band
    pub fn from_env() -> Result<Self, ConfigError> {
        let min = read_env_length(MIN_LENGTH_VAR)?.unwrap_or(DEFAULT_MIN_LENGTH);
        let max = read_env_length(MAX_LENGTH_VAR)?.unwrap_or(DEFAULT_MAX_LENGTH);
        let bounds = LengthBounds::new(min, max)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Length bounds loaded from environment: {} to {}", min, max);

        Ok(bounds)
    }

    /// Minimum acceptable length, inclusive.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Maximum acceptable length, inclusive.
    pub fn max(&self) -> usize {
        self.max
    }
}

fn read_env_length(var: &'static str) -> Result<Option<usize>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvValue { var, value }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_default_bounds() {
        let bounds = LengthBounds::default();
        assert_eq!(bounds.min(), 8);
        assert_eq!(bounds.max(), 64);
    }

    #[test]
    fn test_new_valid() {
        let bounds = LengthBounds::new(4, 10).unwrap();
        assert_eq!(bounds.min(), 4);
        assert_eq!(bounds.max(), 10);
    }

    #[test]
    fn test_new_single_length_band() {
        let bounds = LengthBounds::new(8, 8).unwrap();
        assert_eq!(bounds.min(), bounds.max());
    }

    #[test]
    fn test_new_rejects_zero_minimum() {
        assert_eq!(
            LengthBounds::new(0, 10),
            Err(ConfigError::InvalidBounds { min: 0, max: 10 })
        );
    }

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert!(matches!(
            LengthBounds::new(20, 10),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        remove_env(MIN_LENGTH_VAR);
        remove_env(MAX_LENGTH_VAR);

        assert_eq!(LengthBounds::from_env().unwrap(), LengthBounds::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        set_env(MIN_LENGTH_VAR, "12");
        set_env(MAX_LENGTH_VAR, "32");

        let bounds = LengthBounds::from_env().unwrap();
        assert_eq!(bounds.min(), 12);
        assert_eq!(bounds.max(), 32);

        remove_env(MIN_LENGTH_VAR);
        remove_env(MAX_LENGTH_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_partial_override() {
        set_env(MIN_LENGTH_VAR, "10");
        remove_env(MAX_LENGTH_VAR);

        let bounds = LengthBounds::from_env().unwrap();
        assert_eq!(bounds.min(), 10);
        assert_eq!(bounds.max(), DEFAULT_MAX_LENGTH);

        remove_env(MIN_LENGTH_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_value() {
        set_env(MIN_LENGTH_VAR, "not-a-number");

        let result = LengthBounds::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidEnvValue { .. })));

        remove_env(MIN_LENGTH_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_inverted_bounds() {
        set_env(MIN_LENGTH_VAR, "40");
        set_env(MAX_LENGTH_VAR, "20");

        let result = LengthBounds::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidBounds { .. })));

        remove_env(MIN_LENGTH_VAR);
        remove_env(MAX_LENGTH_VAR);
    }
}
