//! Token engine configuration.
//!
//! The signing secret is an explicit configuration value injected at engine
//! construction, never a literal compiled into the binary. That keeps
//! secrets environment-specific and lets tests run several engines with
//! different keys side by side.
//!
//! # Example (TOML)
//!
//! ```toml
//! [token]
//! secret = "..."
//! token_lifetime = "1h"
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Minimum signing secret length in bytes.
///
/// HS256 keys shorter than the 256-bit hash output weaken the MAC, so
/// validation refuses them.
pub const MIN_SECRET_BYTES: usize = 32;

/// Token engine configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Signing secret shared by the issue and verify paths.
    ///
    /// There is no usable default; an empty secret fails validation.
    pub secret: String,

    /// Validity window of issued tokens.
    #[serde(with = "humantime_serde")]
    pub token_lifetime: Duration,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            token_lifetime: Duration::from_secs(3600), // 1 hour
        }
    }
}

impl TokenConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if no secret is configured, and
    /// `ConfigError::InvalidValue` if:
    /// - the secret is shorter than [`MIN_SECRET_BYTES`] bytes
    /// - the token lifetime is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::Missing("token.secret".to_string()));
        }

        if self.secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::InvalidValue(format!(
                "token.secret must be at least {MIN_SECRET_BYTES} bytes, got {}",
                self.secret.len()
            )));
        }

        if self.token_lifetime.is_zero() {
            return Err(ConfigError::InvalidValue(
                "token.token_lifetime must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Errors that can occur while validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An invalid configuration value was provided.
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    /// A required configuration value is missing.
    #[error("Missing required configuration: {0}")]
    Missing(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> TokenConfig {
        TokenConfig {
            secret: "a".repeat(MIN_SECRET_BYTES),
            ..TokenConfig::default()
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_default_config_has_no_secret() {
        let result = TokenConfig::default().validate();
        assert!(matches!(result.unwrap_err(), ConfigError::Missing(_)));
    }

    #[test]
    fn test_short_secret_rejected() {
        let config = TokenConfig {
            secret: "too-short".to_string(),
            ..TokenConfig::default()
        };
        let result = config.validate();
        assert!(matches!(result.unwrap_err(), ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_minimum_secret_length_accepted() {
        let config = TokenConfig {
            secret: "b".repeat(MIN_SECRET_BYTES),
            ..TokenConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_lifetime_rejected() {
        let config = TokenConfig {
            token_lifetime: Duration::ZERO,
            ..valid_config()
        };
        let result = config.validate();
        assert!(matches!(result.unwrap_err(), ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_lifetime_deserializes_from_humantime() {
        let config: TokenConfig =
            serde_json::from_str(r#"{"secret":"x","token_lifetime":"30m"}"#).unwrap();
        assert_eq!(config.token_lifetime, Duration::from_secs(1800));
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: TokenConfig = serde_json::from_str(r#"{"secret":"x"}"#).unwrap();
        assert_eq!(config.token_lifetime, Duration::from_secs(3600));
    }
}
