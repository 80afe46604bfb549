//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `VETCARE_DATA_DIR` - Directory for persisted snapshots (default:
//!   `.vetcare`)
//! - `VETCARE_CLINIC_NAME` - Display name of the clinic (default:
//!   "VetCare Veterinary Clinic")
//! - `VETCARE_EMERGENCY_PHONE` - Phone number shown on emergency
//!   confirmations (default: "+593 99 123 4567"); must parse as a valid
//!   phone number

use std::path::PathBuf;

use thiserror::Error;
use vetcare_core::{Phone, PhoneError};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, PhoneError),
}

/// Site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory the cart snapshot store lives in.
    pub data_dir: PathBuf,
    /// Display name of the clinic.
    pub clinic_name: String,
    /// Phone number for emergencies.
    pub emergency_phone: Phone,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `VETCARE_EMERGENCY_PHONE` is set to a
    /// value that does not parse as a phone number.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("VETCARE_DATA_DIR", ".vetcare"));
        let clinic_name = get_env_or_default("VETCARE_CLINIC_NAME", "VetCare Veterinary Clinic");
        let raw_phone = get_env_or_default("VETCARE_EMERGENCY_PHONE", "+593 99 123 4567");
        let emergency_phone = Phone::parse(&raw_phone)
            .map_err(|e| ConfigError::InvalidEnvVar("VETCARE_EMERGENCY_PHONE".to_string(), e))?;

        Ok(Self {
            data_dir,
            clinic_name,
            emergency_phone,
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        // The default emergency phone must always parse
        let phone = Phone::parse("+593 99 123 4567");
        assert!(phone.is_ok());
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        assert_eq!(
            get_env_or_default("VETCARE_TEST_UNSET_VARIABLE", "fallback"),
            "fallback"
        );
    }
}
