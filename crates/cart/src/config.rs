//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `GO_MARKETPLACE_STORAGE_DIR` - Directory for file-backed storage (default: `.go-marketplace`)
//! - `GO_MARKETPLACE_STORAGE_KEY` - Key holding the persisted cart (default: `@GoMarketplace:products`)
//! - `GO_MARKETPLACE_CURRENCY` - Display currency code (default: `USD`)

use std::path::PathBuf;

use go_marketplace_core::CurrencyCode;
use thiserror::Error;

/// Storage key the mobile client has always used for the cart.
pub const DEFAULT_STORAGE_KEY: &str = "@GoMarketplace:products";

const DEFAULT_STORAGE_DIR: &str = ".go-marketplace";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Directory holding file-backed storage
    pub storage_dir: PathBuf,
    /// Key the cart list is persisted under
    pub storage_key: String,
    /// Currency used when formatting prices
    pub currency: CurrencyCode,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            currency: CurrencyCode::default(),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_dir = PathBuf::from(get_or_default(
            &lookup,
            "GO_MARKETPLACE_STORAGE_DIR",
            DEFAULT_STORAGE_DIR,
        ));

        let storage_key = get_or_default(&lookup, "GO_MARKETPLACE_STORAGE_KEY", DEFAULT_STORAGE_KEY);
        if storage_key.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "GO_MARKETPLACE_STORAGE_KEY".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let currency = get_or_default(&lookup, "GO_MARKETPLACE_CURRENCY", "USD")
            .parse::<CurrencyCode>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("GO_MARKETPLACE_CURRENCY".to_string(), e.to_string())
            })?;

        Ok(Self {
            storage_dir,
            storage_key,
            currency,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable with a default value.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}
