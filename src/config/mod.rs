//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. Every section is optional; a
//! missing file section falls back to defaults, and the built-in marketplaces
//! are available unless `[registry] include_builtin = false`.
//!
//! # Example
//!
//! ```no_run
//! use grossup::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging(0);
//!     let registry = config.registry()?;
//!     println!("{} marketplaces", registry.len());
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::domain::{ProfileRegistry, RegistryError};
use crate::error::{ConfigError, Result};

mod display;
mod logging;
mod marketplace;

pub use display::DisplayConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use marketplace::{MarketplaceConfig, RegistryConfig};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
    /// Extra or overriding marketplace profiles.
    #[serde(default)]
    pub marketplaces: Vec<MarketplaceConfig>,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// Checks logging and display settings, then builds the registry once so
    /// that duplicate identifiers and malformed profiles surface at load time.
    fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        if let Err(e) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::InvalidValue {
                field: "level",
                reason: e.to_string(),
            }
            .into());
        }

        if self.display.currency_symbol.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "currency_symbol",
            }
            .into());
        }
        if self.display.decimal_separator == self.display.thousands_separator {
            return Err(ConfigError::InvalidValue {
                field: "thousands_separator",
                reason: "must differ from decimal_separator".to_string(),
            }
            .into());
        }

        if !self.registry.include_builtin && self.marketplaces.is_empty() {
            return Err(ConfigError::MissingField {
                field: "marketplaces",
            }
            .into());
        }

        self.build_registry().map_err(|e| ConfigError::InvalidValue {
            field: "marketplaces",
            reason: e.to_string(),
        })?;

        Ok(())
    }

    /// Build the marketplace registry this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns an error if a declared profile is invalid or an identifier is
    /// declared twice.
    pub fn registry(&self) -> Result<ProfileRegistry> {
        let registry = self.build_registry()?;
        debug!(
            marketplaces = registry.len(),
            include_builtin = self.registry.include_builtin,
            "Built marketplace registry"
        );
        Ok(registry)
    }

    fn build_registry(&self) -> std::result::Result<ProfileRegistry, RegistryError> {
        let declared = self.marketplaces.iter().map(MarketplaceConfig::to_profile);
        if self.registry.include_builtin {
            ProfileRegistry::builtin().with_overrides(declared)
        } else {
            ProfileRegistry::from_profiles(declared)
        }
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self, verbosity: u8) {
        self.logging.init(verbosity);
    }
}
