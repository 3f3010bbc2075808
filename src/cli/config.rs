//! Handler for the `config` command group.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::{debug, info};

use super::{output, paths};
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../config.toml.example");

/// Where configuration comes from for this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl ConfigSource {
    /// Pick the explicit path, else the default path when it exists.
    #[must_use]
    pub fn locate(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::File(path.to_path_buf());
        }
        let default = paths::default_config();
        if default.is_file() {
            Self::File(default)
        } else {
            Self::Defaults
        }
    }

    /// Load the configuration this source points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(&self) -> Result<Config> {
        match self {
            Self::File(path) => Config::load(path),
            Self::Defaults => Ok(Config::default()),
        }
    }

    /// Human-readable origin, used in output and log events.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Defaults => "(built-in defaults)".to_string(),
        }
    }
}

/// Execute `config init`.
pub fn execute_init(path: Option<&Path>, force: bool) -> Result<()> {
    let path = path.map_or_else(paths::default_config, Path::to_path_buf);
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists { path }.into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, CONFIG_TEMPLATE)?;
    info!(path = %path.display(), "Wrote configuration template");

    if output::is_json() {
        output::emit_json_line("config_init", json!({ "path": path.display().to_string() }));
        return Ok(());
    }

    output::section("Config initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next steps");
    output::note(&format!("1. Edit {} to add your marketplaces", path.display()));
    output::note(&format!(
        "2. Run: grossup config validate --config {}",
        path.display()
    ));
    output::note("3. Run: grossup quote <marketplace> <target>");
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(source: &ConfigSource, config: &Config) -> Result<()> {
    let registry = config.registry()?;
    let display = &config.display;

    if output::is_json() {
        output::emit_json_line(
            "config",
            json!({
                "source": source.describe(),
                "logging": {
                    "level": config.logging.level,
                    "format": format!("{:?}", config.logging.format).to_lowercase(),
                },
                "display": {
                    "currency_symbol": display.currency_symbol,
                    "decimal_separator": display.decimal_separator.to_string(),
                    "thousands_separator": display.thousands_separator.to_string(),
                },
                "include_builtin": config.registry.include_builtin,
                "marketplaces": registry.ids().map(|id| id.as_str()).collect::<Vec<_>>(),
            }),
        );
        return Ok(());
    }

    output::section("Effective configuration");
    output::field("Source", source.describe());

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", format!("{:?}", config.logging.format).to_lowercase());

    output::section("Display");
    output::field("Currency", &display.currency_symbol);
    output::field("Example", display.money(rust_decimal_macros::dec!(1234.5)));

    output::section("Marketplaces");
    output::field(
        "Built-ins",
        if config.registry.include_builtin {
            "included"
        } else {
            "excluded"
        },
    );
    for profile in registry.iter() {
        output::note(&format!("- {} ({})", profile.id(), profile.name()));
    }
    Ok(())
}

/// Execute `config validate`.
///
/// Reaching this point means the file already parsed and validated; the
/// registry is built once more to report its size.
pub fn execute_validate(source: &ConfigSource, config: &Config) -> Result<()> {
    debug!(source = %source.describe(), "Validating configuration");
    let registry = config.registry()?;

    if output::is_json() {
        output::emit_json_line(
            "config_valid",
            json!({
                "source": source.describe(),
                "marketplaces": registry.len(),
            }),
        );
        return Ok(());
    }

    output::success("Configuration is valid");
    output::field("Source", source.describe());
    output::field("Marketplaces", registry.len());
    Ok(())
}
