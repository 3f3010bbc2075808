//! Path utilities for grossup.
//!
//! User-level files live under `~/.grossup/`:
//! - `~/.grossup/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the grossup home directory (`~/.grossup/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".grossup")
}

/// Returns the default config file path (`~/.grossup/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
