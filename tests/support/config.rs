use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write `contents` to `config.toml` inside a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn write_temp_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    (dir, path)
}

pub const CUSTOM_MARKETPLACES: &str = r#"
[display]
currency_symbol = "US$"
decimal_separator = "."
thousands_separator = ","

[registry]
include_builtin = false

[[marketplaces]]
id = "etsy"
name = "Etsy"
commission_rate = 0.065
fixed_fee = 0.20

[[marketplaces]]
id = "elo7"
name = "Elo7"
commission_rate = 0.18
commission_cap = 100
"#;
