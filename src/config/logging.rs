//! Logging configuration and initialization.

use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

/// Output format of log events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".into()
}

impl LoggingConfig {
    /// Level directive after applying `-v` flags.
    ///
    /// `-v` raises the level to `debug`, `-vv` and above to `trace`. Flags
    /// never lower a configured level that is already at least as verbose.
    #[must_use]
    pub fn effective_level(&self, verbosity: u8) -> &str {
        let (requested, directive) = match verbosity {
            0 => return &self.level,
            1 => (LevelFilter::DEBUG, "debug"),
            _ => (LevelFilter::TRACE, "trace"),
        };
        match self.most_verbose_configured() {
            Some(configured) if configured >= requested => &self.level,
            _ => directive,
        }
    }

    /// Most verbose level named in the configured directives, if any.
    fn most_verbose_configured(&self) -> Option<LevelFilter> {
        self.level
            .split(',')
            .filter_map(|directive| directive.rsplit('=').next())
            .filter_map(|level| level.trim().parse::<LevelFilter>().ok())
            .max()
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Events are
    /// written to stderr. Calling this more than once keeps the first
    /// subscriber.
    pub fn init(&self, verbosity: u8) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.effective_level(verbosity)));

        let _ = match self.format {
            LogFormat::Json => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            LogFormat::Pretty => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_configured_level() {
        let config = LoggingConfig {
            level: "warn".into(),
            format: LogFormat::Json,
        };

        assert_eq!(config.effective_level(0), "warn");
        assert_eq!(config.effective_level(1), "debug");
        assert_eq!(config.effective_level(3), "trace");
    }

    #[test]
    fn verbosity_never_lowers_configured_level() {
        let config = LoggingConfig {
            level: "trace".into(),
            format: LogFormat::Pretty,
        };
        assert_eq!(config.effective_level(1), "trace");
        assert_eq!(config.effective_level(2), "trace");

        let scoped = LoggingConfig {
            level: "warn,grossup=debug".into(),
            format: LogFormat::Pretty,
        };
        assert_eq!(scoped.effective_level(1), "warn,grossup=debug");
        assert_eq!(scoped.effective_level(2), "trace");
    }

    #[test]
    fn defaults_to_pretty_info() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
    }
}
