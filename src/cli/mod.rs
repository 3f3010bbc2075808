//! CLI module graph.

pub mod command;
pub mod config;
pub mod marketplaces;
pub mod output;
pub mod paths;
pub mod quote;

use tracing::debug;

use self::command::{Cli, Commands, ConfigCommand};
use self::config::ConfigSource;
use crate::config::{Config, LoggingConfig};
use crate::error::Result;

/// Dispatch a parsed command line.
///
/// Logging is running before any handler executes. `config init` never
/// loads configuration so a broken file can always be replaced.
pub fn run(cli: &Cli) -> Result<()> {
    let source = ConfigSource::locate(cli.config.as_deref());
    let verbosity = cli.verbose;

    match &cli.command {
        Commands::Config(ConfigCommand::Init(args)) => {
            LoggingConfig::default().init(verbosity);
            let path = args.path.as_deref().or(cli.config.as_deref());
            config::execute_init(path, args.force)
        }
        Commands::Config(ConfigCommand::Show) => {
            let config = load_with_logging(&source, verbosity)?;
            config::execute_show(&source, &config)
        }
        Commands::Config(ConfigCommand::Validate) => {
            let config = load_with_logging(&source, verbosity)?;
            config::execute_validate(&source, &config)
        }
        Commands::Quote(args) => {
            let config = load_with_logging(&source, verbosity)?;
            quote::execute(&config, &args.marketplace, &args.target)
        }
        Commands::Marketplaces => {
            let config = load_with_logging(&source, verbosity)?;
            marketplaces::execute(&config)
        }
    }
}

/// Load configuration, then start logging from its `[logging]` section.
///
/// When loading fails logging starts with defaults so the failure is still
/// logged by the caller.
fn load_with_logging(source: &ConfigSource, verbosity: u8) -> Result<Config> {
    let config = match source.load() {
        Ok(config) => config,
        Err(e) => {
            LoggingConfig::default().init(verbosity);
            return Err(e);
        }
    };

    config.init_logging(verbosity);
    debug!(
        source = %source.describe(),
        marketplaces = config.marketplaces.len(),
        include_builtin = config.registry.include_builtin,
        "Loaded configuration"
    );
    Ok(config)
}
