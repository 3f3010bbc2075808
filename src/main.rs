use clap::Parser;
use grossup::cli::command::Cli;
use grossup::cli::output::{self, OutputConfig};
use tracing::error;

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, &cli.color));

    if let Err(e) = grossup::cli::run(&cli) {
        error!(error = %e, kind = e.kind(), "Command failed");
        output::error(e.kind(), &e.to_string());
        std::process::exit(1);
    }
}
