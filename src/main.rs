use anyhow::Result;
use clap::Parser;

use tradu_cli::cli::Args;
use tradu_cli::cli::commands::interactive;
use tradu_cli::config::AppConfig;
use tradu_cli::output::{self, OutputConfig};
use tradu_cli::ui::Style;
use tradu_cli::{logging, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let defaults = OutputConfig::default();
    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || defaults.no_color,
    });
    logging::init(args.verbose);

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("{} {e}", Style::error("Error:"));
            std::process::exit(exitcode::CONFIG);
        }
    };

    interactive::run_interactive(config).await
}
