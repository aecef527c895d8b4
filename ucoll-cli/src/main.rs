//! ucoll: sort and compare strings the way a locale expects

use clap::Parser;
use std::path::PathBuf;
use ucoll_cli::commands::Commands;
use ucoll_cli::config::CliConfig;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "ucoll", version)]
#[command(about = "Locale-sensitive string collation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// CLI settings file (TOML)
    #[arg(long, value_name = "FILE", env = "UCOLL_SETTINGS", global = true)]
    settings: Option<PathBuf>,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    ucoll_cli::init_logging(cli.verbose, cli.quiet);

    log::debug!("Arguments: {:?}", cli);
    let settings = CliConfig::load_or_default(cli.settings.as_deref())?;

    cli.command.execute(&settings, cli.quiet)
}
