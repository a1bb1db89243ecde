mod analyzers;
mod cli;
mod error;
mod output;
mod report;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    output::print_banner();

    let cli = Cli::parse();
    info!("Starting BuildLens - Build Log Insights Tool");
    cli.execute()?;

    Ok(())
}
