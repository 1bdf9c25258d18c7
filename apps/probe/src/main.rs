#![allow(clippy::print_stdout)]

use anyhow::Context;
use clap::Parser;
use encontra::kernel::config::load_engine_config;
use encontra_logger::Logger;
use encontra_probe::args::{Cli, ProbeCommands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config =
        load_engine_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &config.logging)?;

    let output = match cli.command {
        ProbeCommands::Region { host } => encontra_probe::region(&config, &host),
        ProbeCommands::Plans {} => encontra_probe::plans()?,
        ProbeCommands::Venue { host, slug, at, fixtures } => {
            encontra_probe::venue(&config, &host, &slug, at.as_deref(), fixtures.as_deref())
                .await?
        },
        ProbeCommands::Lint { fixtures } => encontra_probe::lint(&fixtures)?,
    };

    println!("{output}");
    Ok(())
}
