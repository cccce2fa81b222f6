// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use feedjoin::{app, args::Args, config::Config, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::try_from(Args::parse()).context("invalid configuration")?;
    logging::init(config.verbosity);
    log::debug!("feedjoin v{} · {:?}", feedjoin::VERSION, config.task);

    app::run(&config).await?;
    Ok(())
}
