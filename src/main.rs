mod app;
mod config;
mod convert;
mod error;
#[cfg(test)]
mod fakes;
mod frames;
mod http;
mod input;
mod loader;
mod model;
mod overlay;
mod render;
mod scheduler;
mod services;
mod stations;
mod telemetry;
mod tiles;
mod weather;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use crate::config::{Cli, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = Config::from_cli(&cli);

    let log_path = cli.log_file.clone().or_else(telemetry::default_log_path);
    telemetry::init_tracing(log_path.as_deref());

    app::run(Arc::new(cfg)).await
}
