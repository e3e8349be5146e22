#![doc = include_str!("../README.md")]

mod cli;

use std::io;

use clap::Parser;
use cli::commands::Runner;
use cli::config::{CliArgs, Config};
use cli::telemetry::init_telemetry;
use toolsmith::{SystemClock, ThreadRandom};

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = Config::try_from(args)?;

    init_telemetry()?;
    log_startup_info(&config);

    let runner = Runner::new(SystemClock, ThreadRandom);
    let stdout = io::stdout();
    runner.run(&config.command, &mut io::stdin().lock(), &mut stdout.lock())
}

fn log_startup_info(config: &Config) {
    if cfg!(debug_assertions) {
        tracing::debug!("Running with full config: {:#?}", config);
    } else {
        tracing::debug!("Running with max count {}", config.max_count);
    }
}
