// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use helmctl::cli::{Cli, Commands};
use helmctl::commands::{run_convert, run_doctor, run_parse};
use helmctl::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing, RUST_LOG takes precedence over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Doctor { namespace } => {
            let config = Config::from_env()?.with_namespace(namespace);
            debug!(
                "Configuration loaded: server_namespace={}",
                config.server_namespace
            );
            run_doctor(&config).await;
        }
        Commands::Parse { file } => print!("{}", run_parse(&file)?),
        Commands::Convert { file } => print!("{}", run_convert(&file)?),
    }

    Ok(())
}
