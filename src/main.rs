// src/main.rs

use anyhow::Result;
use blankstrip::cli::Cli;
use blankstrip::config::ConfigBuilder;
use blankstrip::progress::ConsoleProgress;
use blankstrip::run;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    let directives = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "blankstrip=debug".to_string()
        } else {
            "blankstrip=info".to_string()
        }
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .parse_lossy(directives),
        )
        .init();

    log::debug!("Starting blankstrip v{}...", env!("CARGO_PKG_VERSION"));

    // Usage errors exit here via clap with status 2.
    let cli = Cli::parse();

    let config = ConfigBuilder::from_cli(cli).build()?;
    log::debug!("Configuration built successfully.");

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    run(&config, &ConsoleProgress, &mut writer)?;

    Ok(())
}
