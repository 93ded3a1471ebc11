//! Binary game interpreter.
//!
//! Reads protocol commands from stdin, answers on stdout, and writes
//! diagnostics and logs to stderr.

mod cli;

use std::io;

use anyhow::{Context, Result};
use binary_game::{AppConfig, GameRng, Interpreter};
use clap::Parser;
use cli::Cli;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?
        .with_seed(cli.seed);

    // stdout carries the protocol, so logs must go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!(seed = rng.seed(), "starting interpreter");

    let mut interpreter = Interpreter::new(rng);
    interpreter
        .run(io::stdin().lock(), &mut io::stdout().lock(), &mut io::stderr())
        .context("protocol I/O failed")?;
    Ok(())
}
