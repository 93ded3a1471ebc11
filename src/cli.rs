//! Command-line interface for the interpreter binary.

use std::path::PathBuf;

use clap::Parser;

/// Binary game engine speaking a GTP-style protocol on stdin/stdout
#[derive(Parser, Debug)]
#[command(name = "binary-game")]
#[command(about = "Play the binary placement game over a text protocol", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (ignored if missing)
    #[arg(short, long, default_value = "binary_game.toml")]
    pub config: PathBuf,

    /// Seed for genmove, overriding the config file
    #[arg(short, long)]
    pub seed: Option<u64>,
}
