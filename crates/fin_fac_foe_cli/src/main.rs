//! Fin Fac Foe - terminal adapter
//!
//! Hot-seat play on one terminal: the Challenger's public board and the
//! Boardmaster's private board are printed after every move.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod play;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::MatchConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Rules => {
            print!("{}", render::RULES);
            Ok(())
        }
        Command::Play {
            challenger,
            boardmaster,
            json,
        } => {
            let config = MatchConfig::load_or_default(&cli.config)?
                .with_env(|key| std::env::var(key).ok())
                .with_players(challenger, boardmaster);
            config.validate()?;

            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
                )
                .with_writer(std::io::stderr)
                .init();

            info!(challenger = %config.challenger(), boardmaster = %config.boardmaster(), "Starting hot-seat match");

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            match play::run(&config, json, stdin.lock(), stdout.lock())? {
                Some(outcome) => info!(%outcome, "Match finished"),
                None => info!("Match ended without an outcome"),
            }
            Ok(())
        }
    }
}
