//! Command-line interface for fin_fac_foe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fin Fac Foe - asymmetric tic-tac-toe with a trapped Boardmaster
#[derive(Parser, Debug)]
#[command(name = "fin_fac_foe")]
#[command(about = "Hot-seat Fin Fac Foe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true, default_value = "fin_fac_foe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a hot-seat match
    Play {
        /// Challenger's name (plays X, moves first)
        #[arg(long)]
        challenger: Option<String>,

        /// Boardmaster's name (plays O, bound by the trap)
        #[arg(long)]
        boardmaster: Option<String>,

        /// Print a JSON snapshot of the match after every move
        #[arg(long)]
        json: bool,
    },

    /// Print the rules
    Rules,
}
