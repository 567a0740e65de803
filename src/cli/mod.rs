//! CLI argument parsing for mobiplan
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod config;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use config::ConfigCommands;
pub use mobiplan_core::format::OutputFormat;
use mobiplan_core::modes::Preference;
use parse::{parse_distance, parse_format, parse_preference};

/// Mobiplan - routing advisor for a city graph and its transport modes
#[derive(Parser, Debug)]
#[command(name = "mobiplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to ~/.config/mobiplan/config.toml when present)
    #[arg(long, global = true, env = "MOBIPLAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human, json, or records
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest route between two nodes
    Route {
        /// Start node ID
        start: String,

        /// End node ID
        end: String,
    },

    /// Rank transport modes for a distance
    Rank {
        /// Trip distance
        #[arg(long, short, value_parser = parse_distance, allow_negative_numbers = true)]
        distance: f64,

        /// Ranking preference: fastest or cheapest
        #[arg(long, short, default_value = "fastest", value_parser = parse_preference)]
        preference: Preference,
    },

    /// Route between two nodes and rank transport modes for the trip
    Plan {
        /// Start node ID
        start: String,

        /// End node ID
        end: String,

        /// Ranking preference: fastest or cheapest
        #[arg(long, short, default_value = "fastest", value_parser = parse_preference)]
        preference: Preference,
    },

    /// List graph nodes and edges
    Nodes,

    /// List the transport mode catalog
    Modes,

    /// Inspect or initialise configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}
