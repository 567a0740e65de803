//! Config subcommands for inspecting and initialising configuration

use clap::Subcommand;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the config file path that would be read
    Path,

    /// Write the built-in city and mode catalog to the config path
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
