//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use mobiplan_core::config::PlannerConfig;
use mobiplan_core::error::{MobiplanError, Result};
use mobiplan_core::graph::Graph;
use mobiplan_core::modes::TransportMode;
use mobiplan_core::trace_time;

/// Everything a query needs: the graph, the catalog and the scoring weights
pub struct Workspace {
    pub config: PlannerConfig,
    /// File the config was read from, if any
    pub source: Option<PathBuf>,
    pub graph: Graph,
    pub modes: Vec<TransportMode>,
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Resolve configuration and build the graph and catalog from it
    pub fn load_workspace(&self) -> Result<Workspace> {
        let (config, source) = PlannerConfig::resolve(self.cli.config.as_deref())?;
        let graph = config.build_graph()?;
        let modes = config.build_modes()?;

        trace_time!(
            self.start,
            "load_workspace",
            nodes = graph.node_count(),
            modes = modes.len()
        );

        Ok(Workspace {
            config,
            source,
            graph,
            modes,
        })
    }

    /// Print a failed command's error and pick the process exit code.
    ///
    /// JSON output always gets the envelope on stderr; `--quiet` only
    /// silences the human message.
    pub fn report(&self, err: &MobiplanError) -> std::process::ExitCode {
        match self.cli.format {
            OutputFormat::Json => eprintln!("{}", err.to_json()),
            OutputFormat::Human | OutputFormat::Records if !self.cli.quiet => {
                eprintln!("error: {}", err)
            }
            OutputFormat::Human | OutputFormat::Records => {}
        }
        tracing::debug!(error_type = err.error_type(), elapsed = ?self.start.elapsed(), "command failed");
        std::process::ExitCode::from(err.exit_code() as u8)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("mobiplan {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A routing advisor for city graphs and transport modes.");
        println!();
        println!("Run `mobiplan --help` for usage information.");
        Ok(())
    }
}
