//! Config commands: show, path, init
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use mobiplan_core::config::{resolve_source, PlannerConfig};
use mobiplan_core::bail_usage;
use mobiplan_core::error::Result;
use mobiplan_core::records::{escape_quotes, format_header};

/// Print the effective configuration, with built-in defaults filled in
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let workspace = ctx.load_workspace()?;
    let effective = PlannerConfig {
        nodes: workspace.graph.nodes().to_vec(),
        edges: workspace.graph.edges().to_vec(),
        modes: workspace.modes.clone(),
        ..workspace.config.clone()
    };

    match ctx.cli.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "source": workspace.source.as_ref().map(|p| p.display().to_string()),
                "config": effective,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human | OutputFormat::Records => {
            if !ctx.cli.quiet {
                match &workspace.source {
                    Some(path) => println!("# loaded from {}", path.display()),
                    None => println!("# built-in defaults"),
                }
            }
            print!("{}", toml::to_string_pretty(&effective)?);
        }
    }

    Ok(())
}

/// Print the config path that would be read
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let source = resolve_source(ctx.cli.config.as_deref())?;
    let path = source.path();
    let exists = path.exists();

    match ctx.cli.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "path": path.display().to_string(),
                "exists": exists,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => println!("{}", path.display()),
        OutputFormat::Records => {
            println!("{}", format_header("config-path", &[]));
            println!(
                "C \"{}\" exists={}",
                escape_quotes(&path.display().to_string()),
                exists
            );
        }
    }

    Ok(())
}

/// Write the built-in city and catalog to the config path
pub fn execute_init(ctx: &CommandContext, force: bool) -> Result<()> {
    let source = resolve_source(ctx.cli.config.as_deref())?;
    let path = source.path();

    if path.exists() && !force {
        bail_usage!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    PlannerConfig::builtin().save(path)?;
    tracing::debug!(path = %path.display(), "config written");

    match ctx.cli.format {
        OutputFormat::Json => {
            let json = serde_json::json!({ "path": path.display().to_string() });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Wrote {}", path.display());
            }
        }
        OutputFormat::Records => {
            println!("{}", format_header("config-init", &[]));
            println!("C \"{}\" written=true", escape_quotes(&path.display().to_string()));
        }
    }

    Ok(())
}
