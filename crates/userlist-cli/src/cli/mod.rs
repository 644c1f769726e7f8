//! CLI for the userlist client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use userlist_core::config::{self, UserlistConfig};

use commands::{run_click, run_html, run_list};

/// Top-level CLI: fetch the users collection and show it.
#[derive(Debug, Parser)]
#[command(name = "userlist")]
#[command(about = "Fetch a collection+JSON users list and render it", long_about = None)]
pub struct Cli {
    /// Users collection URL (overrides `endpoint` in config.toml).
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run one fetch cycle and print `nickname<TAB>href` per user.
    List,

    /// Run one fetch cycle and print the list container as HTML.
    Html,

    /// Run one fetch cycle, click entry INDEX (0-based) and print its locator.
    Click {
        /// Position of the entry in the rendered list.
        index: usize,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = effective_config(config::load_or_init()?, cli.endpoint)?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::List => run_list(&cfg).await?,
            CliCommand::Html => run_html(&cfg).await?,
            CliCommand::Click { index } => run_click(&cfg, index).await?,
        }

        Ok(())
    }
}

/// Apply command-line overrides to the loaded config and validate the result.
fn effective_config(cfg: UserlistConfig, endpoint: Option<String>) -> Result<UserlistConfig> {
    let cfg = match endpoint {
        Some(endpoint) => cfg.with_endpoint(endpoint),
        None => cfg,
    };
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests;
