//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use lexiscore_core::config::Config;

use super::LexiconArgs;
use crate::server::ScoreServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    #[command(flatten)]
    pub lexicon: LexiconArgs,
}

/// Load the lexicon, then start the MCP server and block until the client
/// disconnects. A lexicon that fails to load aborts startup.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    let lexicon = args
        .lexicon
        .load(&config)
        .context("failed to load lexicon for MCP server")?;

    info!("starting MCP server on stdio");
    let service = ScoreServer::new(lexicon, max_input_bytes)
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await.context("MCP server task failed")?;
    info!("MCP server stopped");

    Ok(())
}
