use anyhow::Result;
use precommit_mcp::common::precommit_server::PreCommitServer;
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use tracing_subscriber::{self, EnvFilter};

/// Pre-commit MCP Server - runs pre-commit hooks and reports structured results
/// Run with: cargo run --features transport-io
/// Test with: npx @modelcontextprotocol/inspector cargo run --features transport-io
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the tracing subscriber with stderr logging; stdout carries
    // the MCP transport.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting pre-commit MCP server");

    #[cfg(feature = "transport-io")]
    let service = PreCommitServer::new().serve(stdio()).await.inspect_err(|e| {
        tracing::error!("serving error: {:?}", e);
    })?;

    #[cfg(not(feature = "transport-io"))]
    compile_error!("`transport-io` feature is required for this server to run.");

    tracing::info!("Pre-commit MCP server is ready and waiting for connections");

    #[cfg(feature = "transport-io")]
    service.waiting().await?;
    Ok(())
}
