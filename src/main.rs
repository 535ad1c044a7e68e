//! Contatos MCP Server - Main entry point

use anyhow::Result;
use contatos_mcp_server::client::{AsyncContactStore, AsyncContactStoreImpl};
use contatos_mcp_server::repositories::{ContactRepository, StoreContactRepository};
use contatos_mcp_server::{Config, ContactStoreClient, ContatosMcpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // stderr only; stdout carries the MCP stream
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting Contatos MCP Server with API URL: {}",
        config.api_base_url
    );

    let sync_client = ContactStoreClient::new(&config);
    let client =
        Arc::new(AsyncContactStoreImpl::new(sync_client)) as Arc<dyn AsyncContactStore>;
    let contact_repo = Arc::new(StoreContactRepository::new(client)) as Arc<dyn ContactRepository>;

    let server = ContatosMcpServer::new(contact_repo);
    info!("Starting MCP server with stdio transport");
    contatos_mcp_server::server::run_server(server).await?;

    info!("Contatos MCP Server shutdown complete");
    Ok(())
}
