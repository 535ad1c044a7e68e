//! MCP server implementation for the Contatos contact store.
//!
//! Exposes the contact table and the add/edit form to AI assistants through
//! the Model Context Protocol.

pub mod handlers;

pub use handlers::ContatosMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the Contatos MCP server over stdio until the client disconnects.
pub async fn run_server(server: ContatosMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
