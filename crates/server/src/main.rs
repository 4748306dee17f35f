//! PropTrust Server - HTTP REST API for document verification and anchoring
//!
//! This binary provides a production-ready HTTP server exposing verification
//! and tamper-check endpoints with authentication and rate limiting.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
