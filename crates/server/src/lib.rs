//! PropTrust Server - HTTP REST API for document verification and anchoring
//!
//! This crate provides a production-ready HTTP server that exposes the
//! verification engine via a REST API. It supports:
//!
//! - **Document Verification**: Upload a document, run it through the full
//!   pipeline, and optionally anchor its fingerprint on the ledger
//! - **Tamper Detection**: Re-present a document against a property's last
//!   anchored fingerprint
//! - **Verification Lookup**: Fetch or cascade-delete a property's latest
//!   persisted record
//! - **Ledger & Statistics**: Connectivity status and aggregate risk counts
//! - **Health & Metrics**: Liveness/readiness probes and Prometheus-compatible metrics
//!
//! # Features
//!
//! - **Authentication**: API key-based authentication with rate limiting
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: Comprehensive error responses with error codes
//! - **Graceful Shutdown**: Proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! ## Public Endpoints (No Authentication)
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//!
//! ## Protected Endpoints (API Key Required)
//!
//! - `POST /verify/upload` - Verify an uploaded document
//! - `POST /tamper/check?property_id=...` - Check an uploaded document for tampering
//! - `GET /verification/{property_id}` - Latest verification record + detail
//! - `DELETE /verification/{property_id}` - Cascade delete a property's records
//! - `GET /ledger/status` - Ledger connectivity and latest block height
//! - `GET /statistics` - Aggregate counts and risk-bucket histogram

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
