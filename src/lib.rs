//! Facade crate for the property record verification and anchoring engine.
//!
//! Re-exports the pieces an embedder needs to run the pipeline directly —
//! [`engine::Engine`], its [`engine::Adapters`] and [`engine::EngineConfig`],
//! and the record/error types it returns — so applications can depend on a
//! single crate instead of wiring `engine`, `store`, `ledger`, and the stage
//! crates individually. The `server` feature additionally pulls in the HTTP
//! API.
//!
//! ```ignore
//! use proptrust::{DocumentFormat, DocumentType, Engine};
//!
//! # async fn demo(engine: Engine) -> Result<(), proptrust::EngineError> {
//! let cancel = tokio::sync::watch::channel(false).1;
//! let (record, detail) = engine
//!     .verify(b"...".to_vec(), DocumentType::Rtc, DocumentFormat::Image, None, None, true, &cancel)
//!     .await?;
//! println!("risk_score={} level={:?}", record.risk_score, record.risk_level);
//! # Ok(())
//! # }
//! ```

pub mod config;

pub use config::{ConfigLoadError, PropTrustConfig};
pub use engine::{
    Adapters, AnchorInfo, CancellationSignal, DocumentType, Engine, EngineConfig, EngineError,
    TamperCheck, TamperStatus, VerificationDetail, VerificationRecord,
};
pub use extraction::DocumentFormat;
pub use store::{Store, StoreConfig, StoreError};

/// Hex encoding/decoding for the fixed-size fingerprint digests
/// [`VerificationRecord::fingerprint`] and [`TamperCheck`] carry.
pub use fingerprint;

#[cfg(feature = "server")]
pub use server as http;
