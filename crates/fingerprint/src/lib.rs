//! Canonical projection and versioned fingerprinting of verification
//! records.
//!
//! `fingerprint_of` is the function whose output gets anchored to the
//! ledger; `comparison_fingerprint_of` is a secondary digest that excludes
//! the risk score, used by the tamper checker to separate a genuine content
//! change from a score recomputed under a revised weight table.

mod error;
mod hash;
mod projection;

pub use crate::error::FingerprintError;
pub use crate::hash::{comparison_fingerprint_of, fingerprint_of, to_hex};
pub use crate::projection::{CanonicalLoan, CanonicalProjection};
