//! Relational persistence layer.
//!
//! [`Store`] wraps a Postgres connection pool and holds every table the rest
//! of the workspace needs: properties, verification records and details,
//! tamper checks, audit logs, and (via its [`ledger::LedgerEntryStore`]
//! implementation) the local ledger's entries. Keeping the ledger in the same
//! pool avoids running a second embedded store alongside the relational one.

mod config;
mod error;
mod input;
mod ledger_store;
mod models;
mod store;

pub use crate::config::StoreConfig;
pub use crate::error::StoreError;
pub use crate::input::{NewTamperCheck, NewVerificationDetail, NewVerificationRecord};
pub use crate::models::{
    AuditLogRow, LedgerStatus, PropertyRow, Statistics, TamperCheckRow, VerificationDetailRow,
    VerificationRecordRow,
};
pub use crate::store::Store;
