//! Hybrid rule-first, model-second extraction of a fixed field schema from
//! cleaned property-record text.
//!
//! The rule layer (`rules`) is a set of named, ordered, lazily-compiled
//! regex patterns. A rule match always wins over the model for singleton
//! fields; list fields union both sources, de-duplicated and ordered by
//! first appearance. An unmatched field is absent, never invented.

mod config;
mod error;
mod extractor;
mod model;
mod rules;
mod schema;

pub use crate::config::ExtractConfig;
pub use crate::error::ExtractError;
pub use crate::extractor::extract_entities;
pub use crate::model::{Candidate, EntityModel, NullEntityModel, SingletonField};
pub use crate::schema::{EntityBundle, Loan, Mutation};
