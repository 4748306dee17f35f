//! Deterministic cleaning of raw OCR text before it reaches the rest of the
//! verification pipeline.
//!
//! This crate is pure and side-effect free: no I/O, no wall-clock reads, no
//! locale dependence. The same input text and [`NormalizeConfig`] always
//! produce the same cleaned string, which is what lets the fingerprint
//! computed several stages downstream stay reproducible.
//!
//! Pipeline position: Extraction -> **Normalize** -> Translate -> Extract/Classify.

mod boilerplate;
mod confusables;
mod config;
mod error;
mod pipeline;
mod whitespace;

pub use crate::config::NormalizeConfig;
pub use crate::error::NormalizeError;
pub use crate::pipeline::normalize;
pub use crate::whitespace::collapse_whitespace;
