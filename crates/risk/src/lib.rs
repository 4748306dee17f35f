//! Pure, auditable risk scoring over extracted property-record fields.
//!
//! No I/O, no adapters, no wall-clock reads beyond what is explicitly passed
//! in through [`Clock`] — the entire crate is a deterministic function of
//! its inputs, which is what lets the six literal scenarios in the test
//! suite assert exact scores.

mod clock;
mod config;
mod factors;
mod scorer;

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::config::RiskConfig;
pub use crate::factors::RiskFactor;
pub use crate::scorer::{score, RiskAssessment, RiskInput, RiskLevel};
