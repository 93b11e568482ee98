//! arbor-core
//!
//! Pure domain types for the assessment scoring engine: responses,
//! domain scores, criteria results, discrepancy flags, and session
//! summaries. This is the shared vocabulary of the Arbor system, with no
//! catalog data, no computation, no I/O.

pub mod models;
