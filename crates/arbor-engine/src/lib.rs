//! arbor-engine
//!
//! The pure assessment computation: domain scoring, diagnostic criteria
//! mapping, inter-rater discrepancy analysis, adaptive tier sequencing,
//! and session progress summaries. Every function here is a synchronous
//! transformation over in-memory data with no interior state and no I/O.
//! Callers own caching and persistence.

pub mod criteria;
pub mod discrepancy;
pub mod error;
pub mod progress;
pub mod scorer;
pub mod sequencer;
