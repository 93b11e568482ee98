//! arbor-catalog
//!
//! Static assessment protocol definitions. Pure data: the structure,
//! domains, tiers, items, and diagnostic criteria for each supported
//! protocol, plus the fail-fast structural validation that keeps
//! catalog defects out of live sessions.

pub mod catalog;
pub mod error;
pub mod protocols;

use catalog::AssessmentDefinition;

/// Trait implemented by each assessment protocol.
pub trait Protocol: Send + Sync {
    /// Unique identifier (e.g., "adhd", "isaa").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "ADHD Rating Scale").
    fn name(&self) -> &str;

    /// The full catalog definition for this protocol.
    fn definition(&self) -> &AssessmentDefinition;
}

/// Return all registered protocols.
pub fn all_protocols() -> Vec<Box<dyn Protocol>> {
    vec![
        Box::new(protocols::adhd::Adhd),
        Box::new(protocols::isaa::Isaa),
        Box::new(protocols::glad::Glad),
        Box::new(protocols::asd_deep_dive::AsdDeepDive),
    ]
}

/// Look up a protocol by ID.
pub fn get_protocol(id: &str) -> Option<Box<dyn Protocol>> {
    all_protocols().into_iter().find(|p| p.id() == id)
}
