use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Where a domain sits in the adaptive state machine.
///
/// `NotStarted → InProgress → {Advanced, HeldForReview, BranchedDown,
/// BranchedUp} → Completed`. Branch states re-enter `InProgress` once a
/// response lands in the newly queued tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DomainPhase {
    NotStarted,
    InProgress,
    /// Current tier passed the advance threshold with no harder tier left.
    Advanced,
    /// Accuracy landed between the branch-down and advance thresholds,
    /// or no easier tier remains; waits for a manual override.
    HeldForReview,
    /// An easier tier was queued.
    BranchedDown,
    /// A harder tier was re-queued after recovering from a branch-down.
    BranchedUp,
    Completed,
}

/// Per-domain adaptive state owned by a session.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainProgress {
    pub domain_id: String,
    pub phase: DomainPhase,
    /// Index into the domain's tier list; the tier currently queued.
    pub current_tier: usize,
    /// Every tier that has been queued so far. Seeded with the domain's
    /// first tier; tiers never visited stay out of progress denominators.
    pub visited_tiers: BTreeSet<usize>,
    /// Set while the domain sits on a tier it branched down into.
    pub branched_down: bool,
    /// Explicitly skipped by the clinician rather than answered out.
    pub skipped: bool,
}

impl DomainProgress {
    pub fn new(domain_id: impl Into<String>, first_tier: usize) -> Self {
        Self {
            domain_id: domain_id.into(),
            phase: DomainPhase::NotStarted,
            current_tier: first_tier,
            visited_tiers: BTreeSet::from([first_tier]),
            branched_down: false,
            skipped: false,
        }
    }
}
