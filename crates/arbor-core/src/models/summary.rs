use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::criteria::CriteriaSetResult;
use crate::models::discrepancy::DiscrepancyFlag;
use crate::models::progress::DomainPhase;
use crate::models::response::RaterRole;
use crate::models::score::DomainScore;

/// Per-domain slice of an assessment summary.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainSummary {
    pub domain_id: String,
    pub label: String,
    pub phase: DomainPhase,
    /// One score per rater role that has responded in this domain; holds
    /// a zeroed primary score while the domain is untouched.
    pub scores: BTreeMap<RaterRole, DomainScore>,
    /// Distinct in-scope items with at least one response, any role.
    pub answered: usize,
    /// In-scope items: the union of tiers actually queued.
    pub total: usize,
}

/// The full readiness/interpretation picture for a session, recomputed
/// from the complete response set at call time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSummary {
    /// 0–100, answered over total across all in-scope domains.
    pub percent_complete: f64,
    pub domains: Vec<DomainSummary>,
    pub criteria: Vec<CriteriaSetResult>,
    pub flagged_discrepancies: Vec<DiscrepancyFlag>,
    /// Set once the session is finalized; the summary is retained
    /// verbatim from that point on.
    pub finalized_at: Option<jiff::Timestamp>,
}
