use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::response::RaterRole;

/// Disagreement between rater roles on a single item.
///
/// Advisory only: a flag never blocks scoring or domain advancement, it
/// is surfaced for clinician review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscrepancyFlag {
    pub item_id: String,
    pub domain_id: String,
    /// `max(values) - min(values)` across the reporting roles.
    pub delta: f64,
    pub values: BTreeMap<RaterRole, f64>,
}
