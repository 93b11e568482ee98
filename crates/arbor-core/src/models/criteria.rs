use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Whether one diagnostic criterion is met, and which items evidenced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CriterionResult {
    pub criterion_id: String,
    pub met: bool,
    /// Item ids whose responses crossed the criterion threshold.
    pub met_by: Vec<String>,
}

/// Evaluation of a full criteria set (e.g., a DSM-5 symptom cluster)
/// against the session's responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CriteriaSetResult {
    pub set_id: String,
    pub per_criterion: Vec<CriterionResult>,
    pub met_count: usize,
    pub required_count: usize,
    pub satisfied: bool,
}
