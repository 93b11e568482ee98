use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Aggregated score for one domain under one rater role.
///
/// `max` covers every item in the scored set, answered or not, so
/// `percent` reflects both accuracy and completeness. A domain with no
/// recorded responses scores `percent = 0.0`, never NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainScore {
    pub domain_id: String,
    pub raw: f64,
    pub max: f64,
    pub percent: f64,
}
