use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The source of a recorded response. Items that support multi-rater
/// comparison accept more than one of these per item.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RaterRole {
    /// The rater administering the session (clinician at the desk).
    #[default]
    Primary,
    Parent,
    Teacher,
    /// Direct clinician observation, distinct from the administering rater.
    Clinician,
}

/// A raw response value as submitted by the rater.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ResponseValue {
    /// Likert ratings and binary correctness (0/1).
    Numeric(f64),
    /// Categorical observations, matched against the item's category list.
    Category(String),
}

/// One recorded response for one item under one rater role.
///
/// At most one `Response` exists per (item, role) pair; recording again
/// overwrites the earlier value.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Response {
    pub item_id: String,
    pub role: RaterRole,
    pub value: ResponseValue,
    pub recorded_at: jiff::Timestamp,
}
