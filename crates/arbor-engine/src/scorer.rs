//! Domain scoring: pure aggregation of raw responses into
//! `DomainScore{raw, max, percent}` under the domain's scoring rule.

use arbor_catalog::catalog::{Domain, Item, ResponseType, ScoringRule};
use arbor_core::models::response::{RaterRole, Response, ResponseValue};
use arbor_core::models::score::DomainScore;

use crate::error::EngineError;

/// Validate a raw value against the item's declared response type.
/// Called at the write boundary so invalid values never enter a session.
pub fn validate_response(item: &Item, value: &ResponseValue) -> Result<(), EngineError> {
    numeric_value(item, value).map(|_| ())
}

/// Convert a response value to the item's numeric scale.
pub fn numeric_value(item: &Item, value: &ResponseValue) -> Result<f64, EngineError> {
    match (item.response, value) {
        (ResponseType::Likert0To4, ResponseValue::Numeric(v)) => {
            if (0.0..=4.0).contains(v) && v.fract() == 0.0 {
                Ok(*v)
            } else {
                Err(EngineError::invalid(
                    &item.id,
                    format!("likert value {v} is not a whole number in 0-4"),
                ))
            }
        }
        (ResponseType::BinaryCorrectness, ResponseValue::Numeric(v)) => {
            if *v == 0.0 || *v == 1.0 {
                Ok(*v)
            } else {
                Err(EngineError::invalid(
                    &item.id,
                    format!("correctness value {v} is not 0 or 1"),
                ))
            }
        }
        (ResponseType::Categorical, ResponseValue::Category(c)) => item
            .categories
            .iter()
            .find(|cat| cat.value == *c)
            .map(|cat| cat.weight)
            .ok_or_else(|| {
                EngineError::invalid(&item.id, format!("category '{c}' is not declared"))
            }),
        (ResponseType::Categorical, ResponseValue::Numeric(_)) => Err(EngineError::invalid(
            &item.id,
            "expected a category, got a number",
        )),
        (_, ResponseValue::Category(c)) => Err(EngineError::invalid(
            &item.id,
            format!("expected a number, got category '{c}'"),
        )),
    }
}

/// Whether a response at or above `threshold` counts as
/// criterion-positive for this item. Categorical items use their
/// explicit `positive` flag rather than the numeric threshold.
pub fn is_positive(item: &Item, value: &ResponseValue, threshold: f64) -> Result<bool, EngineError> {
    if item.response == ResponseType::Categorical {
        if let ResponseValue::Category(c) = value {
            return item
                .categories
                .iter()
                .find(|cat| cat.value == *c)
                .map(|cat| cat.positive)
                .ok_or_else(|| {
                    EngineError::invalid(&item.id, format!("category '{c}' is not declared"))
                });
        }
    }
    Ok(numeric_value(item, value)? >= threshold)
}

/// Score an arbitrary item set under a scoring rule for one rater role.
///
/// `max` always covers the full item set; `raw` covers only answered
/// items. With nothing answered the score is zeroed, never NaN.
pub fn score_items(
    domain_id: &str,
    rule: ScoringRule,
    items: &[&Item],
    responses: &[Response],
    role: RaterRole,
) -> Result<DomainScore, EngineError> {
    let mut raw_sum = 0.0;
    let mut weighted_raw = 0.0;
    let mut answered = 0usize;

    let mut max_sum = 0.0;
    let mut weighted_max = 0.0;

    for item in items {
        let item_max = item.max_value();
        max_sum += item_max;
        weighted_max += item.weight * item_max;

        let response = responses
            .iter()
            .find(|r| r.item_id == item.id && r.role == role);
        if let Some(response) = response {
            let v = numeric_value(item, &response.value)?;
            raw_sum += v;
            weighted_raw += item.weight * v;
            answered += 1;
        }
    }

    let (raw, max) = match rule {
        ScoringRule::Sum => (raw_sum, max_sum),
        ScoringRule::Weighted => (weighted_raw, weighted_max),
        ScoringRule::Mean => {
            let raw = if answered == 0 {
                0.0
            } else {
                raw_sum / answered as f64
            };
            let max = if items.is_empty() {
                0.0
            } else {
                max_sum / items.len() as f64
            };
            (raw, max)
        }
    };

    let percent = if max > 0.0 { raw / max * 100.0 } else { 0.0 };

    Ok(DomainScore {
        domain_id: domain_id.to_string(),
        raw,
        max,
        percent,
    })
}

/// Score a whole domain (all tiers) for one rater role.
pub fn score_domain(
    domain: &Domain,
    items: &[&Item],
    responses: &[Response],
    role: RaterRole,
) -> Result<DomainScore, EngineError> {
    score_items(&domain.id, domain.scoring, items, responses, role)
}
