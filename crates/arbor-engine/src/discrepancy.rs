//! Inter-rater discrepancy analysis. Advisory output only: flags and
//! correlations inform clinician review, they never block scoring or
//! advancement.

use std::collections::BTreeMap;

use arbor_catalog::catalog::Item;
use arbor_core::models::discrepancy::DiscrepancyFlag;
use arbor_core::models::response::{RaterRole, Response};

use crate::error::EngineError;
use crate::scorer;

/// Compare all rater roles that reported on one item. Returns `None`
/// below two roles (insufficient data is expected mid-session, not an
/// error) or when the spread stays under the item's threshold.
pub fn analyze_item(
    item: &Item,
    responses: &[Response],
) -> Result<Option<DiscrepancyFlag>, EngineError> {
    let mut values: BTreeMap<RaterRole, f64> = BTreeMap::new();
    for response in responses.iter().filter(|r| r.item_id == item.id) {
        values.insert(response.role, scorer::numeric_value(item, &response.value)?);
    }
    if values.len() < 2 {
        return Ok(None);
    }

    let min = values.values().copied().fold(f64::INFINITY, f64::min);
    let max = values.values().copied().fold(f64::NEG_INFINITY, f64::max);
    let delta = max - min;
    if delta < item.discrepancy_threshold {
        return Ok(None);
    }

    Ok(Some(DiscrepancyFlag {
        item_id: item.id.clone(),
        domain_id: item.domain_id.clone(),
        delta,
        values,
    }))
}

/// Flags across a whole item set.
pub fn analyze_all(
    items: &[&Item],
    responses: &[Response],
) -> Result<Vec<DiscrepancyFlag>, EngineError> {
    let mut flags = Vec::new();
    for item in items {
        if let Some(flag) = analyze_item(item, responses)? {
            flags.push(flag);
        }
    }
    Ok(flags)
}

/// Pearson correlation between two rater roles across the items where
/// both responded. `None` (not 0) below two paired items, or when
/// either rater's values have zero variance; "no signal" is distinct
/// from "zero correlation".
pub fn rater_correlation(
    items: &[&Item],
    responses: &[Response],
    a: RaterRole,
    b: RaterRole,
) -> Result<Option<f64>, EngineError> {
    let mut pairs: Vec<(f64, f64)> = Vec::new();
    for item in items {
        let value_for = |role: RaterRole| {
            responses
                .iter()
                .find(|r| r.item_id == item.id && r.role == role)
                .map(|r| scorer::numeric_value(item, &r.value))
                .transpose()
        };
        if let (Some(va), Some(vb)) = (value_for(a)?, value_for(b)?) {
            pairs.push((va, vb));
        }
    }
    if pairs.len() < 2 {
        return Ok(None);
    }

    let n = pairs.len() as f64;
    let mean_a = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_b = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    let denom = (var_a * var_b).sqrt();
    if denom == 0.0 {
        return Ok(None);
    }
    Ok(Some(cov / denom))
}
