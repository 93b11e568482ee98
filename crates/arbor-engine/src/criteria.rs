//! Criteria mapping: diagnostic criteria sets evaluated against the
//! full response set. Deterministic and order-independent: the same
//! responses always produce the same result, and a criterion once met
//! stays met as responses accumulate in other domains.

use arbor_catalog::catalog::{AssessmentDefinition, CriteriaSet};
use arbor_catalog::error::CatalogError;
use arbor_core::models::criteria::{CriteriaSetResult, CriterionResult};
use arbor_core::models::response::Response;

use crate::error::EngineError;
use crate::scorer;

/// Evaluate one criteria set. A criterion referencing an unknown item
/// is a catalog bug and fails the whole evaluation with no partial result.
pub fn evaluate_set(
    definition: &AssessmentDefinition,
    set: &CriteriaSet,
    responses: &[Response],
) -> Result<CriteriaSetResult, EngineError> {
    let mut per_criterion = Vec::with_capacity(set.criteria.len());

    for criterion in &set.criteria {
        let mut met_by = Vec::new();
        for item_id in &criterion.item_ids {
            let item = definition.item(item_id).ok_or_else(|| {
                CatalogError::CriterionUnknownItem {
                    criterion_id: criterion.id.clone(),
                    item_id: item_id.clone(),
                }
            })?;

            let qualifies = responses
                .iter()
                .filter(|r| r.item_id == *item_id)
                .map(|r| scorer::is_positive(item, &r.value, criterion.threshold))
                .collect::<Result<Vec<_>, _>>()?
                .into_iter()
                .any(|p| p);
            if qualifies {
                met_by.push(item_id.clone());
            }
        }
        per_criterion.push(CriterionResult {
            criterion_id: criterion.id.clone(),
            met: !met_by.is_empty(),
            met_by,
        });
    }

    let met_count = per_criterion.iter().filter(|c| c.met).count();
    Ok(CriteriaSetResult {
        set_id: set.id.clone(),
        per_criterion,
        met_count,
        required_count: set.required_count,
        satisfied: met_count >= set.required_count,
    })
}

/// Evaluate every criteria set in the definition.
pub fn evaluate_all(
    definition: &AssessmentDefinition,
    responses: &[Response],
) -> Result<Vec<CriteriaSetResult>, EngineError> {
    definition
        .criteria_sets
        .iter()
        .map(|set| evaluate_set(definition, set, responses))
        .collect()
}
