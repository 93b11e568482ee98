//! Adaptive tier sequencing. A small state machine per domain: once the
//! queued tier is exhausted, tier accuracy decides whether the domain
//! advances, branches to an easier tier, or holds for clinician review.
//! Thresholds and tier contents are catalog data, never engine
//! constants, so the same machine serves every protocol.

use std::collections::BTreeSet;

use arbor_catalog::catalog::{AssessmentDefinition, Domain, Item};
use arbor_catalog::error::CatalogError;
use arbor_core::models::response::Response;

use crate::error::EngineError;
use crate::scorer;

/// The sequencer's verdict after a response batch lands in a domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TierOutcome {
    /// Unanswered items remain in the queued tier.
    InProgress,
    /// Tier accuracy reached the advance threshold. `next_tier` names
    /// the harder tier to queue, or `None` when the domain is done.
    Advance { next_tier: Option<usize> },
    /// Tier accuracy fell to the branch-down threshold and an easier
    /// unvisited tier exists; queue it.
    BranchDown { next_tier: usize },
    /// Between thresholds, or nowhere left to branch. The tier stays
    /// queued pending a manual override.
    Hold,
}

/// First unanswered item in an item set, catalog order. Answered means
/// at least one response under any rater role.
pub fn next_item<'a>(items: &[&'a Item], responses: &[Response]) -> Option<&'a Item> {
    items
        .iter()
        .find(|item| !responses.iter().any(|r| r.item_id == item.id))
        .copied()
}

/// Evaluate the queued tier of a domain after a response batch.
///
/// Accuracy is raw/max over the current tier's items only, with
/// multi-rater items contributing the mean of their reported values.
/// Past responses are never touched; branching only changes which tier
/// is queued next, and a tier is never queued twice.
pub fn evaluate_tier(
    definition: &AssessmentDefinition,
    domain: &Domain,
    current_tier: usize,
    visited: &BTreeSet<usize>,
    responses: &[Response],
) -> Result<TierOutcome, EngineError> {
    let items = definition.tier_items(domain, current_tier);
    if items.is_empty() {
        return Err(CatalogError::EmptyTier {
            domain_id: domain.id.clone(),
            tier: current_tier,
        }
        .into());
    }

    let mut raw = 0.0;
    let mut max = 0.0;
    for item in &items {
        max += item.max_value();
        let values: Vec<f64> = responses
            .iter()
            .filter(|r| r.item_id == item.id)
            .map(|r| scorer::numeric_value(item, &r.value))
            .collect::<Result<_, _>>()?;
        if values.is_empty() {
            return Ok(TierOutcome::InProgress);
        }
        raw += values.iter().sum::<f64>() / values.len() as f64;
    }

    let accuracy = if max > 0.0 { raw / max } else { 0.0 };
    let thresholds = domain.thresholds;

    if accuracy >= thresholds.advance {
        // nearest unvisited harder tier, if any remain
        let next_tier =
            ((current_tier + 1)..domain.tiers.len()).find(|t| !visited.contains(t));
        Ok(TierOutcome::Advance { next_tier })
    } else if accuracy <= thresholds.branch_down {
        match (0..current_tier).rev().find(|t| !visited.contains(t)) {
            Some(easier) => Ok(TierOutcome::BranchDown { next_tier: easier }),
            None => Ok(TierOutcome::Hold),
        }
    } else {
        Ok(TierOutcome::Hold)
    }
}
