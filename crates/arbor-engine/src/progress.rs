//! Session progress reporting. Everything here is recomputed from the
//! full response set at call time; with sessions capped at a few
//! hundred items, full recomputation is cheaper than correctness-proofs
//! for incremental updates.

use std::collections::BTreeMap;

use arbor_catalog::catalog::{AssessmentDefinition, Item};
use arbor_core::models::progress::DomainProgress;
use arbor_core::models::response::{RaterRole, Response};
use arbor_core::models::score::DomainScore;
use arbor_core::models::summary::{AssessmentSummary, DomainSummary};

use crate::error::EngineError;
use crate::{criteria, discrepancy, scorer};

/// Items belonging to the tiers a domain has actually queued. Tiers
/// never queued stay out of every progress denominator.
fn in_scope_items<'a>(
    definition: &'a AssessmentDefinition,
    progress: &DomainProgress,
) -> Vec<&'a Item> {
    let Some(domain) = definition.domain(&progress.domain_id) else {
        return Vec::new();
    };
    progress
        .visited_tiers
        .iter()
        .flat_map(|&tier| definition.tier_items(domain, tier))
        .collect()
}

/// Derive the full readiness picture for a session: completion
/// percentage, per-domain scores by rater role, criteria evaluation,
/// and outstanding discrepancy flags.
pub fn summarize(
    definition: &AssessmentDefinition,
    responses: &[Response],
    progress: &[DomainProgress],
    finalized_at: Option<jiff::Timestamp>,
) -> Result<AssessmentSummary, EngineError> {
    let mut domain_summaries = Vec::with_capacity(definition.domains.len());
    let mut answered_total = 0usize;
    let mut items_total = 0usize;
    let mut flagged = Vec::new();

    for domain in &definition.domains {
        let domain_progress = progress
            .iter()
            .find(|p| p.domain_id == domain.id)
            .ok_or_else(|| EngineError::UnknownDomain {
                domain_id: domain.id.clone(),
            })?;

        let items = in_scope_items(definition, domain_progress);
        let answered = items
            .iter()
            .filter(|item| responses.iter().any(|r| r.item_id == item.id))
            .count();
        answered_total += answered;
        items_total += items.len();

        let mut roles: Vec<RaterRole> = responses
            .iter()
            .filter(|r| items.iter().any(|i| i.id == r.item_id))
            .map(|r| r.role)
            .collect();
        roles.sort();
        roles.dedup();
        if roles.is_empty() {
            roles.push(RaterRole::Primary);
        }

        let mut scores: BTreeMap<RaterRole, DomainScore> = BTreeMap::new();
        for role in roles {
            scores.insert(
                role,
                scorer::score_items(&domain.id, domain.scoring, &items, responses, role)?,
            );
        }

        flagged.extend(discrepancy::analyze_all(&items, responses)?);

        domain_summaries.push(DomainSummary {
            domain_id: domain.id.clone(),
            label: domain.label.clone(),
            phase: domain_progress.phase,
            scores,
            answered,
            total: items.len(),
        });
    }

    let percent_complete = if items_total > 0 {
        answered_total as f64 / items_total as f64 * 100.0
    } else {
        0.0
    };

    Ok(AssessmentSummary {
        percent_complete,
        domains: domain_summaries,
        criteria: criteria::evaluate_all(definition, responses)?,
        flagged_discrepancies: flagged,
        finalized_at,
    })
}
