use std::collections::BTreeSet;

use arbor_catalog::catalog::{
    AssessmentDefinition, Domain, Item, ScoringRule, Thresholds, Tier,
};
use arbor_core::models::response::{RaterRole, Response, ResponseValue};
use arbor_engine::sequencer::{self, TierOutcome};

fn respond(item_id: &str, value: f64) -> Response {
    Response {
        item_id: item_id.to_string(),
        role: RaterRole::Primary,
        value: ResponseValue::Numeric(value),
        recorded_at: jiff::Timestamp::now(),
    }
}

/// Binary-correctness tiers of the given sizes, one domain.
fn tiered_definition(tier_sizes: &[usize], start_tier: usize) -> AssessmentDefinition {
    let mut items = Vec::new();
    let mut tiers = Vec::new();
    for (t, &size) in tier_sizes.iter().enumerate() {
        let ids: Vec<String> = (0..size).map(|i| format!("t{t}_i{i}")).collect();
        for id in &ids {
            items.push(Item::binary(id, "d1", "Probe"));
        }
        tiers.push(Tier {
            level: format!("tier{t}"),
            item_ids: ids,
        });
    }
    AssessmentDefinition {
        id: "test".to_string(),
        name: "Test".to_string(),
        domains: vec![Domain {
            id: "d1".to_string(),
            label: "Domain 1".to_string(),
            scoring: ScoringRule::Sum,
            thresholds: Thresholds::default(),
            tiers,
            start_tier,
        }],
        items,
        criteria_sets: Vec::new(),
    }
}

fn answer_tier(def: &AssessmentDefinition, tier: usize, correct: usize) -> Vec<Response> {
    def.domains[0].tiers[tier]
        .item_ids
        .iter()
        .enumerate()
        .map(|(i, id)| respond(id, if i < correct { 1.0 } else { 0.0 }))
        .collect()
}

#[test]
fn unanswered_items_keep_tier_in_progress() {
    let def = tiered_definition(&[5], 0);
    let responses = answer_tier(&def, 0, 3)[..3].to_vec();

    let outcome = sequencer::evaluate_tier(
        &def,
        &def.domains[0],
        0,
        &BTreeSet::from([0]),
        &responses,
    )
    .unwrap();
    assert_eq!(outcome, TierOutcome::InProgress);
}

#[test]
fn accuracy_at_exactly_the_advance_threshold_advances() {
    // 100 probes: 80 correct is exactly 0.8
    let def = tiered_definition(&[100], 0);
    let responses = answer_tier(&def, 0, 80);

    let outcome = sequencer::evaluate_tier(
        &def,
        &def.domains[0],
        0,
        &BTreeSet::from([0]),
        &responses,
    )
    .unwrap();
    assert_eq!(outcome, TierOutcome::Advance { next_tier: None });
}

#[test]
fn accuracy_just_below_the_advance_threshold_holds() {
    let def = tiered_definition(&[100], 0);
    let responses = answer_tier(&def, 0, 79);

    let outcome = sequencer::evaluate_tier(
        &def,
        &def.domains[0],
        0,
        &BTreeSet::from([0]),
        &responses,
    )
    .unwrap();
    assert_eq!(outcome, TierOutcome::Hold);
}

#[test]
fn passing_a_tier_queues_the_next_harder_one() {
    let def = tiered_definition(&[4, 5, 4], 1);
    let responses = answer_tier(&def, 1, 5);

    let outcome = sequencer::evaluate_tier(
        &def,
        &def.domains[0],
        1,
        &BTreeSet::from([1]),
        &responses,
    )
    .unwrap();
    assert_eq!(outcome, TierOutcome::Advance { next_tier: Some(2) });
}

#[test]
fn failing_a_tier_branches_down_to_an_easier_one() {
    let def = tiered_definition(&[4, 5, 4], 1);
    let responses = answer_tier(&def, 1, 2); // 0.4, at the branch-down threshold

    let outcome = sequencer::evaluate_tier(
        &def,
        &def.domains[0],
        1,
        &BTreeSet::from([1]),
        &responses,
    )
    .unwrap();
    assert_eq!(outcome, TierOutcome::BranchDown { next_tier: 0 });
}

#[test]
fn failing_the_easiest_tier_holds_for_review() {
    let def = tiered_definition(&[4, 5], 0);
    let responses = answer_tier(&def, 0, 0);

    let outcome = sequencer::evaluate_tier(
        &def,
        &def.domains[0],
        0,
        &BTreeSet::from([0]),
        &responses,
    )
    .unwrap();
    assert_eq!(outcome, TierOutcome::Hold);
}

#[test]
fn a_visited_tier_is_never_queued_twice() {
    // Recovered from a branch-down: standard tier already visited,
    // passing the easy tier must not re-queue it downward; passing the
    // hard tier must not re-queue standard upward.
    let def = tiered_definition(&[4, 5, 4], 1);
    let visited = BTreeSet::from([0, 1, 2]);

    let pass_hard = answer_tier(&def, 2, 4);
    let outcome =
        sequencer::evaluate_tier(&def, &def.domains[0], 2, &visited, &pass_hard).unwrap();
    assert_eq!(outcome, TierOutcome::Advance { next_tier: None });

    let fail_easy = answer_tier(&def, 0, 0);
    let outcome =
        sequencer::evaluate_tier(&def, &def.domains[0], 0, &visited, &fail_easy).unwrap();
    assert_eq!(outcome, TierOutcome::Hold);
}

#[test]
fn next_item_walks_the_tier_in_catalog_order() {
    let def = tiered_definition(&[3], 0);
    let items = def.tier_items(&def.domains[0], 0);

    assert_eq!(sequencer::next_item(&items, &[]).unwrap().id, "t0_i0");

    let responses = vec![respond("t0_i0", 1.0)];
    assert_eq!(
        sequencer::next_item(&items, &responses).unwrap().id,
        "t0_i1"
    );

    let all = answer_tier(&def, 0, 3);
    assert!(sequencer::next_item(&items, &all).is_none());
}

#[test]
fn multi_rater_items_contribute_their_mean() {
    let mut def = tiered_definition(&[2], 0);
    for item in &mut def.items {
        item.rater_roles = vec![RaterRole::Parent, RaterRole::Teacher];
    }
    let mut responses = Vec::new();
    for id in ["t0_i0", "t0_i1"] {
        responses.push(Response {
            item_id: id.to_string(),
            role: RaterRole::Parent,
            value: ResponseValue::Numeric(1.0),
            recorded_at: jiff::Timestamp::now(),
        });
        responses.push(Response {
            item_id: id.to_string(),
            role: RaterRole::Teacher,
            value: ResponseValue::Numeric(1.0),
            recorded_at: jiff::Timestamp::now(),
        });
    }

    let outcome = sequencer::evaluate_tier(
        &def,
        &def.domains[0],
        0,
        &BTreeSet::from([0]),
        &responses,
    )
    .unwrap();
    assert_eq!(outcome, TierOutcome::Advance { next_tier: None });
}
