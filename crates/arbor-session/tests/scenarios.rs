use std::sync::Arc;

use arbor_catalog::catalog::{
    AssessmentDefinition, Domain, Item, ScoringRule, Thresholds, Tier,
};
use arbor_catalog::get_protocol;
use arbor_core::models::progress::DomainPhase;
use arbor_core::models::response::{RaterRole, ResponseValue};
use arbor_session::SessionState;

/// Eight likert items rated by parent and teacher, as in the ADHD
/// inter-rater sample.
fn dual_rater_definition() -> AssessmentDefinition {
    let ids: Vec<String> = (0..8).map(|i| format!("q{i}")).collect();
    let items: Vec<Item> = ids
        .iter()
        .map(|id| {
            Item::likert(id, "behavior", "Rated behavior")
                .with_roles(&[RaterRole::Parent, RaterRole::Teacher])
        })
        .collect();

    AssessmentDefinition {
        id: "dual".to_string(),
        name: "Dual-Rater Sample".to_string(),
        domains: vec![Domain {
            id: "behavior".to_string(),
            label: "Behavior".to_string(),
            scoring: ScoringRule::Sum,
            thresholds: Thresholds::default(),
            tiers: vec![Tier {
                level: "standard".to_string(),
                item_ids: ids,
            }],
            start_tier: 0,
        }],
        items,
        criteria_sets: Vec::new(),
    }
}

#[test]
fn parent_and_teacher_totals_score_independently_and_flag_divergence() {
    let mut s = SessionState::new(Arc::new(dual_rater_definition())).unwrap();

    let parent_values = [2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0]; // sums to 12
    let teacher_values = [4.0, 3.0, 4.0, 3.0, 4.0, 3.0, 4.0, 3.0]; // sums to 28
    for (i, (p, t)) in parent_values.iter().zip(teacher_values).enumerate() {
        let id = format!("q{i}");
        s.record_response(&id, RaterRole::Parent, ResponseValue::Numeric(*p))
            .unwrap();
        s.record_response(&id, RaterRole::Teacher, ResponseValue::Numeric(t))
            .unwrap();
    }

    let parent = s.domain_score("behavior", RaterRole::Parent).unwrap();
    let teacher = s.domain_score("behavior", RaterRole::Teacher).unwrap();
    assert_eq!(parent.raw, 12.0);
    assert_eq!(parent.max, 32.0);
    assert_eq!(parent.percent, 37.5);
    assert_eq!(teacher.raw, 28.0);
    assert_eq!(teacher.percent, 87.5);

    // every pair differs by exactly the default threshold of 2
    let summary = s.summary().unwrap();
    assert_eq!(summary.flagged_discrepancies.len(), 8);
    assert!(summary
        .flagged_discrepancies
        .iter()
        .all(|f| f.delta >= 2.0));
}

#[test]
fn untouched_session_reports_zero_complete_and_no_flags() {
    let protocol = get_protocol("adhd").unwrap();
    let s = SessionState::new(Arc::new(protocol.definition().clone())).unwrap();

    let summary = s.summary().unwrap();
    assert_eq!(summary.percent_complete, 0.0);
    assert!(summary.flagged_discrepancies.is_empty());
    for set in &summary.criteria {
        assert_eq!(set.met_count, 0);
        assert!(!set.satisfied);
    }
}

#[test]
fn adhd_symptom_set_satisfies_at_six_of_nine() {
    let protocol = get_protocol("adhd").unwrap();
    let mut s = SessionState::new(Arc::new(protocol.definition().clone())).unwrap();

    let inattention_items = [
        "ia_careless", "ia_sustain", "ia_listen", "ia_follow", "ia_organize", "ia_avoid",
    ];
    for (i, item) in inattention_items.iter().enumerate() {
        s.record_response(item, RaterRole::Parent, ResponseValue::Numeric(3.0))
            .unwrap();

        let summary = s.summary().unwrap();
        let set = summary
            .criteria
            .iter()
            .find(|c| c.set_id == "dsm5_inattention")
            .unwrap();
        assert_eq!(set.met_count, i + 1);
        // satisfied flips the instant the sixth symptom crosses threshold
        assert_eq!(set.satisfied, i + 1 >= 6);
    }
}

#[test]
fn glad_branches_down_then_back_up() {
    let protocol = get_protocol("glad").unwrap();
    let mut s = SessionState::new(Arc::new(protocol.definition().clone())).unwrap();

    // bomb the standard receptive-language tier: 1 of 5 correct (0.2)
    let standard = ["rl_s_two_step", "rl_s_preposition", "rl_s_picture", "rl_s_size", "rl_s_color"];
    let mut last_phase = DomainPhase::NotStarted;
    for (i, item) in standard.iter().enumerate() {
        let value = if i == 0 { 1.0 } else { 0.0 };
        let outcome = s
            .record_response(item, RaterRole::Primary, ResponseValue::Numeric(value))
            .unwrap();
        last_phase = outcome.phase;
    }
    assert_eq!(last_phase, DomainPhase::BranchedDown);
    assert_eq!(s.next_item().unwrap().as_deref(), Some("rl_e_name"));

    // ace the easy tier: recovery queues the unvisited hard tier
    let easy = ["rl_e_name", "rl_e_point", "rl_e_stop", "rl_e_body"];
    let mut outcome = None;
    for item in easy {
        outcome = Some(
            s.record_response(item, RaterRole::Primary, ResponseValue::Numeric(1.0))
                .unwrap(),
        );
    }
    let outcome = outcome.unwrap();
    assert_eq!(outcome.phase, DomainPhase::BranchedUp);
    assert_eq!(outcome.next_item.as_deref(), Some("rl_h_three_step"));

    let progress = s
        .progress()
        .iter()
        .find(|p| p.domain_id == "receptive_language")
        .unwrap();
    assert_eq!(progress.current_tier, 2);
    assert_eq!(progress.visited_tiers.len(), 3);
}

#[test]
fn glad_held_domain_clears_through_override() {
    let protocol = get_protocol("glad").unwrap();
    let mut s = SessionState::new(Arc::new(protocol.definition().clone())).unwrap();

    // middling standard-tier run: 3 of 5 (0.6) sits between thresholds
    let standard = ["rl_s_two_step", "rl_s_preposition", "rl_s_picture", "rl_s_size", "rl_s_color"];
    let mut last_phase = DomainPhase::NotStarted;
    for (i, item) in standard.iter().enumerate() {
        let value = if i < 3 { 1.0 } else { 0.0 };
        let outcome = s
            .record_response(item, RaterRole::Primary, ResponseValue::Numeric(value))
            .unwrap();
        last_phase = outcome.phase;
    }
    assert_eq!(last_phase, DomainPhase::HeldForReview);

    s.override_advance("receptive_language").unwrap();
    assert_eq!(
        s.progress()
            .iter()
            .find(|p| p.domain_id == "receptive_language")
            .unwrap()
            .phase,
        DomainPhase::Advanced
    );
}

#[test]
fn asd_observations_drive_both_criteria_sets() {
    let protocol = get_protocol("asd_deep_dive").unwrap();
    let mut s = SessionState::new(Arc::new(protocol.definition().clone())).unwrap();

    // marked observations across all three social-communication criteria
    for item in ["sc_approach", "sc_nonverbal", "sc_adjust"] {
        s.record_response(item, RaterRole::Primary, ResponseValue::Category("marked".to_string()))
            .unwrap();
    }
    // only one RRB criterion positive: set requires two
    s.record_response(
        "rrb_sameness",
        RaterRole::Primary,
        ResponseValue::Category("severe".to_string()),
    )
    .unwrap();

    let summary = s.summary().unwrap();
    let dsm5_a = summary.criteria.iter().find(|c| c.set_id == "dsm5_a").unwrap();
    let dsm5_b = summary.criteria.iter().find(|c| c.set_id == "dsm5_b").unwrap();

    assert_eq!(dsm5_a.met_count, 3);
    assert!(dsm5_a.satisfied);
    assert_eq!(dsm5_b.met_count, 1);
    assert!(!dsm5_b.satisfied);

    // a second positive RRB observation completes the B set
    s.record_response(
        "rrb_sensory",
        RaterRole::Primary,
        ResponseValue::Category("marked".to_string()),
    )
    .unwrap();
    let summary = s.summary().unwrap();
    let dsm5_b = summary.criteria.iter().find(|c| c.set_id == "dsm5_b").unwrap();
    assert!(dsm5_b.satisfied);
}
