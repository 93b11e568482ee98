use std::sync::LazyLock;

use crate::catalog::{
    AssessmentDefinition, Category, CriteriaSet, Criterion, Domain, Item, ScoringRule, Thresholds,
    Tier,
};
use crate::Protocol;

/// ASD deep-dive observation. Categorical clinician observations mapped
/// onto the DSM-5 structure: social communication (all three criteria
/// required) and restricted/repetitive behaviors (two of four).
pub struct AsdDeepDive;

impl Protocol for AsdDeepDive {
    fn id(&self) -> &str {
        "asd_deep_dive"
    }

    fn name(&self) -> &str {
        "ASD Deep-Dive Observation"
    }

    fn definition(&self) -> &AssessmentDefinition {
        static DEF: LazyLock<AssessmentDefinition> = LazyLock::new(build);
        &DEF
    }
}

/// Observation severity categories. "marked" and "severe" are the
/// criterion-positive tiers.
fn observation_categories() -> Vec<Category> {
    vec![
        Category {
            value: "typical".to_string(),
            weight: 0.0,
            positive: false,
        },
        Category {
            value: "mild".to_string(),
            weight: 1.0,
            positive: false,
        },
        Category {
            value: "marked".to_string(),
            weight: 3.0,
            positive: true,
        },
        Category {
            value: "severe".to_string(),
            weight: 4.0,
            positive: true,
        },
    ]
}

const SOCIAL: [(&str, &str); 6] = [
    ("sc_approach", "Abnormal social approach and failed back-and-forth conversation"),
    ("sc_affect", "Reduced sharing of interests, emotions, or affect"),
    ("sc_nonverbal", "Poorly integrated verbal and nonverbal communication"),
    ("sc_eye_gesture", "Abnormal eye contact and body language"),
    ("sc_adjust", "Difficulty adjusting behavior to social context"),
    ("sc_peers", "Absence of interest in peers"),
]; // two observations per DSM-5 A criterion

const RRB: [(&str, &str); 4] = [
    ("rrb_stereotyped", "Stereotyped or repetitive motor movements, object use, or speech"),
    ("rrb_sameness", "Insistence on sameness and inflexible routines"),
    ("rrb_fixated", "Highly restricted, fixated interests of abnormal intensity"),
    ("rrb_sensory", "Hyper- or hypo-reactivity to sensory input"),
];

fn build() -> AssessmentDefinition {
    let mut items = Vec::new();
    for (id, label) in SOCIAL {
        items.push(Item::categorical(id, "social_communication", label, observation_categories()));
    }
    for (id, label) in RRB {
        items.push(Item::categorical(id, "rrb", label, observation_categories()));
    }

    let domain = |id: &str, label: &str, item_ids: Vec<String>| Domain {
        id: id.to_string(),
        label: label.to_string(),
        scoring: ScoringRule::Mean,
        thresholds: Thresholds::default(),
        tiers: vec![Tier {
            level: "standard".to_string(),
            item_ids,
        }],
        start_tier: 0,
    };

    AssessmentDefinition {
        id: "asd_deep_dive".to_string(),
        name: "ASD Deep-Dive Observation".to_string(),
        domains: vec![
            domain(
                "social_communication",
                "Social Communication and Interaction",
                SOCIAL.iter().map(|(i, _)| i.to_string()).collect(),
            ),
            domain(
                "rrb",
                "Restricted, Repetitive Behaviors",
                RRB.iter().map(|(i, _)| i.to_string()).collect(),
            ),
        ],
        items,
        criteria_sets: vec![
            CriteriaSet {
                id: "dsm5_a".to_string(),
                label: "DSM-5 A: Social Communication Deficits".to_string(),
                criteria: vec![
                    Criterion::new(
                        "a1_reciprocity",
                        "Deficits in social-emotional reciprocity",
                        &["sc_approach", "sc_affect"],
                    ),
                    Criterion::new(
                        "a2_nonverbal",
                        "Deficits in nonverbal communicative behaviors",
                        &["sc_nonverbal", "sc_eye_gesture"],
                    ),
                    Criterion::new(
                        "a3_relationships",
                        "Deficits in developing and maintaining relationships",
                        &["sc_adjust", "sc_peers"],
                    ),
                ],
                required_count: 3,
            },
            CriteriaSet {
                id: "dsm5_b".to_string(),
                label: "DSM-5 B: Restricted, Repetitive Behaviors".to_string(),
                criteria: vec![
                    Criterion::new(
                        "b1_stereotyped",
                        "Stereotyped or repetitive behaviors",
                        &["rrb_stereotyped"],
                    ),
                    Criterion::new("b2_sameness", "Insistence on sameness", &["rrb_sameness"]),
                    Criterion::new("b3_fixated", "Fixated interests", &["rrb_fixated"]),
                    Criterion::new("b4_sensory", "Sensory reactivity differences", &["rrb_sensory"]),
                ],
                required_count: 2,
            },
        ],
    }
}
