use std::sync::LazyLock;

use arbor_core::models::response::RaterRole;

use crate::catalog::{
    AssessmentDefinition, CriteriaSet, Criterion, Domain, Item, ScoringRule, Thresholds, Tier,
};
use crate::Protocol;

/// ADHD Rating Scale, DSM-5 aligned. Two nine-item likert domains
/// (Inattention, Hyperactivity/Impulsivity), each with a 6-of-9
/// symptom-count criteria set. Every item accepts parent and teacher
/// ratings for inter-rater comparison.
pub struct Adhd;

impl Protocol for Adhd {
    fn id(&self) -> &str {
        "adhd"
    }

    fn name(&self) -> &str {
        "ADHD Rating Scale"
    }

    fn definition(&self) -> &AssessmentDefinition {
        static DEF: LazyLock<AssessmentDefinition> = LazyLock::new(build);
        &DEF
    }
}

const INATTENTION: [(&str, &str); 9] = [
    ("ia_careless", "Fails to give close attention to details"),
    ("ia_sustain", "Difficulty sustaining attention in tasks or play"),
    ("ia_listen", "Does not seem to listen when spoken to directly"),
    ("ia_follow", "Does not follow through on instructions"),
    ("ia_organize", "Difficulty organizing tasks and activities"),
    ("ia_avoid", "Avoids tasks requiring sustained mental effort"),
    ("ia_lose", "Loses things necessary for tasks"),
    ("ia_distract", "Easily distracted by extraneous stimuli"),
    ("ia_forget", "Forgetful in daily activities"),
];

const HYPERACTIVITY: [(&str, &str); 9] = [
    ("hy_fidget", "Fidgets with hands or feet, squirms in seat"),
    ("hy_seat", "Leaves seat when remaining seated is expected"),
    ("hy_run", "Runs about or climbs in inappropriate situations"),
    ("hy_quiet", "Unable to play or engage quietly"),
    ("hy_motor", "On the go, acts as if driven by a motor"),
    ("hy_talk", "Talks excessively"),
    ("hy_blurt", "Blurts out answers before questions are completed"),
    ("hy_wait", "Difficulty awaiting turn"),
    ("hy_interrupt", "Interrupts or intrudes on others"),
];

fn build() -> AssessmentDefinition {
    let rater_roles = [RaterRole::Parent, RaterRole::Teacher];

    let mut items: Vec<Item> = Vec::new();
    for (id, label) in INATTENTION {
        items.push(Item::likert(id, "inattention", label).with_roles(&rater_roles));
    }
    for (id, label) in HYPERACTIVITY {
        items.push(Item::likert(id, "hyperactivity", label).with_roles(&rater_roles));
    }

    let domain = |id: &str, label: &str, ids: &[(&str, &str)]| Domain {
        id: id.to_string(),
        label: label.to_string(),
        scoring: ScoringRule::Sum,
        thresholds: Thresholds::default(),
        tiers: vec![Tier {
            level: "standard".to_string(),
            item_ids: ids.iter().map(|(i, _)| i.to_string()).collect(),
        }],
        start_tier: 0,
    };

    // One criterion per symptom; DSM-5 requires six of nine.
    let symptom_set = |set_id: &str, label: &str, ids: &[(&str, &str)]| CriteriaSet {
        id: set_id.to_string(),
        label: label.to_string(),
        criteria: ids
            .iter()
            .map(|&(id, label)| Criterion::new(&format!("crit_{id}"), label, &[id]))
            .collect(),
        required_count: 6,
    };

    AssessmentDefinition {
        id: "adhd".to_string(),
        name: "ADHD Rating Scale".to_string(),
        domains: vec![
            domain("inattention", "Inattention", &INATTENTION),
            domain("hyperactivity", "Hyperactivity/Impulsivity", &HYPERACTIVITY),
        ],
        items,
        criteria_sets: vec![
            symptom_set("dsm5_inattention", "DSM-5 Inattention Symptoms", &INATTENTION),
            symptom_set(
                "dsm5_hyperactivity",
                "DSM-5 Hyperactivity/Impulsivity Symptoms",
                &HYPERACTIVITY,
            ),
        ],
    }
}
