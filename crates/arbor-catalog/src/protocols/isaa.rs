use std::sync::LazyLock;

use crate::catalog::{
    AssessmentDefinition, Domain, Item, ScoringRule, Thresholds, Tier,
};
use crate::Protocol;

/// ISAA: Indian Scale for Assessment of Autism. Six sum-scored likert
/// domains rated by the administering clinician; no adaptive tiers and
/// no symptom-count criteria; interpretation runs off domain totals.
pub struct Isaa;

impl Protocol for Isaa {
    fn id(&self) -> &str {
        "isaa"
    }

    fn name(&self) -> &str {
        "ISAA"
    }

    fn definition(&self) -> &AssessmentDefinition {
        static DEF: LazyLock<AssessmentDefinition> = LazyLock::new(build);
        &DEF
    }
}

const DOMAINS: [(&str, &str, &[(&str, &str)]); 6] = [
    (
        "social",
        "Social Relationship and Reciprocity",
        &[
            ("soc_eye_contact", "Has poor eye contact"),
            ("soc_social_smile", "Lacks social smile"),
            ("soc_aloof", "Remains aloof"),
            ("soc_reach_out", "Does not reach out to others"),
            ("soc_peer_play", "Unable to relate to peers in play"),
            ("soc_imitate", "Unable to imitate social behavior"),
        ],
    ),
    (
        "emotional",
        "Emotional Responsiveness",
        &[
            ("emo_excited", "Shows inappropriate emotional response"),
            ("emo_self_injury", "Shows self-injurious behavior"),
            ("emo_fear", "Shows exaggerated or absent fear response"),
            ("emo_unprovoked", "Excited or agitated for no apparent reason"),
        ],
    ),
    (
        "speech",
        "Speech, Language and Communication",
        &[
            ("spc_gesture", "Does not use gestures to communicate"),
            ("spc_echolalia", "Repeats words or phrases (echolalia)"),
            ("spc_pronoun", "Produces pronominal reversal"),
            ("spc_initiate", "Unable to initiate or sustain conversation"),
            ("spc_engage", "Does not engage in imaginative play with language"),
        ],
    ),
    (
        "behavior",
        "Behavior Patterns",
        &[
            ("beh_stereotypy", "Engages in stereotyped and repetitive motor mannerisms"),
            ("beh_attachment", "Shows attachment to inanimate objects"),
            ("beh_sameness", "Insists on sameness"),
            ("beh_hyperactive", "Shows hyperactivity or restlessness"),
        ],
    ),
    (
        "sensory",
        "Sensory Aspects",
        &[
            ("sen_pain", "Has unusual insensitivity to pain"),
            ("sen_spin", "Stares into space or spins objects"),
            ("sen_sound", "Responds unusually to sounds"),
            ("sen_smell", "Smells or licks objects inappropriately"),
        ],
    ),
    (
        "cognitive",
        "Cognitive Component",
        &[
            ("cog_attention", "Has inconsistent attention and concentration"),
            ("cog_response_delay", "Shows delayed response to questions"),
            ("cog_savant", "Shows unusual or savant ability"),
        ],
    ),
];

fn build() -> AssessmentDefinition {
    let mut items = Vec::new();
    let mut domains = Vec::new();

    for (domain_id, label, item_defs) in DOMAINS {
        for (id, item_label) in item_defs {
            items.push(Item::likert(id, domain_id, item_label));
        }
        domains.push(Domain {
            id: domain_id.to_string(),
            label: label.to_string(),
            scoring: ScoringRule::Sum,
            thresholds: Thresholds::default(),
            tiers: vec![Tier {
                level: "standard".to_string(),
                item_ids: item_defs.iter().map(|(i, _)| i.to_string()).collect(),
            }],
            start_tier: 0,
        });
    }

    AssessmentDefinition {
        id: "isaa".to_string(),
        name: "ISAA".to_string(),
        domains,
        items,
        criteria_sets: Vec::new(),
    }
}
