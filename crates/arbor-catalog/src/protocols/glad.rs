use std::sync::LazyLock;

use crate::catalog::{
    AssessmentDefinition, Domain, Item, ScoringRule, Thresholds, Tier,
};
use crate::Protocol;

/// GLAD: Graded Learning Assessment for Development. Binary-correctness
/// skill probes arranged in easy/standard/hard tiers per domain. The
/// adaptive protocol. Accuracy of 80% on a tier advances to the next
/// harder tier; 40% or below branches down to an easier one.
pub struct Glad;

impl Protocol for Glad {
    fn id(&self) -> &str {
        "glad"
    }

    fn name(&self) -> &str {
        "GLAD"
    }

    fn definition(&self) -> &AssessmentDefinition {
        static DEF: LazyLock<AssessmentDefinition> = LazyLock::new(build);
        &DEF
    }
}

struct TierSpec {
    level: &'static str,
    items: &'static [(&'static str, &'static str)],
}

struct DomainSpec {
    id: &'static str,
    label: &'static str,
    tiers: &'static [TierSpec],
}

const DOMAINS: [DomainSpec; 2] = [
    DomainSpec {
        id: "receptive_language",
        label: "Receptive Language",
        tiers: &[
            TierSpec {
                level: "easy",
                items: &[
                    ("rl_e_name", "Responds to own name"),
                    ("rl_e_point", "Points to named object"),
                    ("rl_e_stop", "Stops activity on 'no'"),
                    ("rl_e_body", "Identifies one body part"),
                ],
            },
            TierSpec {
                level: "standard",
                items: &[
                    ("rl_s_two_step", "Follows a two-step instruction"),
                    ("rl_s_preposition", "Understands in/on/under"),
                    ("rl_s_picture", "Selects described picture from four"),
                    ("rl_s_size", "Distinguishes big from small"),
                    ("rl_s_color", "Identifies three colors by name"),
                ],
            },
            TierSpec {
                level: "hard",
                items: &[
                    ("rl_h_three_step", "Follows a three-step unrelated instruction"),
                    ("rl_h_negation", "Understands negated instructions"),
                    ("rl_h_inference", "Answers simple inference questions about a story"),
                    ("rl_h_time", "Understands before/after sequencing"),
                ],
            },
        ],
    },
    DomainSpec {
        id: "fine_motor",
        label: "Fine Motor",
        tiers: &[
            TierSpec {
                level: "easy",
                items: &[
                    ("fm_e_grasp", "Grasps a block with whole hand"),
                    ("fm_e_transfer", "Transfers object between hands"),
                    ("fm_e_pincer", "Uses pincer grasp for a pellet"),
                    ("fm_e_scribble", "Scribbles spontaneously"),
                ],
            },
            TierSpec {
                level: "standard",
                items: &[
                    ("fm_s_tower", "Builds a tower of six blocks"),
                    ("fm_s_circle", "Copies a circle"),
                    ("fm_s_thread", "Threads three large beads"),
                    ("fm_s_snip", "Snips paper with scissors"),
                    ("fm_s_unscrew", "Unscrews a small lid"),
                ],
            },
            TierSpec {
                level: "hard",
                items: &[
                    ("fm_h_square", "Copies a square"),
                    ("fm_h_cut_line", "Cuts along a straight line"),
                    ("fm_h_name", "Writes first name legibly"),
                    ("fm_h_fold", "Folds paper with aligned edges"),
                ],
            },
        ],
    },
];

fn build() -> AssessmentDefinition {
    let mut items = Vec::new();
    let mut domains = Vec::new();

    for spec in &DOMAINS {
        let mut tiers = Vec::new();
        for tier in spec.tiers {
            for (id, label) in tier.items {
                items.push(Item::binary(id, spec.id, label));
            }
            tiers.push(Tier {
                level: tier.level.to_string(),
                item_ids: tier.items.iter().map(|(i, _)| i.to_string()).collect(),
            });
        }
        domains.push(Domain {
            id: spec.id.to_string(),
            label: spec.label.to_string(),
            scoring: ScoringRule::Sum,
            thresholds: Thresholds::default(),
            tiers,
            // Open at "standard" so both branch directions are live.
            start_tier: 1,
        });
    }

    AssessmentDefinition {
        id: "glad".to_string(),
        name: "GLAD".to_string(),
        domains,
        items,
        criteria_sets: Vec::new(),
    }
}
