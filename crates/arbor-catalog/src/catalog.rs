use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use arbor_core::models::response::RaterRole;

use crate::error::CatalogError;

/// How a rater answers an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResponseType {
    /// 0 = never … 4 = very often.
    Likert0To4,
    /// One of the item's declared categories.
    Categorical,
    /// 0 = incorrect, 1 = correct.
    BinaryCorrectness,
}

/// A declared categorical value and its scoring weight. `positive`
/// marks the category as evidencing a criterion regardless of weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub value: String,
    pub weight: f64,
    pub positive: bool,
}

/// How a domain aggregates its item values into a raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringRule {
    Sum,
    Mean,
    /// Sum of `item.weight * value`.
    Weighted,
}

/// Adaptive thresholds on tier accuracy (0.0–1.0). Catalog data, not
/// engine constants: protocols differ only here and in their tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Thresholds {
    pub advance: f64,
    pub branch_down: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            advance: 0.8,
            branch_down: 0.4,
        }
    }
}

/// One difficulty tier inside a domain. Non-adaptive domains have a
/// single tier holding every item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Tier {
    pub level: String,
    pub item_ids: Vec<String>,
}

/// A named cluster of items scored together, with its scoring rule and
/// adaptive thresholds. Tiers are ordered easiest to hardest.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Domain {
    pub id: String,
    pub label: String,
    pub scoring: ScoringRule,
    pub thresholds: Thresholds,
    pub tiers: Vec<Tier>,
    /// Tier queued when a session opens this domain. Adaptive domains
    /// typically start mid-list so both branch directions exist.
    pub start_tier: usize,
}

impl Domain {
    /// Every item id in the domain, tier order preserved.
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.tiers
            .iter()
            .flat_map(|t| t.item_ids.iter().map(String::as_str))
    }
}

/// A single assessment item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub domain_id: String,
    pub label: String,
    pub response: ResponseType,
    /// Populated for `Categorical` items only.
    pub categories: Vec<Category>,
    /// Roles allowed to answer. Empty means primary only.
    pub rater_roles: Vec<RaterRole>,
    /// Used by `ScoringRule::Weighted`.
    pub weight: f64,
    /// Minimum inter-rater delta that raises a discrepancy flag.
    pub discrepancy_threshold: f64,
}

impl Item {
    pub fn likert(id: &str, domain_id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            domain_id: domain_id.to_string(),
            label: label.to_string(),
            response: ResponseType::Likert0To4,
            categories: Vec::new(),
            rater_roles: Vec::new(),
            weight: 1.0,
            discrepancy_threshold: 2.0,
        }
    }

    pub fn binary(id: &str, domain_id: &str, label: &str) -> Self {
        Self {
            response: ResponseType::BinaryCorrectness,
            ..Self::likert(id, domain_id, label)
        }
    }

    pub fn categorical(id: &str, domain_id: &str, label: &str, categories: Vec<Category>) -> Self {
        Self {
            response: ResponseType::Categorical,
            categories,
            ..Self::likert(id, domain_id, label)
        }
    }

    pub fn with_roles(mut self, roles: &[RaterRole]) -> Self {
        self.rater_roles = roles.to_vec();
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Whether `role` may record a response on this item.
    pub fn accepts_role(&self, role: RaterRole) -> bool {
        if self.rater_roles.is_empty() {
            role == RaterRole::Primary
        } else {
            self.rater_roles.contains(&role)
        }
    }

    /// The highest numeric value this item can contribute.
    pub fn max_value(&self) -> f64 {
        match self.response {
            ResponseType::Likert0To4 => 4.0,
            ResponseType::BinaryCorrectness => 1.0,
            ResponseType::Categorical => self
                .categories
                .iter()
                .map(|c| c.weight)
                .fold(0.0, f64::max),
        }
    }
}

/// A diagnostic rule: met when at least one tagged item has a response
/// at or above `threshold` (numeric), or a positive category.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Criterion {
    pub id: String,
    pub label: String,
    /// Items that evidence this criterion.
    pub item_ids: Vec<String>,
    /// "often"/"very often" tier by default: numeric >= 3 on the 0–4 scale.
    pub threshold: f64,
}

impl Criterion {
    pub fn new(id: &str, label: &str, item_ids: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            item_ids: item_ids.iter().map(|s| s.to_string()).collect(),
            threshold: 3.0,
        }
    }
}

/// A named diagnostic category: `satisfied` once `required_count`
/// distinct criteria are met.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CriteriaSet {
    pub id: String,
    pub label: String,
    pub criteria: Vec<Criterion>,
    pub required_count: usize,
}

/// A complete, immutable assessment protocol definition. Built once at
/// catalog load and shared read-only across sessions.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentDefinition {
    pub id: String,
    pub name: String,
    pub domains: Vec<Domain>,
    pub items: Vec<Item>,
    pub criteria_sets: Vec<CriteriaSet>,
}

impl AssessmentDefinition {
    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn domain(&self, domain_id: &str) -> Option<&Domain> {
        self.domains.iter().find(|d| d.id == domain_id)
    }

    /// Items belonging to one domain, tier order preserved.
    pub fn domain_items(&self, domain: &Domain) -> Vec<&Item> {
        domain
            .item_ids()
            .filter_map(|id| self.item(id))
            .collect()
    }

    /// Items of a single tier within a domain.
    pub fn tier_items(&self, domain: &Domain, tier: usize) -> Vec<&Item> {
        domain
            .tiers
            .get(tier)
            .map(|t| {
                t.item_ids
                    .iter()
                    .filter_map(|id| self.item(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Fail-fast structural check, run at catalog registration and at
    /// session start. Any error here is a defect in the protocol data.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.domains.is_empty() {
            return Err(CatalogError::NoDomains {
                definition_id: self.id.clone(),
            });
        }

        let mut seen = HashSet::new();
        for id in self
            .domains
            .iter()
            .map(|d| d.id.as_str())
            .chain(self.items.iter().map(|i| i.id.as_str()))
            .chain(self.criteria_sets.iter().map(|s| s.id.as_str()))
        {
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateId {
                    definition_id: self.id.clone(),
                    id: id.to_string(),
                });
            }
        }

        for item in &self.items {
            if self.domain(&item.domain_id).is_none() {
                return Err(CatalogError::ItemUnknownDomain {
                    item_id: item.id.clone(),
                    domain_id: item.domain_id.clone(),
                });
            }
            if item.response == ResponseType::Categorical && item.categories.is_empty() {
                return Err(CatalogError::NoCategories {
                    item_id: item.id.clone(),
                });
            }
        }

        for domain in &self.domains {
            if domain.tiers.is_empty() {
                return Err(CatalogError::NoTiers {
                    domain_id: domain.id.clone(),
                });
            }
            if domain.start_tier >= domain.tiers.len() {
                return Err(CatalogError::BadStartTier {
                    domain_id: domain.id.clone(),
                    tier: domain.start_tier,
                });
            }
            for (tier_idx, tier) in domain.tiers.iter().enumerate() {
                if tier.item_ids.is_empty() {
                    return Err(CatalogError::EmptyTier {
                        domain_id: domain.id.clone(),
                        tier: tier_idx,
                    });
                }
                for item_id in &tier.item_ids {
                    if self.item(item_id).is_none() {
                        return Err(CatalogError::TierUnknownItem {
                            domain_id: domain.id.clone(),
                            tier: tier_idx,
                            item_id: item_id.clone(),
                        });
                    }
                }
            }
        }

        for set in &self.criteria_sets {
            for criterion in &set.criteria {
                for item_id in &criterion.item_ids {
                    if self.item(item_id).is_none() {
                        return Err(CatalogError::CriterionUnknownItem {
                            criterion_id: criterion.id.clone(),
                            item_id: item_id.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
