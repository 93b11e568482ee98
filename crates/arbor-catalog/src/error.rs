use thiserror::Error;

/// Catalog defects. Every variant is a configuration problem: a bug in
/// the protocol definition, never a runtime condition to swallow. These
/// surface to operators and abort the request that hit them.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("unknown protocol: {0}")]
    UnknownProtocol(String),

    #[error("criterion '{criterion_id}' references unknown item '{item_id}'")]
    CriterionUnknownItem {
        criterion_id: String,
        item_id: String,
    },

    #[error("item '{item_id}' names unknown domain '{domain_id}'")]
    ItemUnknownDomain { item_id: String, domain_id: String },

    #[error("tier {tier} of domain '{domain_id}' references unknown item '{item_id}'")]
    TierUnknownItem {
        domain_id: String,
        tier: usize,
        item_id: String,
    },

    #[error("definition '{definition_id}' defines no domains")]
    NoDomains { definition_id: String },

    #[error("domain '{domain_id}' defines no tiers")]
    NoTiers { domain_id: String },

    #[error("domain '{domain_id}' start tier {tier} is out of range")]
    BadStartTier { domain_id: String, tier: usize },

    #[error("tier {tier} of domain '{domain_id}' is empty")]
    EmptyTier { domain_id: String, tier: usize },

    #[error("categorical item '{item_id}' defines no categories")]
    NoCategories { item_id: String },

    #[error("duplicate id '{id}' in definition '{definition_id}'")]
    DuplicateId { definition_id: String, id: String },
}
