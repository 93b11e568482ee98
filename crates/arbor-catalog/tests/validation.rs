use arbor_catalog::catalog::{
    AssessmentDefinition, CriteriaSet, Criterion, Domain, Item, ScoringRule, Thresholds, Tier,
};
use arbor_catalog::error::CatalogError;

fn minimal_definition() -> AssessmentDefinition {
    AssessmentDefinition {
        id: "test".to_string(),
        name: "Test".to_string(),
        domains: vec![Domain {
            id: "d1".to_string(),
            label: "Domain 1".to_string(),
            scoring: ScoringRule::Sum,
            thresholds: Thresholds::default(),
            tiers: vec![Tier {
                level: "standard".to_string(),
                item_ids: vec!["i1".to_string()],
            }],
            start_tier: 0,
        }],
        items: vec![Item::likert("i1", "d1", "Item 1")],
        criteria_sets: Vec::new(),
    }
}

#[test]
fn minimal_definition_is_valid() {
    minimal_definition().validate().unwrap();
}

#[test]
fn criterion_with_unknown_item_fails() {
    let mut def = minimal_definition();
    def.criteria_sets.push(CriteriaSet {
        id: "cs".to_string(),
        label: "Set".to_string(),
        criteria: vec![Criterion::new("c1", "Criterion 1", &["ghost"])],
        required_count: 1,
    });

    let err = def.validate().unwrap_err();
    assert!(matches!(
        err,
        CatalogError::CriterionUnknownItem { criterion_id, item_id }
            if criterion_id == "c1" && item_id == "ghost"
    ));
}

#[test]
fn definition_without_domains_fails() {
    let mut def = minimal_definition();
    def.domains.clear();
    def.items.clear();

    let err = def.validate().unwrap_err();
    assert!(matches!(err, CatalogError::NoDomains { definition_id } if definition_id == "test"));
}

#[test]
fn domain_without_tiers_fails() {
    let mut def = minimal_definition();
    def.domains[0].tiers.clear();

    let err = def.validate().unwrap_err();
    assert!(matches!(err, CatalogError::NoTiers { domain_id } if domain_id == "d1"));
}

#[test]
fn empty_tier_fails() {
    let mut def = minimal_definition();
    def.domains[0].tiers[0].item_ids.clear();

    let err = def.validate().unwrap_err();
    assert!(matches!(
        err,
        CatalogError::EmptyTier { domain_id, tier: 0 } if domain_id == "d1"
    ));
}

#[test]
fn tier_referencing_unknown_item_fails() {
    let mut def = minimal_definition();
    def.domains[0].tiers[0].item_ids.push("ghost".to_string());

    let err = def.validate().unwrap_err();
    assert!(matches!(err, CatalogError::TierUnknownItem { .. }));
}

#[test]
fn item_with_unknown_domain_fails() {
    let mut def = minimal_definition();
    def.items.push(Item::likert("i2", "nowhere", "Item 2"));

    let err = def.validate().unwrap_err();
    assert!(matches!(
        err,
        CatalogError::ItemUnknownDomain { item_id, domain_id }
            if item_id == "i2" && domain_id == "nowhere"
    ));
}

#[test]
fn out_of_range_start_tier_fails() {
    let mut def = minimal_definition();
    def.domains[0].start_tier = 5;

    let err = def.validate().unwrap_err();
    assert!(matches!(err, CatalogError::BadStartTier { tier: 5, .. }));
}

#[test]
fn duplicate_ids_fail() {
    let mut def = minimal_definition();
    def.items.push(Item::likert("i1", "d1", "Duplicate"));

    let err = def.validate().unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId { id, .. } if id == "i1"));
}

#[test]
fn categorical_item_without_categories_fails() {
    let mut def = minimal_definition();
    let mut item = Item::categorical("i2", "d1", "Observation", Vec::new());
    item.categories.clear();
    def.items.push(item);
    def.domains[0].tiers[0].item_ids.push("i2".to_string());

    let err = def.validate().unwrap_err();
    assert!(matches!(err, CatalogError::NoCategories { item_id } if item_id == "i2"));
}
