use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

use arbor_catalog::catalog::{AssessmentDefinition, Domain};
use arbor_core::models::discrepancy::DiscrepancyFlag;
use arbor_core::models::progress::{DomainPhase, DomainProgress};
use arbor_core::models::response::{RaterRole, Response, ResponseValue};
use arbor_core::models::score::DomainScore;
use arbor_core::models::summary::AssessmentSummary;
use arbor_engine::error::EngineError;
use arbor_engine::sequencer::TierOutcome;
use arbor_engine::{discrepancy, progress, scorer, sequencer};

use crate::error::SessionError;

/// What a single recorded response did to the session: the refreshed
/// score for the affected domain, any discrepancy raised on the item,
/// the domain's adaptive phase, and the next queued item.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ResponseOutcome {
    pub domain_score: DomainScore,
    pub discrepancy: Option<DiscrepancyFlag>,
    pub phase: DomainPhase,
    pub next_item: Option<String>,
}

/// One assessment sitting. Created against an immutable catalog
/// definition, mutated only through response recording and domain
/// advancement, read-only once finalized.
#[derive(Debug)]
pub struct SessionState {
    id: Uuid,
    definition: Arc<AssessmentDefinition>,
    responses: BTreeMap<(String, RaterRole), Response>,
    progress: Vec<DomainProgress>,
    current_domain: usize,
    score_cache: HashMap<(String, RaterRole), DomainScore>,
    flags: Vec<DiscrepancyFlag>,
    finalized: Option<AssessmentSummary>,
}

impl SessionState {
    /// Start a session. Catalog defects (missing tiers, dangling item
    /// references) fail here, never mid-session.
    pub fn new(definition: Arc<AssessmentDefinition>) -> Result<Self, SessionError> {
        definition.validate()?;
        let progress = definition
            .domains
            .iter()
            .map(|d| DomainProgress::new(&d.id, d.start_tier))
            .collect();
        Ok(Self {
            id: Uuid::new_v4(),
            definition,
            responses: BTreeMap::new(),
            progress,
            current_domain: 0,
            score_cache: HashMap::new(),
            flags: Vec::new(),
            finalized: None,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn definition(&self) -> &AssessmentDefinition {
        &self.definition
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized.is_some()
    }

    pub fn progress(&self) -> &[DomainProgress] {
        &self.progress
    }

    pub fn flags(&self) -> &[DiscrepancyFlag] {
        &self.flags
    }

    /// The domain the current-domain pointer rests on.
    pub fn current_domain(&self) -> &Domain {
        // progress is seeded 1:1 with definition.domains at construction
        &self.definition.domains[self.current_domain]
    }

    fn snapshot(&self) -> Vec<Response> {
        self.responses.values().cloned().collect()
    }

    fn progress_mut(&mut self, domain_id: &str) -> Result<&mut DomainProgress, SessionError> {
        self.progress
            .iter_mut()
            .find(|p| p.domain_id == domain_id)
            .ok_or_else(|| SessionError::UnknownDomain {
                domain_id: domain_id.to_string(),
            })
    }

    /// Record one response: validate, upsert, invalidate the domain's
    /// score cache, refresh the item's discrepancy flag, and re-run the
    /// adaptive sequencer for the affected domain.
    ///
    /// Recording the same (item, role, value) twice is a no-op beyond
    /// the timestamp; later writes overwrite earlier ones.
    pub fn record_response(
        &mut self,
        item_id: &str,
        role: RaterRole,
        value: ResponseValue,
    ) -> Result<ResponseOutcome, SessionError> {
        if self.is_finalized() {
            return Err(SessionError::Finalized { session_id: self.id });
        }

        let item = self
            .definition
            .item(item_id)
            .ok_or_else(|| EngineError::UnknownItem {
                item_id: item_id.to_string(),
            })?
            .clone();
        if !item.accepts_role(role) {
            return Err(EngineError::invalid(
                item_id,
                format!("rater role {role:?} is not accepted by this item"),
            )
            .into());
        }
        scorer::validate_response(&item, &value)?;

        self.responses.insert(
            (item_id.to_string(), role),
            Response {
                item_id: item_id.to_string(),
                role,
                value,
                recorded_at: jiff::Timestamp::now(),
            },
        );
        self.score_cache.retain(|(d, _), _| d != &item.domain_id);

        let snapshot = self.snapshot();

        self.flags.retain(|f| f.item_id != item.id);
        let flag = discrepancy::analyze_item(&item, &snapshot)?;
        if let Some(flag) = &flag {
            self.flags.push(flag.clone());
        }

        let domain = self
            .definition
            .domain(&item.domain_id)
            .ok_or_else(|| EngineError::UnknownDomain {
                domain_id: item.domain_id.clone(),
            })?
            .clone();
        let (current_tier, visited) = {
            let p = self
                .progress
                .iter()
                .find(|p| p.domain_id == domain.id)
                .ok_or_else(|| SessionError::UnknownDomain {
                    domain_id: domain.id.clone(),
                })?;
            (p.current_tier, p.visited_tiers.clone())
        };
        let outcome =
            sequencer::evaluate_tier(&self.definition, &domain, current_tier, &visited, &snapshot)?;
        let phase = self.apply_outcome(&domain.id, outcome)?;

        let domain_score = self.domain_score(&domain.id, role)?;
        let next_item = self.next_item_in(&domain)?;

        Ok(ResponseOutcome {
            domain_score,
            discrepancy: flag,
            phase,
            next_item,
        })
    }

    fn apply_outcome(
        &mut self,
        domain_id: &str,
        outcome: TierOutcome,
    ) -> Result<DomainPhase, SessionError> {
        let p = self.progress_mut(domain_id)?;
        match outcome {
            TierOutcome::InProgress => p.phase = DomainPhase::InProgress,
            TierOutcome::Advance { next_tier: None } => p.phase = DomainPhase::Advanced,
            TierOutcome::Advance {
                next_tier: Some(tier),
            } => {
                p.phase = if p.branched_down {
                    DomainPhase::BranchedUp
                } else {
                    DomainPhase::Advanced
                };
                p.branched_down = false;
                p.current_tier = tier;
                p.visited_tiers.insert(tier);
            }
            TierOutcome::BranchDown { next_tier } => {
                p.phase = DomainPhase::BranchedDown;
                p.branched_down = true;
                p.current_tier = next_tier;
                p.visited_tiers.insert(next_tier);
            }
            TierOutcome::Hold => p.phase = DomainPhase::HeldForReview,
        }
        Ok(p.phase)
    }

    /// Score one domain for one rater role, over the tiers the session
    /// has actually queued. Cached until a response lands in the domain.
    pub fn domain_score(
        &mut self,
        domain_id: &str,
        role: RaterRole,
    ) -> Result<DomainScore, SessionError> {
        let key = (domain_id.to_string(), role);
        if let Some(score) = self.score_cache.get(&key) {
            return Ok(score.clone());
        }

        let domain = self
            .definition
            .domain(domain_id)
            .ok_or_else(|| EngineError::UnknownDomain {
                domain_id: domain_id.to_string(),
            })?;
        let p = self
            .progress
            .iter()
            .find(|p| p.domain_id == domain_id)
            .ok_or_else(|| SessionError::UnknownDomain {
                domain_id: domain_id.to_string(),
            })?;
        let items: Vec<_> = p
            .visited_tiers
            .iter()
            .flat_map(|&tier| self.definition.tier_items(domain, tier))
            .collect();

        let snapshot = self.snapshot();
        let score = scorer::score_items(domain_id, domain.scoring, &items, &snapshot, role)?;
        self.score_cache.insert(key, score.clone());
        Ok(score)
    }

    fn next_item_in(&self, domain: &Domain) -> Result<Option<String>, SessionError> {
        let p = self
            .progress
            .iter()
            .find(|p| p.domain_id == domain.id)
            .ok_or_else(|| SessionError::UnknownDomain {
                domain_id: domain.id.clone(),
            })?;
        let items = self.definition.tier_items(domain, p.current_tier);
        let snapshot = self.snapshot();
        Ok(sequencer::next_item(&items, &snapshot).map(|i| i.id.clone()))
    }

    /// Next queued item in the current domain, if any remain.
    pub fn next_item(&self) -> Result<Option<String>, SessionError> {
        self.next_item_in(self.current_domain())
    }

    /// Move the current-domain pointer to the next unfinished domain.
    /// A domain sitting in `Advanced` is promoted to `Completed` on the
    /// way out. Returns the new current domain id, or `None` when every
    /// domain is finished.
    pub fn advance_domain(&mut self) -> Result<Option<String>, SessionError> {
        if self.is_finalized() {
            return Err(SessionError::Finalized { session_id: self.id });
        }

        let current_id = self.current_domain().id.clone();
        let p = self.progress_mut(&current_id)?;
        if p.phase == DomainPhase::Advanced {
            p.phase = DomainPhase::Completed;
        }

        let total = self.definition.domains.len();
        for offset in 1..=total {
            let idx = (self.current_domain + offset) % total;
            let domain_id = &self.definition.domains[idx].id;
            let phase = self
                .progress
                .iter()
                .find(|p| &p.domain_id == domain_id)
                .map(|p| p.phase);
            if phase != Some(DomainPhase::Completed) {
                self.current_domain = idx;
                return Ok(Some(self.definition.domains[idx].id.clone()));
            }
        }
        Ok(None)
    }

    /// Mark a domain finished without answers, the explicit skip.
    pub fn skip_domain(&mut self, domain_id: &str) -> Result<(), SessionError> {
        if self.is_finalized() {
            return Err(SessionError::Finalized { session_id: self.id });
        }
        let p = self.progress_mut(domain_id)?;
        p.phase = DomainPhase::Completed;
        p.skipped = true;
        Ok(())
    }

    /// Clinician override for a domain held for review: force it
    /// through as passed.
    pub fn override_advance(&mut self, domain_id: &str) -> Result<(), SessionError> {
        if self.is_finalized() {
            return Err(SessionError::Finalized { session_id: self.id });
        }
        let p = self.progress_mut(domain_id)?;
        if p.phase != DomainPhase::HeldForReview {
            return Err(SessionError::NotHeld {
                domain_id: domain_id.to_string(),
            });
        }
        p.phase = DomainPhase::Advanced;
        Ok(())
    }

    /// Full recomputation over the complete response set. After
    /// finalization this returns the retained snapshot unchanged.
    pub fn summary(&self) -> Result<AssessmentSummary, SessionError> {
        if let Some(summary) = &self.finalized {
            return Ok(summary.clone());
        }
        Ok(progress::summarize(
            &self.definition,
            &self.snapshot(),
            &self.progress,
            None,
        )?)
    }

    /// Lock the session. Every domain must be `Advanced` or `Completed`
    /// (or skipped); `Advanced` domains are promoted on the way in. The
    /// derived summary is retained and returned for all later reads.
    /// Finalizing twice returns the retained summary unchanged.
    pub fn finalize(&mut self) -> Result<AssessmentSummary, SessionError> {
        if let Some(summary) = &self.finalized {
            return Ok(summary.clone());
        }

        if let Some(p) = self.progress.iter().find(|p| {
            p.phase != DomainPhase::Completed && p.phase != DomainPhase::Advanced
        }) {
            return Err(SessionError::IncompleteDomain {
                session_id: self.id,
                domain_id: p.domain_id.clone(),
            });
        }
        for p in &mut self.progress {
            p.phase = DomainPhase::Completed;
        }

        let summary = progress::summarize(
            &self.definition,
            &self.snapshot(),
            &self.progress,
            Some(jiff::Timestamp::now()),
        )?;
        self.finalized = Some(summary.clone());
        Ok(summary)
    }
}
