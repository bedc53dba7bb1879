//! Concurrent assessment registry keyed by person and competency.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rayon::prelude::*;
use tracing::{info, instrument};

use ccis_core::assessment::{CcisLevel, CompetencyAssessment};
use ccis_core::config::CcisConfig;
use ccis_core::errors::{CcisResult, ProgressionError, SignalError};
use ccis_core::models::{AssessmentSummary, CompetencyId, PersonId};
use ccis_core::traits::{IAssessmentStore, IIdentityResolver};

use crate::engine::ProgressionEngine;

type Key = (PersonId, CompetencyId);

/// Thread-safe collection of assessments with an engine attached.
///
/// `DashMap` gives per-entry locking: mutations go through
/// [`AssessmentRegistry::with_assessment_mut`] and run under the entry's
/// shard lock, so two threads can work different assessments
/// concurrently while writes to the same assessment serialize. Reads
/// hand out cloned snapshots.
pub struct AssessmentRegistry {
    assessments: Arc<DashMap<Key, CompetencyAssessment>>,
    engine: ProgressionEngine,
    resolver: Arc<dyn IIdentityResolver>,
}

impl AssessmentRegistry {
    pub fn new(config: CcisConfig, resolver: Arc<dyn IIdentityResolver>) -> Self {
        Self {
            assessments: Arc::new(DashMap::new()),
            engine: ProgressionEngine::new(config),
            resolver,
        }
    }

    pub fn engine(&self) -> &ProgressionEngine {
        &self.engine
    }

    /// Open an assessment for one person and competency and return its id.
    ///
    /// Both identities are resolved before anything is created; a second
    /// open for the same pair fails with `AssessmentExists`.
    #[instrument(skip(self), fields(person = %person, competency = %competency))]
    pub fn open(
        &self,
        person: PersonId,
        competency: CompetencyId,
        target_level: CcisLevel,
    ) -> CcisResult<String> {
        if !self.resolver.person_exists(&person)? {
            return Err(SignalError::UnknownPerson {
                person_id: person.0,
            }
            .into());
        }
        if !self.resolver.competency_exists(&competency)? {
            return Err(SignalError::UnknownCompetency {
                competency_id: competency.0,
            }
            .into());
        }

        let assessment =
            CompetencyAssessment::new(person.clone(), competency.clone(), target_level)?;
        let id = assessment.id.clone();
        match self.assessments.entry((person, competency)) {
            Entry::Occupied(_) => Err(ProgressionError::AssessmentExists {
                person_id: assessment.person_id.0.clone(),
                competency_id: assessment.competency_id.0.clone(),
            }
            .into()),
            Entry::Vacant(slot) => {
                slot.insert(assessment);
                info!(%id, "assessment opened");
                Ok(id)
            }
        }
    }

    /// Cloned snapshot of one assessment.
    pub fn get(
        &self,
        person: &PersonId,
        competency: &CompetencyId,
    ) -> Option<CompetencyAssessment> {
        self.assessments
            .get(&(person.clone(), competency.clone()))
            .map(|r| r.clone())
    }

    /// Run one mutating operation under the entry lock.
    ///
    /// The closure receives the engine and the live aggregate; whatever
    /// it returns is passed through. Holding the lock for the duration
    /// keeps read-modify-write sequences atomic per assessment.
    pub fn with_assessment_mut<T>(
        &self,
        person: &PersonId,
        competency: &CompetencyId,
        op: impl FnOnce(&ProgressionEngine, &mut CompetencyAssessment) -> CcisResult<T>,
    ) -> CcisResult<T> {
        match self
            .assessments
            .get_mut(&(person.clone(), competency.clone()))
        {
            Some(mut entry) => op(&self.engine, entry.value_mut()),
            None => Err(ProgressionError::AssessmentNotFound {
                person_id: person.0.clone(),
                competency_id: competency.0.clone(),
            }
            .into()),
        }
    }

    /// Refresh every assessment in parallel and return how many were
    /// recomputed. Aggregates are independent, so the passes never
    /// contend beyond the entry locks.
    #[instrument(skip(self))]
    pub fn process_batch(&self) -> usize {
        let keys: Vec<Key> = self.assessments.iter().map(|r| r.key().clone()).collect();
        let refreshed = keys
            .par_iter()
            .filter_map(|key| {
                let mut entry = self.assessments.get_mut(key)?;
                self.engine.update_progress(entry.value_mut()).ok()
            })
            .count();
        info!(refreshed, "batch refresh complete");
        refreshed
    }

    /// Save every assessment through the store. Stops at the first
    /// store error; aggregates already saved stay saved.
    pub fn persist_all(&self, store: &dyn IAssessmentStore) -> CcisResult<usize> {
        let mut saved = 0usize;
        for entry in self.assessments.iter() {
            store.save(entry.value())?;
            saved += 1;
        }
        Ok(saved)
    }

    /// Load aggregates into the registry, replacing entries that share
    /// a person and competency. Returns how many were loaded.
    pub fn hydrate(&self, assessments: Vec<CompetencyAssessment>) -> usize {
        let loaded = assessments.len();
        for assessment in assessments {
            let key = (assessment.person_id.clone(), assessment.competency_id.clone());
            self.assessments.insert(key, assessment);
        }
        loaded
    }

    /// Summaries of every registered assessment, in map order.
    pub fn summaries(&self) -> Vec<AssessmentSummary> {
        self.assessments
            .iter()
            .map(|r| self.engine.assessment_summary(r.value()))
            .collect()
    }

    /// Summaries of one person's assessments.
    pub fn summaries_for_person(&self, person: &PersonId) -> Vec<AssessmentSummary> {
        self.assessments
            .iter()
            .filter(|r| &r.key().0 == person)
            .map(|r| self.engine.assessment_summary(r.value()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.assessments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assessments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccis_core::config::{CatalogResolver, CompetencyCatalog};
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MemoryStore {
        rows: Mutex<HashMap<String, CompetencyAssessment>>,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self {
                rows: Mutex::new(HashMap::new()),
            }
        }
    }

    impl IAssessmentStore for MemoryStore {
        fn load(
            &self,
            person: &PersonId,
            competency: &CompetencyId,
        ) -> CcisResult<Option<CompetencyAssessment>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .find(|a| &a.person_id == person && &a.competency_id == competency)
                .cloned())
        }

        fn save(&self, assessment: &CompetencyAssessment) -> CcisResult<()> {
            self.rows
                .lock()
                .unwrap()
                .insert(assessment.id.clone(), assessment.clone());
            Ok(())
        }

        fn list_for_person(&self, person: &PersonId) -> CcisResult<Vec<CompetencyAssessment>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .filter(|a| &a.person_id == person)
                .cloned()
                .collect())
        }
    }

    fn registry() -> AssessmentRegistry {
        let resolver = Arc::new(CatalogResolver::new(CompetencyCatalog::default()));
        AssessmentRegistry::new(CcisConfig::default(), resolver)
    }

    #[test]
    fn open_registers_and_rejects_duplicates() {
        let registry = registry();
        registry
            .open(
                PersonId::from("p-1"),
                CompetencyId::from("communication"),
                CcisLevel::Autonomous,
            )
            .unwrap();
        assert_eq!(registry.len(), 1);

        let err = registry
            .open(
                PersonId::from("p-1"),
                CompetencyId::from("communication"),
                CcisLevel::Autonomous,
            )
            .unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn open_resolves_identities_first() {
        let registry = registry();
        let blank_person = registry.open(
            PersonId::from("   "),
            CompetencyId::from("communication"),
            CcisLevel::Autonomous,
        );
        assert!(blank_person.is_err());

        let unknown_competency = registry.open(
            PersonId::from("p-1"),
            CompetencyId::from("not-in-catalog"),
            CcisLevel::Autonomous,
        );
        assert!(unknown_competency
            .unwrap_err()
            .to_string()
            .contains("unknown competency"));
        assert!(registry.is_empty());
    }

    #[test]
    fn mutation_requires_an_existing_entry() {
        let registry = registry();
        let err = registry
            .with_assessment_mut(
                &PersonId::from("p-9"),
                &CompetencyId::from("communication"),
                |engine, assessment| engine.update_progress(assessment),
            )
            .unwrap_err();
        assert!(err.to_string().contains("no assessment found"));
    }

    #[test]
    fn snapshots_are_clones() {
        let registry = registry();
        let person = PersonId::from("p-1");
        let competency = CompetencyId::from("collaboration");
        registry
            .open(person.clone(), competency.clone(), CcisLevel::Autonomous)
            .unwrap();

        let mut snapshot = registry.get(&person, &competency).unwrap();
        snapshot.requires_human_review = true;

        let live = registry.get(&person, &competency).unwrap();
        assert!(!live.requires_human_review);
    }

    #[test]
    fn batch_pass_refreshes_every_assessment() {
        let registry = registry();
        for competency in ["communication", "collaboration", "critical_thinking"] {
            registry
                .open(
                    PersonId::from("p-1"),
                    CompetencyId::from(competency),
                    CcisLevel::Autonomous,
                )
                .unwrap();
        }

        assert_eq!(registry.process_batch(), 3);

        for competency in ["communication", "collaboration", "critical_thinking"] {
            let assessment = registry
                .get(&PersonId::from("p-1"), &CompetencyId::from(competency))
                .unwrap();
            assert_eq!(assessment.version, 1);
        }
    }

    #[test]
    fn persist_and_hydrate_round_trip() {
        let registry = registry();
        let person = PersonId::from("p-1");
        registry
            .open(
                person.clone(),
                CompetencyId::from("communication"),
                CcisLevel::Autonomous,
            )
            .unwrap();
        registry
            .open(
                person.clone(),
                CompetencyId::from("metacognition"),
                CcisLevel::SelfDirected,
            )
            .unwrap();

        let store = MemoryStore::new();
        assert_eq!(registry.persist_all(&store).unwrap(), 2);

        let restored = self::registry();
        let loaded = restored.hydrate(store.list_for_person(&person).unwrap());
        assert_eq!(loaded, 2);
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.summaries_for_person(&person).len(), 2);
    }
}
