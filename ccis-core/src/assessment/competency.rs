//! The competency assessment aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;
use uuid::Uuid;

use crate::assessment::{
    CcisLevel, InterventionRecord, PlateauPeriod, ProgressionState, TaskEvidence,
};
use crate::errors::ProgressionError;
use crate::models::{CompetencyId, GamingRiskResult, LedgerStatistics, PersonId};

/// Everything the engine knows about one person's progress in one
/// competency.
///
/// The aggregate owns its evidence ledger, derived statistics,
/// level-achievement history, plateau periods, interventions, and
/// gaming-risk audit trail. The progression engine is the only writer;
/// hosts read it through [`crate::models::AssessmentSummary`] or
/// persist it whole through [`crate::traits::IAssessmentStore`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompetencyAssessment {
    pub id: String,
    pub person_id: PersonId,
    pub competency_id: CompetencyId,
    pub current_level: CcisLevel,
    pub target_level: CcisLevel,
    pub state: ProgressionState,
    /// Position on the 0-100 scale. Always inside the band owned by
    /// `current_level`.
    pub progress_percentage: f64,
    /// Append-only evidence ledger, in insertion order.
    pub task_evidence: Vec<TaskEvidence>,
    /// Statistics recomputed after every ledger change.
    pub statistics: LedgerStatistics,
    /// When each level ordinal was first reached.
    pub level_achievements: BTreeMap<u8, DateTime<Utc>>,
    pub plateau_periods: Vec<PlateauPeriod>,
    pub interventions: Vec<InterventionRecord>,
    /// Gaming evaluations applied to this assessment, newest last.
    pub risk_history: Vec<GamingRiskResult>,
    /// Set when a high-risk gaming evaluation lands; cleared only by
    /// the host after review.
    pub requires_human_review: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Bumped on every mutation; stores use it for optimistic locking.
    pub version: u64,
}

impl CompetencyAssessment {
    /// Open a fresh assessment at the bottom of the scale.
    pub fn new(
        person_id: PersonId,
        competency_id: CompetencyId,
        target_level: CcisLevel,
    ) -> Result<Self, ProgressionError> {
        Self::with_starting_level(person_id, competency_id, CcisLevel::Dependent, target_level)
    }

    /// Open an assessment at an already-established level, e.g. when
    /// migrating records from a prior system. The target must sit above
    /// the starting level.
    pub fn with_starting_level(
        person_id: PersonId,
        competency_id: CompetencyId,
        current_level: CcisLevel,
        target_level: CcisLevel,
    ) -> Result<Self, ProgressionError> {
        if target_level <= current_level {
            return Err(ProgressionError::TargetNotAboveCurrent {
                current: current_level.ordinal(),
                target: target_level.ordinal(),
            });
        }
        let now = Utc::now();
        let (floor, _) = current_level.band();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            person_id,
            competency_id,
            current_level,
            target_level,
            state: ProgressionState::Initial,
            progress_percentage: floor,
            task_evidence: Vec::new(),
            statistics: LedgerStatistics::default(),
            level_achievements: BTreeMap::new(),
            plateau_periods: Vec::new(),
            interventions: Vec::new(),
            risk_history: Vec::new(),
            requires_human_review: false,
            created_at: now,
            updated_at: now,
            version: 0,
        })
    }

    /// Records that still participate in statistics.
    pub fn included_evidence(&self) -> impl Iterator<Item = &TaskEvidence> {
        self.task_evidence.iter().filter(|e| e.counts_toward_stats())
    }

    pub fn evidence_count(&self) -> usize {
        self.task_evidence.len()
    }

    pub fn included_count(&self) -> usize {
        self.included_evidence().count()
    }

    pub fn excluded_count(&self) -> usize {
        self.evidence_count() - self.included_count()
    }

    pub fn is_mastered(&self) -> bool {
        self.state.is_terminal()
    }

    /// The currently open plateau period, if any.
    pub fn open_plateau(&self) -> Option<&PlateauPeriod> {
        self.plateau_periods.iter().rev().find(|p| p.is_open())
    }

    pub fn open_plateau_mut(&mut self) -> Option<&mut PlateauPeriod> {
        self.plateau_periods.iter_mut().rev().find(|p| p.is_open())
    }

    /// When the given level was first reached, if it has been.
    pub fn achieved_at(&self, level: CcisLevel) -> Option<DateTime<Utc>> {
        self.level_achievements.get(&level.ordinal()).copied()
    }

    /// Stamp a mutation: bump the version and refresh `updated_at`.
    pub fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now();
    }
}
