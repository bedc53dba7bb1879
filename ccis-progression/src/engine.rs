//! The progression engine: every aggregate mutation lives here.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use ccis_certification::{build_package, CertificationChecker};
use ccis_core::assessment::{
    CompetencyAssessment, EvidenceSubmission, InterventionRecord, InterventionType,
    LevelPlacement, PlateauPeriod, ProgressionState, TaskEvidence,
};
use ccis_core::config::CcisConfig;
use ccis_core::errors::{CcisResult, ProgressionError};
use ccis_core::models::{
    AdvancementCheck, AssessmentSummary, CertificationPackage, GamingRiskResult, ReadinessCheck,
    TrendDirection,
};
use ccis_ledger::LedgerCalculator;

use crate::advancement;
use crate::transition::{evaluate_transition, TransitionSignals};

/// Plateau length that escalates straight to a mentor.
const LONG_PLATEAU_DAYS: f64 = 14.0;
/// Average scaffolding at or above this suggests adjusting support.
const HEAVY_SCAFFOLDING_LEVEL: f64 = 3.0;
/// Average signal strength below this suggests collaborative work.
const WEAK_SIGNAL_STRENGTH: f64 = 0.4;

/// Synchronous, in-memory progression engine.
///
/// Holds configuration and the derived calculators, never the
/// assessments themselves: every operation takes the aggregate by
/// reference, so hosts choose where aggregates live (the
/// [`crate::AssessmentRegistry`], a database row, a test fixture).
///
/// Mutations follow one discipline: validate against the current state
/// first, then apply every change and bump the version. An `Err` from
/// any method means the aggregate was not touched.
pub struct ProgressionEngine {
    config: CcisConfig,
    calculator: LedgerCalculator,
    checker: CertificationChecker,
}

impl ProgressionEngine {
    pub fn new(config: CcisConfig) -> Self {
        let calculator = LedgerCalculator::new(config.ledger.clone(), config.plateau.clone());
        let checker = CertificationChecker::new(config.certification.clone());
        Self {
            config,
            calculator,
            checker,
        }
    }

    pub fn config(&self) -> &CcisConfig {
        &self.config
    }

    /// Validate one submission, append it to the ledger, and refresh
    /// the aggregate.
    ///
    /// Mastered assessments reject new evidence; their ledger is frozen
    /// except for risk audits.
    #[instrument(skip(self, assessment, submission), fields(assessment = %assessment.id))]
    pub fn add_task_evidence(
        &self,
        assessment: &mut CompetencyAssessment,
        submission: &EvidenceSubmission,
    ) -> CcisResult<()> {
        if assessment.is_mastered() {
            return Err(ProgressionError::EvidenceOnMastered {
                assessment_id: assessment.id.clone(),
            }
            .into());
        }

        let weight = self.calculator.next_weight(assessment.evidence_count());
        let record = TaskEvidence::from_submission(submission, weight)?;
        debug!(
            evidence = %record.id,
            performance = record.performance.value(),
            "evidence accepted"
        );
        assessment.task_evidence.push(record);
        self.refresh(assessment, Utc::now());
        Ok(())
    }

    /// Recompute statistics, progress percentage, plateau periods, and
    /// lifecycle state from the current ledger. Safe to call at any
    /// time; the result depends only on the ledger and the clock.
    #[instrument(skip(self, assessment), fields(assessment = %assessment.id))]
    pub fn update_progress(&self, assessment: &mut CompetencyAssessment) -> CcisResult<()> {
        self.refresh(assessment, Utc::now());
        Ok(())
    }

    /// Whether every advancement criterion for the current level holds.
    pub fn can_advance_level(&self, assessment: &CompetencyAssessment) -> bool {
        advancement::satisfied(assessment, &self.config.advancement)
    }

    /// Per-criterion advancement detail. `None` at the top level.
    pub fn advancement_check(&self, assessment: &CompetencyAssessment) -> Option<AdvancementCheck> {
        advancement::evaluate(assessment, &self.config.advancement)
    }

    /// Move the assessment up exactly one level.
    ///
    /// Criteria are re-checked here regardless of what any earlier call
    /// reported; on failure the aggregate is untouched and the error
    /// names every failed criterion. Success stamps the achievement
    /// time, re-bands the progress percentage, closes any open plateau
    /// period, and escalates the state when the new level warrants it.
    #[instrument(skip(self, assessment), fields(assessment = %assessment.id, from = %assessment.current_level))]
    pub fn advance_to_next_level(&self, assessment: &mut CompetencyAssessment) -> CcisResult<()> {
        let Some(check) = self.advancement_check(assessment) else {
            return Err(ProgressionError::CriteriaNotMet {
                level: assessment.current_level.ordinal(),
                failed: "already at the top of the scale".to_string(),
            }
            .into());
        };
        if !check.satisfied() {
            return Err(ProgressionError::CriteriaNotMet {
                level: assessment.current_level.ordinal(),
                failed: check.failed_summary(),
            }
            .into());
        }

        let now = Utc::now();
        let next_level = check.to_level;
        assessment.current_level = next_level;
        assessment
            .level_achievements
            .entry(next_level.ordinal())
            .or_insert(now);
        if let Some(period) = assessment.open_plateau_mut() {
            period.close(now);
        }
        let placement = LevelPlacement::at_band_fraction(
            next_level,
            assessment.statistics.weighted_average_performance,
        );
        assessment.progress_percentage = placement.percentage();

        assessment.state = if next_level.is_top() {
            ProgressionState::Mastered
        } else if self.checker.is_ready(assessment, now) {
            ProgressionState::CertificationReady
        } else {
            ProgressionState::LevelAchieved
        };
        assessment.touch();
        info!(to = %next_level, state = %assessment.state, "level advanced");
        Ok(())
    }

    /// Whether the full certification gate passes right now.
    pub fn is_certification_ready(&self, assessment: &CompetencyAssessment) -> bool {
        self.checker.is_ready(assessment, Utc::now())
    }

    /// Per-criterion certification detail.
    pub fn readiness_check(&self, assessment: &CompetencyAssessment) -> ReadinessCheck {
        self.checker.readiness_check(assessment, Utc::now())
    }

    /// Build the immutable certification evidence package.
    pub fn generate_certification_evidence(
        &self,
        assessment: &CompetencyAssessment,
    ) -> CcisResult<CertificationPackage> {
        Ok(build_package(&self.checker, assessment, Utc::now())?)
    }

    /// Resolve the open plateau period with an intervention and return
    /// the assessment to `InProgress`.
    ///
    /// The statistics are left alone: if the ledger still reads flat on
    /// the next refresh, a new plateau period opens. Fails with
    /// `NoOpenPlateau` when there is nothing to intervene on.
    #[instrument(skip(self, assessment, notes), fields(assessment = %assessment.id, intervention = %intervention))]
    pub fn apply_intervention(
        &self,
        assessment: &mut CompetencyAssessment,
        intervention: InterventionType,
        notes: Option<String>,
    ) -> CcisResult<()> {
        let now = Utc::now();
        match assessment.open_plateau_mut() {
            Some(period) => period.resolve(intervention, now),
            None => {
                return Err(ProgressionError::NoOpenPlateau {
                    assessment_id: assessment.id.clone(),
                }
                .into())
            }
        }
        assessment
            .interventions
            .push(InterventionRecord::new(intervention, notes));
        assessment.state = ProgressionState::InProgress;
        assessment.touch();
        info!("plateau resolved by intervention");
        Ok(())
    }

    /// Suggest an intervention for the open plateau, if any.
    ///
    /// Priority order: long plateaus escalate to a mentor; heavy
    /// scaffolding suggests adjusting support; a declining trend
    /// suggests rebalancing difficulty; weak behavioral signals suggest
    /// peer work; otherwise vary the strategy.
    pub fn recommend_intervention(
        &self,
        assessment: &CompetencyAssessment,
    ) -> Option<InterventionType> {
        let plateau = assessment.open_plateau()?;
        if plateau.duration_days(Utc::now()) >= LONG_PLATEAU_DAYS {
            return Some(InterventionType::MentorReview);
        }
        if average_scaffolding(assessment) >= HEAVY_SCAFFOLDING_LEVEL {
            return Some(InterventionType::ScaffoldingAdjustment);
        }
        if assessment.statistics.trend == TrendDirection::Declining {
            return Some(InterventionType::DifficultyRebalance);
        }
        if assessment.statistics.average_signal_strength < WEAK_SIGNAL_STRENGTH {
            return Some(InterventionType::PeerCollaboration);
        }
        Some(InterventionType::StrategyVariation)
    }

    /// Fold a gaming evaluation into the aggregate.
    ///
    /// The result lands in the risk history either way. At or above the
    /// configured high-risk threshold the covered records are excluded
    /// from statistics (the records themselves stay in the ledger) and
    /// the assessment is flagged for human review; exclusion is never
    /// undone by a later, cleaner evaluation, and the review flag is
    /// cleared only by the host. Allowed on mastered assessments, where
    /// it can exclude evidence but never moves the level.
    #[instrument(skip(self, assessment, result), fields(assessment = %assessment.id, risk = result.risk_score))]
    pub fn apply_risk_result(
        &self,
        assessment: &mut CompetencyAssessment,
        result: GamingRiskResult,
    ) -> CcisResult<()> {
        let high_risk = result.risk_score >= self.config.gaming.high_risk_threshold;
        let carries_signal = !result.is_unknown();

        if carries_signal {
            let covered: HashSet<&str> = result.evidence_ids.iter().map(String::as_str).collect();
            let mut excluded = 0usize;
            for record in assessment
                .task_evidence
                .iter_mut()
                .filter(|r| covered.contains(r.id.as_str()))
            {
                record.risk_score = Some(result.risk_score);
                if high_risk && !record.stats_excluded {
                    record.stats_excluded = true;
                    excluded += 1;
                }
            }
            if high_risk {
                assessment.requires_human_review = true;
                warn!(
                    excluded,
                    patterns = result.flagged.len(),
                    "high-risk evaluation excluded evidence and flagged review"
                );
            }
        }

        assessment.risk_history.push(result);
        self.refresh(assessment, Utc::now());
        Ok(())
    }

    /// Flat snapshot for dashboards and APIs.
    pub fn assessment_summary(&self, assessment: &CompetencyAssessment) -> AssessmentSummary {
        AssessmentSummary {
            assessment_id: assessment.id.clone(),
            person_id: assessment.person_id.0.clone(),
            competency_id: assessment.competency_id.0.clone(),
            current_level: assessment.current_level,
            target_level: assessment.target_level,
            state: assessment.state,
            progress_percentage: assessment.progress_percentage,
            trend: assessment.statistics.trend,
            plateau_risk: assessment.statistics.plateau_risk,
            can_advance: self.can_advance_level(assessment),
            certification_ready: self.is_certification_ready(assessment),
            requires_human_review: assessment.requires_human_review,
            evidence_count: assessment.evidence_count(),
            excluded_evidence_count: assessment.excluded_count(),
            completeness: assessment.statistics.completeness,
            updated_at: assessment.updated_at,
        }
    }

    /// Recompute derived state after a ledger change: statistics,
    /// progress percentage, plateau bookkeeping, lifecycle state, and
    /// the version stamp.
    fn refresh(&self, assessment: &mut CompetencyAssessment, now: DateTime<Utc>) {
        assessment.statistics = self.calculator.recompute(&assessment.task_evidence, now);
        let placement = LevelPlacement::at_band_fraction(
            assessment.current_level,
            assessment.statistics.weighted_average_performance,
        );
        assessment.progress_percentage = placement.percentage();

        let next_state = evaluate_transition(&self.transition_signals(assessment, now));
        self.settle_plateau(assessment, next_state, now);
        assessment.state = next_state;
        assessment.touch();
    }

    fn transition_signals(
        &self,
        assessment: &CompetencyAssessment,
        now: DateTime<Utc>,
    ) -> TransitionSignals {
        TransitionSignals {
            current_level: assessment.current_level,
            evidence_count: assessment.evidence_count(),
            plateau_risk: assessment.statistics.plateau_risk,
            plateau_threshold: self.config.plateau.risk_threshold,
            trend: assessment.statistics.trend,
            advancement_satisfied: advancement::satisfied(assessment, &self.config.advancement),
            certification_ready: self.checker.is_ready(assessment, now),
        }
    }

    /// Keep plateau periods in sync with the state decision: entering
    /// `Plateau` opens a period if none is open, leaving it closes the
    /// open period without crediting an intervention.
    fn settle_plateau(
        &self,
        assessment: &mut CompetencyAssessment,
        next: ProgressionState,
        now: DateTime<Utc>,
    ) {
        if next == ProgressionState::Plateau {
            if assessment.open_plateau().is_none() {
                let risk = assessment.statistics.plateau_risk;
                assessment
                    .plateau_periods
                    .push(PlateauPeriod::open(risk, now));
                info!(risk, "plateau period opened");
            }
        } else if let Some(period) = assessment.open_plateau_mut() {
            period.close(now);
            debug!("plateau period closed without intervention");
        }
    }
}

fn average_scaffolding(assessment: &CompetencyAssessment) -> f64 {
    let levels: Vec<f64> = assessment
        .included_evidence()
        .map(|e| f64::from(e.scaffolding_level))
        .collect();
    if levels.is_empty() {
        return 0.0;
    }
    levels.iter().sum::<f64>() / levels.len() as f64
}
