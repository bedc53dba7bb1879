use ccis_core::assessment::{
    BehavioralSignalSet, CcisLevel, CompetencyAssessment, EvidenceSubmission, InterventionType,
};
use ccis_core::config::CcisConfig;
use ccis_core::models::{CompetencyId, GamingPattern, GamingRiskResult, PatternFlag, PersonId};
use ccis_progression::ProgressionEngine;
use chrono::{Duration, Utc};
use proptest::prelude::*;

fn fresh_assessment() -> CompetencyAssessment {
    CompetencyAssessment::new(
        PersonId::from("p-prop"),
        CompetencyId::from("synthesis"),
        CcisLevel::Autonomous,
    )
    .unwrap()
}

fn submission(performance: f64, confidence: f64, signal: f64, days_back: i64) -> EvidenceSubmission {
    EvidenceSubmission {
        performance,
        signals: BehavioralSignalSet::uniform(signal).unwrap(),
        confidence,
        completion_time_ms: 30_000,
        scaffolding_level: 1,
        answer_changes: 1,
        recorded_at: Some(Utc::now() - Duration::days(days_back)),
    }
}

fn arb_submission() -> impl Strategy<Value = EvidenceSubmission> {
    (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0, 0i64..30)
        .prop_map(|(p, c, s, d)| submission(p, c, s, d))
}

/// Submissions whose performance barely moves, the shape that drives
/// plateau detection.
fn arb_flat_submission() -> impl Strategy<Value = EvidenceSubmission> {
    (0.68f64..=0.72, 0i64..20).prop_map(|(p, d)| submission(p, 0.7, 0.6, d))
}

proptest! {
    #[test]
    fn level_is_monotone_and_percentage_stays_banded(
        stream in prop::collection::vec(arb_submission(), 1..40),
    ) {
        let engine = ProgressionEngine::new(CcisConfig::default());
        let mut assessment = fresh_assessment();
        let mut highest = assessment.current_level;

        for submission in &stream {
            if assessment.is_mastered() {
                break;
            }
            engine.add_task_evidence(&mut assessment, submission).unwrap();
            while engine.can_advance_level(&assessment) {
                engine.advance_to_next_level(&mut assessment).unwrap();
            }
            prop_assert!(assessment.current_level >= highest);
            highest = assessment.current_level;
            prop_assert!(
                assessment.current_level.contains(assessment.progress_percentage),
                "percentage {} escaped the {} band",
                assessment.progress_percentage,
                assessment.current_level
            );
        }
    }

    #[test]
    fn refused_advances_leave_the_aggregate_alone(
        stream in prop::collection::vec(arb_submission(), 1..25),
    ) {
        let engine = ProgressionEngine::new(CcisConfig::default());
        let mut assessment = fresh_assessment();
        for submission in &stream {
            engine.add_task_evidence(&mut assessment, submission).unwrap();
        }

        if !engine.can_advance_level(&assessment) {
            let level = assessment.current_level;
            let state = assessment.state;
            let version = assessment.version;

            prop_assert!(engine.advance_to_next_level(&mut assessment).is_err());
            prop_assert_eq!(assessment.current_level, level);
            prop_assert_eq!(assessment.state, state);
            prop_assert_eq!(assessment.version, version);
        }
    }

    #[test]
    fn at_most_one_plateau_period_is_ever_open(
        stream in prop::collection::vec(arb_flat_submission(), 5..35),
        followup in prop::collection::vec(arb_flat_submission(), 1..5),
    ) {
        let engine = ProgressionEngine::new(CcisConfig::default());
        let mut assessment = fresh_assessment();

        for submission in &stream {
            engine.add_task_evidence(&mut assessment, submission).unwrap();
            let open = assessment.plateau_periods.iter().filter(|p| p.is_open()).count();
            prop_assert!(open <= 1);
        }

        if assessment.open_plateau().is_some() {
            engine
                .apply_intervention(
                    &mut assessment,
                    InterventionType::StrategyVariation,
                    None,
                )
                .unwrap();
            prop_assert!(assessment.open_plateau().is_none());
        }

        for submission in &followup {
            engine.add_task_evidence(&mut assessment, submission).unwrap();
            let open = assessment.plateau_periods.iter().filter(|p| p.is_open()).count();
            prop_assert!(open <= 1);
        }
        for period in &assessment.plateau_periods {
            if let Some(ended) = period.ended_at {
                prop_assert!(ended >= period.started_at);
            }
        }
    }

    #[test]
    fn exclusions_survive_all_later_activity(
        stream in prop::collection::vec(arb_submission(), 6..20),
        followup in prop::collection::vec(arb_submission(), 1..6),
    ) {
        let engine = ProgressionEngine::new(CcisConfig::default());
        let mut assessment = fresh_assessment();
        for submission in &stream {
            engine.add_task_evidence(&mut assessment, submission).unwrap();
        }

        let suspect_ids: Vec<String> = assessment.task_evidence[..3]
            .iter()
            .map(|e| e.id.clone())
            .collect();
        let result = GamingRiskResult {
            risk_score: 0.9,
            flagged: vec![PatternFlag::new(GamingPattern::RapidGuessing, 0.9, "prop")],
            detection_confidence: 1.0,
            evidence_ids: suspect_ids.clone(),
            evaluated_at: Utc::now(),
        };
        engine.apply_risk_result(&mut assessment, result).unwrap();

        for submission in &followup {
            engine.add_task_evidence(&mut assessment, submission).unwrap();
        }
        engine.update_progress(&mut assessment).unwrap();

        for record in assessment
            .task_evidence
            .iter()
            .filter(|e| suspect_ids.contains(&e.id))
        {
            prop_assert!(record.stats_excluded);
        }
        prop_assert!(assessment.requires_human_review);
        prop_assert!(assessment.evidence_count() >= stream.len());
    }
}
