use ccis_core::assessment::{BehavioralSignalSet, EvidenceSubmission, TaskEvidence};
use ccis_core::config::GamingConfig;
use ccis_core::models::GamingPattern;
use ccis_gaming::GamingRiskAssessor;
use proptest::prelude::*;

fn make_batch(pairs: Vec<(u64, u32)>) -> Vec<TaskEvidence> {
    pairs
        .into_iter()
        .map(|(completion_time_ms, answer_changes)| {
            let submission = EvidenceSubmission {
                performance: 0.7,
                signals: BehavioralSignalSet::uniform(0.6).unwrap(),
                confidence: 0.6,
                completion_time_ms,
                scaffolding_level: 1,
                answer_changes,
                recorded_at: None,
            };
            TaskEvidence::from_submission(&submission, 1.0).unwrap()
        })
        .collect()
}

fn arb_any_batch() -> impl Strategy<Value = Vec<(u64, u32)>> {
    prop::collection::vec((100u64..180_000, 0u32..20), 0..30)
}

proptest! {
    #[test]
    fn risk_and_confidence_stay_in_range(pairs in arb_any_batch()) {
        let result = GamingRiskAssessor::default().assess(&make_batch(pairs));
        prop_assert!((0.0..=1.0).contains(&result.risk_score));
        prop_assert!((0.0..=1.0).contains(&result.detection_confidence));
        for flag in &result.flagged {
            prop_assert!((0.0..=1.0).contains(&flag.severity));
        }
    }

    #[test]
    fn human_paced_low_churn_batches_never_trip_absolute_detectors(
        pairs in prop::collection::vec((20_000u64..90_000, 0u32..4), 1..25),
    ) {
        let result = GamingRiskAssessor::default().assess(&make_batch(pairs));
        prop_assert!(!result.has_pattern(GamingPattern::RapidGuessing));
        prop_assert!(!result.has_pattern(GamingPattern::AnswerChurn));
    }

    #[test]
    fn all_rapid_batches_always_clear_the_threshold(
        times in prop::collection::vec(100u64..1_999, 1..20),
    ) {
        let config = GamingConfig::default();
        let pairs: Vec<(u64, u32)> = times.into_iter().map(|t| (t, 0)).collect();
        let result = GamingRiskAssessor::default().assess(&make_batch(pairs));
        prop_assert!(result.risk_score >= config.high_risk_threshold);
    }

    #[test]
    fn every_result_covers_exactly_its_batch(pairs in arb_any_batch()) {
        let batch = make_batch(pairs);
        let result = GamingRiskAssessor::default().assess(&batch);
        prop_assert_eq!(result.evidence_ids.len(), batch.len());
        prop_assert_eq!(result.is_unknown(), batch.is_empty());
    }
}
