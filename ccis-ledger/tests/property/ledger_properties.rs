use ccis_core::assessment::{BehavioralSignalSet, Score, TaskEvidence};
use ccis_core::config::PlateauConfig;
use ccis_ledger::{insertion_weight, plateau_risk, slope, LedgerCalculator};
use chrono::{Duration, Utc};
use proptest::prelude::*;

fn make_ledger(performances: Vec<f64>, excluded: Vec<bool>) -> Vec<TaskEvidence> {
    let calculator = LedgerCalculator::default();
    let start = Utc::now() - Duration::days(performances.len() as i64);
    performances
        .into_iter()
        .enumerate()
        .map(|(i, p)| TaskEvidence {
            id: uuid::Uuid::new_v4().to_string(),
            performance: Score::saturating(p),
            signals: BehavioralSignalSet::uniform(0.5).unwrap(),
            confidence: Score::saturating(0.7),
            completion_time_ms: 30_000,
            scaffolding_level: 0,
            answer_changes: 0,
            weight: calculator.next_weight(i),
            recorded_at: start + Duration::days(i as i64),
            stats_excluded: excluded.get(i).copied().unwrap_or(false),
            risk_score: None,
        })
        .collect()
}

fn arb_performances() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..=1.0, 0..40)
}

proptest! {
    #[test]
    fn statistics_stay_in_range(performances in arb_performances()) {
        let ledger = make_ledger(performances, vec![]);
        let stats = LedgerCalculator::default().recompute(&ledger, Utc::now());
        prop_assert!((0.0..=1.0).contains(&stats.weighted_average_performance));
        prop_assert!((0.0..=1.0).contains(&stats.average_confidence));
        prop_assert!((0.0..=1.0).contains(&stats.plateau_risk));
        prop_assert!((0.0..=1.0).contains(&stats.completeness));
        prop_assert!(stats.performance_variance >= 0.0);
    }

    #[test]
    fn weighted_average_is_bounded_by_included_extremes(
        performances in prop::collection::vec(0.0f64..=1.0, 1..40),
    ) {
        let ledger = make_ledger(performances.clone(), vec![]);
        let stats = LedgerCalculator::default().recompute(&ledger, Utc::now());
        let min = performances.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = performances.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(stats.weighted_average_performance >= min - 1e-9);
        prop_assert!(stats.weighted_average_performance <= max + 1e-9);
    }

    #[test]
    fn completeness_matches_inclusion_share(
        excluded in prop::collection::vec(any::<bool>(), 1..40),
    ) {
        let performances = vec![0.6; excluded.len()];
        let ledger = make_ledger(performances, excluded.clone());
        let stats = LedgerCalculator::default().recompute(&ledger, Utc::now());
        let included = excluded.iter().filter(|&&e| !e).count();
        let expected = included as f64 / excluded.len() as f64;
        prop_assert!((stats.completeness - expected).abs() < 1e-12);
        prop_assert_eq!(stats.included_count, included);
        prop_assert_eq!(stats.excluded_count, excluded.len() - included);
    }

    #[test]
    fn risk_crosses_threshold_exactly_when_plateaued(
        included_count in 0usize..60,
        variance in 0.0f64..0.05,
        improvement in -0.05f64..0.05,
    ) {
        let config = PlateauConfig::default();
        let risk = plateau_risk(included_count, variance, improvement, &config);
        let plateaued = included_count >= config.min_evidence
            && variance < config.variance_threshold
            && improvement < config.improvement_threshold;
        if plateaued {
            prop_assert!(risk >= config.risk_threshold, "risk = {risk}");
        } else {
            prop_assert!(risk < config.risk_threshold, "risk = {risk}");
        }
        prop_assert!((0.0..=1.0).contains(&risk));
    }

    #[test]
    fn insertion_weights_decay_monotonically(
        rate in 0.01f64..1.0,
        position in 0usize..200,
    ) {
        let here = insertion_weight(rate, position);
        let next = insertion_weight(rate, position + 1);
        prop_assert!(here > next);
        prop_assert!(here <= 1.0 && here > 0.0);
    }

    #[test]
    fn slope_of_constant_series_is_zero(
        value in 0.0f64..=1.0,
        len in 2usize..20,
    ) {
        let series = vec![value; len];
        prop_assert!(slope(&series).abs() < 1e-12);
    }

    #[test]
    fn slope_sign_tracks_direction(step in 0.001f64..0.1, len in 2usize..15) {
        let rising: Vec<f64> = (0..len).map(|i| i as f64 * step).collect();
        let falling: Vec<f64> = rising.iter().rev().cloned().collect();
        prop_assert!(slope(&rising) > 0.0);
        prop_assert!(slope(&falling) < 0.0);
    }
}
