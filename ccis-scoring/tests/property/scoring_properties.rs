use ccis_core::assessment::{BehavioralSignalSet, CcisLevel};
use ccis_core::traits::IScorer;
use ccis_scoring::{BehavioralScorer, LevelClassifier};
use proptest::prelude::*;

fn make_signals(values: [f64; 7]) -> BehavioralSignalSet {
    BehavioralSignalSet {
        hint_request_frequency: values[0],
        error_recovery_speed: values[1],
        transfer_success_rate: values[2],
        metacognitive_accuracy: values[3],
        task_completion_efficiency: values[4],
        help_seeking_quality: values[5],
        self_assessment_alignment: values[6],
    }
}

fn arb_signals() -> impl Strategy<Value = BehavioralSignalSet> {
    [
        0.0..=1.0,
        0.0..=1.0,
        0.0..=1.0,
        0.0..=1.0,
        0.0..=1.0,
        0.0..=1.0,
        0.0..=1.0,
    ]
    .prop_map(make_signals)
}

fn arb_level() -> impl Strategy<Value = CcisLevel> {
    prop_oneof![
        Just(CcisLevel::Dependent),
        Just(CcisLevel::Guided),
        Just(CcisLevel::SelfDirected),
        Just(CcisLevel::Autonomous),
    ]
}

proptest! {
    #[test]
    fn score_stays_on_unit_interval(signals in arb_signals()) {
        let scorer = BehavioralScorer::default();
        let score = scorer.score(&signals).unwrap();
        prop_assert!((0.0..=1.0).contains(&score.value()));
    }

    #[test]
    fn raising_a_signal_never_lowers_the_score(
        signals in arb_signals(),
        index in 0usize..7,
        bump in 0.0..=1.0f64,
    ) {
        let scorer = BehavioralScorer::default();
        let base = scorer.score(&signals).unwrap();

        let mut values = signals.as_array();
        values[index] = (values[index] + bump).min(1.0);
        let raised = scorer.score(&make_signals(values)).unwrap();

        prop_assert!(raised.value() + 1e-12 >= base.value());
    }

    #[test]
    fn every_valid_percentage_classifies(percentage in 0.0..=100.0f64) {
        let placement = LevelClassifier::new().classify(percentage).unwrap();
        prop_assert_eq!(placement.percentage(), percentage);
        prop_assert!(placement.level().contains(percentage));
    }

    #[test]
    fn band_positions_stay_inside_their_band(
        level in arb_level(),
        fraction in 0.0..=1.0f64,
    ) {
        let placement = LevelClassifier::new().band_position(level, fraction);
        prop_assert_eq!(placement.level(), level);
        let (floor, ceiling) = level.band();
        prop_assert!(placement.percentage() >= floor);
        prop_assert!(placement.percentage() <= ceiling);
    }

    #[test]
    fn band_position_is_monotonic_in_the_fraction(
        level in arb_level(),
        a in 0.0..=1.0f64,
        b in 0.0..=1.0f64,
    ) {
        let classifier = LevelClassifier::new();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let low = classifier.band_position(level, lo);
        let high = classifier.band_position(level, hi);
        prop_assert!(low.percentage() <= high.percentage());
    }
}
