use ccis_certification::{build_package, CertificationChecker};
use ccis_core::assessment::{
    BehavioralSignalSet, CcisLevel, CompetencyAssessment, EvidenceSubmission, TaskEvidence,
};
use ccis_core::models::{CompetencyId, PersonId};
use ccis_ledger::LedgerCalculator;
use chrono::{Duration, Utc};
use proptest::prelude::*;

fn build_assessment(level: CcisLevel, performances: Vec<f64>) -> CompetencyAssessment {
    let now = Utc::now();
    let mut assessment = CompetencyAssessment::with_starting_level(
        PersonId::from("p-prop"),
        CompetencyId::from("c-prop"),
        level,
        CcisLevel::Autonomous,
    )
    .unwrap();

    let calculator = LedgerCalculator::default();
    let count = performances.len();
    for (i, performance) in performances.into_iter().enumerate() {
        let submission = EvidenceSubmission {
            performance,
            signals: BehavioralSignalSet::uniform(0.8).unwrap(),
            confidence: 0.92,
            completion_time_ms: 35_000,
            scaffolding_level: 0,
            answer_changes: 0,
            recorded_at: Some(now - Duration::hours((count - i) as i64 * 30)),
        };
        let record =
            TaskEvidence::from_submission(&submission, calculator.next_weight(i)).unwrap();
        assessment.task_evidence.push(record);
    }
    assessment.statistics = calculator.recompute(&assessment.task_evidence, now);
    assessment
}

fn arb_performances() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.80f64..0.99, 15..35)
}

fn arb_sub_certification_level() -> impl Strategy<Value = CcisLevel> {
    prop_oneof![Just(CcisLevel::Dependent), Just(CcisLevel::Guided)]
}

proptest! {
    #[test]
    fn below_minimum_level_never_certifies(
        level in arb_sub_certification_level(),
        performances in arb_performances(),
    ) {
        let assessment = build_assessment(level, performances);
        let checker = CertificationChecker::default();
        prop_assert!(build_package(&checker, &assessment, Utc::now()).is_err());
    }

    #[test]
    fn package_success_matches_readiness(performances in arb_performances()) {
        let assessment = build_assessment(CcisLevel::SelfDirected, performances);
        let checker = CertificationChecker::default();
        let now = Utc::now();
        let ready = checker.is_ready(&assessment, now);
        prop_assert_eq!(build_package(&checker, &assessment, now).is_ok(), ready);
    }

    #[test]
    fn packages_honor_their_shape(performances in arb_performances()) {
        let assessment = build_assessment(CcisLevel::SelfDirected, performances);
        let checker = CertificationChecker::default();
        if let Ok(package) = build_package(&checker, &assessment, Utc::now()) {
            prop_assert!(package.top_evidence.len() <= checker.config().top_evidence_count);
            prop_assert_eq!(package.evidence_count, assessment.included_count());
            for pair in package.top_evidence.windows(2) {
                prop_assert!(pair[0].performance >= pair[1].performance);
            }
            let ledger_ids: Vec<&str> =
                assessment.task_evidence.iter().map(|e| e.id.as_str()).collect();
            for highlight in &package.top_evidence {
                prop_assert!(ledger_ids.contains(&highlight.evidence_id.as_str()));
            }
        }
    }
}
