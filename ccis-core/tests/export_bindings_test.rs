//! Test that generates TypeScript bindings from Rust types via ts-rs.
//!
//! Run with: cargo test -p ccis-core export_bindings
//! Generated files appear in ccis-core/bindings/*.ts
//!
//! CI should run this and then `git diff --exit-code` to catch drift.

#[test]
fn export_bindings() {
    // ts-rs generates .ts files automatically for every type with #[ts(export)].
    // This test simply ensures all types compile with their TS derive.
    // The actual file generation happens via the #[ts(export)] attribute
    // when `cargo test` runs.

    use ccis_core::assessment::{
        BehavioralSignalSet, CcisLevel, CompetencyAssessment, EvidenceSubmission,
        InterventionRecord, InterventionType, LevelPlacement, PlateauPeriod, ProgressionState,
        Score, TaskEvidence,
    };
    use ccis_core::models::{
        AdvancementCheck, AdvancementCriterion, AdvancementCriterionCheck, AssessmentSummary,
        CertificationCriterion, CertificationCriterionCheck, CertificationPackage, CompetencyId,
        DataQualityKind, DataQualityWarning, EvidenceHighlight, GamingPattern, GamingRiskResult,
        LedgerStatistics, PatternFlag, PersonId, ReadinessCheck, TrendDirection,
    };

    let _ = std::any::type_name::<Score>();
    let _ = std::any::type_name::<CcisLevel>();
    let _ = std::any::type_name::<LevelPlacement>();
    let _ = std::any::type_name::<BehavioralSignalSet>();
    let _ = std::any::type_name::<EvidenceSubmission>();
    let _ = std::any::type_name::<TaskEvidence>();
    let _ = std::any::type_name::<ProgressionState>();
    let _ = std::any::type_name::<PlateauPeriod>();
    let _ = std::any::type_name::<InterventionType>();
    let _ = std::any::type_name::<InterventionRecord>();
    let _ = std::any::type_name::<CompetencyAssessment>();
    let _ = std::any::type_name::<PersonId>();
    let _ = std::any::type_name::<CompetencyId>();
    let _ = std::any::type_name::<LedgerStatistics>();
    let _ = std::any::type_name::<TrendDirection>();
    let _ = std::any::type_name::<DataQualityKind>();
    let _ = std::any::type_name::<DataQualityWarning>();
    let _ = std::any::type_name::<GamingPattern>();
    let _ = std::any::type_name::<PatternFlag>();
    let _ = std::any::type_name::<GamingRiskResult>();
    let _ = std::any::type_name::<AssessmentSummary>();
    let _ = std::any::type_name::<CertificationPackage>();
    let _ = std::any::type_name::<EvidenceHighlight>();
    let _ = std::any::type_name::<AdvancementCriterion>();
    let _ = std::any::type_name::<AdvancementCriterionCheck>();
    let _ = std::any::type_name::<AdvancementCheck>();
    let _ = std::any::type_name::<CertificationCriterion>();
    let _ = std::any::type_name::<CertificationCriterionCheck>();
    let _ = std::any::type_name::<ReadinessCheck>();
}
