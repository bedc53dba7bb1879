//! Derived models: read projections, statistics, risk results, and
//! identity newtypes shared across the workspace.

pub mod assessment_summary;
pub mod certification_package;
pub mod criteria;
pub mod data_quality;
pub mod gaming_risk;
pub mod identity;
pub mod ledger_statistics;

pub use assessment_summary::AssessmentSummary;
pub use certification_package::{CertificationPackage, EvidenceHighlight};
pub use criteria::{
    AdvancementCheck, AdvancementCriterion, AdvancementCriterionCheck, CertificationCriterion,
    CertificationCriterionCheck, ReadinessCheck,
};
pub use data_quality::{DataQualityKind, DataQualityWarning};
pub use gaming_risk::{GamingPattern, GamingRiskResult, PatternFlag};
pub use identity::{CompetencyId, PersonId};
pub use ledger_statistics::{LedgerStatistics, TrendDirection};
