//! # ccis-core
//!
//! Foundation crate for the CCIS competency progression engine.
//!
//! Everything the other crates share lives here: the assessment domain
//! types (levels, scores, signals, evidence, progression state), the
//! derived models (ledger statistics, gaming risk, summaries,
//! certification packages), the error taxonomy, configuration, and the
//! traits that define the seams between subsystems and the host service.
//!
//! This crate contains no engine logic. Scoring, ledger statistics,
//! gaming detection, progression, and certification each live in their
//! own crate on top of these types.

pub mod assessment;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the types used by practically every caller.
pub use assessment::{
    BehavioralSignalSet, CcisLevel, CompetencyAssessment, EvidenceSubmission, InterventionRecord,
    InterventionType, LevelPlacement, PlateauPeriod, ProgressionState, Score, TaskEvidence,
};
pub use config::CcisConfig;
pub use errors::{CcisError, CcisResult, ErrorClass};
pub use models::{
    AssessmentSummary, CertificationPackage, CompetencyId, GamingRiskResult, LedgerStatistics,
    PersonId, TrendDirection,
};
