//! Per-criterion rule evaluations for advancement and certification.
//!
//! Both rule families answer the same two questions for hosts: does the
//! whole gate pass, and if not, which criterion failed by how much. The
//! checks here are pure read models; the progression and certification
//! crates build them, and nothing about the aggregate changes when they
//! fail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::assessment::CcisLevel;

/// One requirement from the advancement rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AdvancementCriterion {
    /// Included evidence records.
    EvidenceCount,
    /// Weighted average performance.
    AveragePerformance,
    /// Average learner confidence.
    AverageConfidence,
    /// Days spanned by the included evidence.
    ConsistencyWindow,
    /// Average behavioral signal strength.
    SignalStrength,
}

impl AdvancementCriterion {
    pub fn variant_name(self) -> &'static str {
        match self {
            Self::EvidenceCount => "evidence_count",
            Self::AveragePerformance => "average_performance",
            Self::AverageConfidence => "average_confidence",
            Self::ConsistencyWindow => "consistency_window",
            Self::SignalStrength => "signal_strength",
        }
    }
}

impl fmt::Display for AdvancementCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.variant_name())
    }
}

/// One requirement from the certification readiness gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CertificationCriterion {
    /// Current level ordinal.
    MinimumLevel,
    /// Included evidence records over the whole ledger.
    EvidenceVolume,
    /// Weighted average performance over the whole ledger.
    AveragePerformance,
    /// Average learner confidence over the whole ledger.
    AverageConfidence,
    /// Included records inside the sustained-performance window.
    RecentWindowVolume,
    /// Mean performance inside the sustained-performance window.
    RecentWindowPerformance,
}

impl CertificationCriterion {
    pub fn variant_name(self) -> &'static str {
        match self {
            Self::MinimumLevel => "minimum_level",
            Self::EvidenceVolume => "evidence_volume",
            Self::AveragePerformance => "average_performance",
            Self::AverageConfidence => "average_confidence",
            Self::RecentWindowVolume => "recent_window_volume",
            Self::RecentWindowPerformance => "recent_window_performance",
        }
    }
}

impl fmt::Display for CertificationCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.variant_name())
    }
}

/// One advancement criterion measured against its rule value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdvancementCriterionCheck {
    pub criterion: AdvancementCriterion,
    pub required: f64,
    pub actual: f64,
    pub passed: bool,
}

/// Full advancement evaluation for one level step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdvancementCheck {
    pub from_level: CcisLevel,
    pub to_level: CcisLevel,
    pub criteria: Vec<AdvancementCriterionCheck>,
    pub checked_at: DateTime<Utc>,
}

impl AdvancementCheck {
    /// Whether every criterion holds.
    pub fn satisfied(&self) -> bool {
        self.criteria.iter().all(|c| c.passed)
    }

    /// Names of the failed criteria, comma separated. Empty when the
    /// check is satisfied.
    pub fn failed_summary(&self) -> String {
        self.criteria
            .iter()
            .filter(|c| !c.passed)
            .map(|c| {
                format!(
                    "{} (required {:.2}, actual {:.2})",
                    c.criterion, c.required, c.actual
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One certification criterion measured against its configured value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CertificationCriterionCheck {
    pub criterion: CertificationCriterion,
    pub required: f64,
    pub actual: f64,
    pub passed: bool,
}

/// Full certification readiness evaluation.
///
/// `blocked_by_review` gates everything: an assessment waiting on human
/// review of a gaming flag is never ready, however strong its numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReadinessCheck {
    pub criteria: Vec<CertificationCriterionCheck>,
    pub blocked_by_review: bool,
    pub checked_at: DateTime<Utc>,
}

impl ReadinessCheck {
    pub fn is_ready(&self) -> bool {
        !self.blocked_by_review && self.criteria.iter().all(|c| c.passed)
    }

    /// The first criterion that fails, in gate order.
    pub fn first_unmet(&self) -> Option<&CertificationCriterionCheck> {
        self.criteria.iter().find(|c| !c.passed)
    }

    /// Human-readable reason the gate fails, or `None` when ready.
    pub fn failure_reason(&self) -> Option<String> {
        if self.blocked_by_review {
            return Some("assessment awaits human review of a gaming flag".to_string());
        }
        self.first_unmet().map(|c| {
            format!(
                "{} below requirement (required {:.2}, actual {:.2})",
                c.criterion, c.required, c.actual
            )
        })
    }
}
