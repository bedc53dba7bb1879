//! Gaming-risk evaluation results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Suspect interaction pattern recognized by the gaming detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GamingPattern {
    /// Completion times below the plausible human floor.
    RapidGuessing,
    /// Completion times far outside the learner's own distribution.
    ResponseTimeOutlier,
    /// Excessive answer switching before submission.
    AnswerChurn,
    /// Completion times too regular to be organic.
    UniformTiming,
}

impl GamingPattern {
    pub fn variant_name(self) -> &'static str {
        match self {
            Self::RapidGuessing => "rapid_guessing",
            Self::ResponseTimeOutlier => "response_time_outlier",
            Self::AnswerChurn => "answer_churn",
            Self::UniformTiming => "uniform_timing",
        }
    }
}

impl fmt::Display for GamingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.variant_name())
    }
}

/// One pattern hit, with detector-specific severity and context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatternFlag {
    pub pattern: GamingPattern,
    /// How strongly the detector fired, on [0, 1].
    pub severity: f64,
    pub detail: String,
}

impl PatternFlag {
    pub fn new(pattern: GamingPattern, severity: f64, detail: impl Into<String>) -> Self {
        Self {
            pattern,
            severity: severity.clamp(0.0, 1.0),
            detail: detail.into(),
        }
    }
}

/// Outcome of one gaming-risk evaluation over a batch of evidence.
///
/// Risk is advisory data, never an error: a high-risk result feeds the
/// progression engine, which excludes the covered records from
/// statistics and flags the assessment for human review. The result is
/// kept in the assessment's risk history either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GamingRiskResult {
    /// Combined risk on [0, 1].
    pub risk_score: f64,
    pub flagged: Vec<PatternFlag>,
    /// How much data backed this evaluation, on [0, 1]. Zero means the
    /// evaluation could not run and the score is a default.
    pub detection_confidence: f64,
    /// Ids of the evidence records this evaluation covered.
    pub evidence_ids: Vec<String>,
    pub evaluated_at: DateTime<Utc>,
}

impl GamingRiskResult {
    /// Risk at or above this threshold triggers statistical exclusion
    /// and human review.
    pub const HIGH_RISK_THRESHOLD: f64 = 0.7;

    /// Conservative default when the assessor is unavailable or the
    /// batch is too small: unknown risk, zero confidence, no flags.
    pub fn unknown(evidence_ids: Vec<String>) -> Self {
        Self {
            risk_score: 0.0,
            flagged: Vec::new(),
            detection_confidence: 0.0,
            evidence_ids,
            evaluated_at: Utc::now(),
        }
    }

    pub fn is_high_risk(&self) -> bool {
        self.risk_score >= Self::HIGH_RISK_THRESHOLD
    }

    /// Whether this result carries any real signal.
    pub fn is_unknown(&self) -> bool {
        self.detection_confidence == 0.0 && self.flagged.is_empty()
    }

    pub fn has_pattern(&self, pattern: GamingPattern) -> bool {
        self.flagged.iter().any(|f| f.pattern == pattern)
    }
}
