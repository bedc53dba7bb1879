//! Plateau interventions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Kind of intervention applied to break a plateau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InterventionType {
    /// Raise or lower the active scaffolding level.
    ScaffoldingAdjustment,
    /// Switch the practice strategy or task format.
    StrategyVariation,
    /// Pair the learner with a peer.
    PeerCollaboration,
    /// Re-balance task difficulty against current performance.
    DifficultyRebalance,
    /// Escalate to a human mentor for review.
    MentorReview,
}

impl InterventionType {
    pub fn variant_name(self) -> &'static str {
        match self {
            Self::ScaffoldingAdjustment => "scaffolding_adjustment",
            Self::StrategyVariation => "strategy_variation",
            Self::PeerCollaboration => "peer_collaboration",
            Self::DifficultyRebalance => "difficulty_rebalance",
            Self::MentorReview => "mentor_review",
        }
    }
}

impl fmt::Display for InterventionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.variant_name())
    }
}

/// One intervention recorded against an assessment.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterventionRecord {
    pub intervention: InterventionType,
    pub applied_at: DateTime<Utc>,
    /// Free-form context supplied by the host (who applied it, what
    /// changed).
    #[ts(optional)]
    pub notes: Option<String>,
}

impl InterventionRecord {
    pub fn new(intervention: InterventionType, notes: Option<String>) -> Self {
        Self {
            intervention,
            applied_at: Utc::now(),
            notes,
        }
    }
}
