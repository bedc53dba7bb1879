//! Read-only assessment projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::assessment::{CcisLevel, ProgressionState};
use crate::models::TrendDirection;

/// Flat snapshot of an assessment for dashboards and APIs.
///
/// Built by the progression engine; never fed back in. Hosts that need
/// the full ledger load the aggregate through the store instead.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSummary {
    pub assessment_id: String,
    pub person_id: String,
    pub competency_id: String,
    pub current_level: CcisLevel,
    pub target_level: CcisLevel,
    pub state: ProgressionState,
    pub progress_percentage: f64,
    pub trend: TrendDirection,
    pub plateau_risk: f64,
    /// Advancement criteria currently satisfied.
    pub can_advance: bool,
    /// Certification criteria currently satisfied.
    pub certification_ready: bool,
    pub requires_human_review: bool,
    pub evidence_count: usize,
    pub excluded_evidence_count: usize,
    pub completeness: f64,
    pub updated_at: DateTime<Utc>,
}
