//! Certification evidence packages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::assessment::CcisLevel;

/// One evidence record selected to support a certification claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvidenceHighlight {
    pub evidence_id: String,
    pub performance: f64,
    pub confidence: f64,
    pub signal_strength: f64,
    pub recorded_at: DateTime<Utc>,
}

/// Evidence package generated when an assessment certifies at a level.
///
/// A package is a point-in-time export for the credentialing system:
/// once generated it is never amended. A fresh package is generated
/// instead if the underlying assessment moves on.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CertificationPackage {
    pub assessment_id: String,
    pub person_id: String,
    pub competency_id: String,
    pub level: CcisLevel,
    pub generated_at: DateTime<Utc>,
    /// Days between the oldest and newest included evidence.
    pub assessment_period_days: f64,
    /// Included records backing the claim.
    pub evidence_count: usize,
    pub average_performance: f64,
    pub average_confidence: f64,
    /// Average performance inside the sustained-performance window.
    pub recent_window_performance: f64,
    /// Strongest records by performance, best first.
    pub top_evidence: Vec<EvidenceHighlight>,
    /// Human-readable narrative of why the criteria hold.
    pub justification: String,
}
