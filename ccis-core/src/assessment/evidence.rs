//! Task evidence records and their ingestion payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::assessment::{BehavioralSignalSet, Score};
use crate::constants::MAX_SCAFFOLDING_LEVEL;
use crate::errors::SignalError;

/// Payload submitted by the host for one completed task interaction.
///
/// Raw and unvalidated: the engine turns it into a [`TaskEvidence`]
/// record via [`TaskEvidence::from_submission`], which is where
/// validation happens.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvidenceSubmission {
    /// Graded outcome of the task, on [0, 1].
    pub performance: f64,
    /// Behavioral signals observed during the interaction.
    pub signals: BehavioralSignalSet,
    /// Learner's stated confidence, on [0, 1].
    pub confidence: f64,
    /// Wall-clock time spent on the task.
    pub completion_time_ms: u64,
    /// Support level active during the task, 0 (none) to 5 (maximal).
    pub scaffolding_level: u8,
    /// Number of times the learner changed their answer before submitting.
    pub answer_changes: u32,
    /// Override for bulk import of historical interactions. `None`
    /// stamps the record with the ingestion time.
    #[serde(default)]
    #[ts(optional)]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// One validated, immutable interaction record in an assessment's
/// evidence ledger.
///
/// Records are append-only. Gaming feedback may flip `stats_excluded`
/// and attach a `risk_score`, but never removes a record; the full
/// ledger stays available for audit.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaskEvidence {
    pub id: String,
    pub performance: Score,
    pub signals: BehavioralSignalSet,
    pub confidence: Score,
    pub completion_time_ms: u64,
    pub scaffolding_level: u8,
    pub answer_changes: u32,
    /// Insertion-order weight assigned at ingestion. Earlier records
    /// weigh more; see the ledger crate for the decay schedule.
    pub weight: f64,
    pub recorded_at: DateTime<Utc>,
    /// Excluded from statistics by the gaming feedback loop.
    pub stats_excluded: bool,
    /// Risk score from the most recent gaming evaluation that covered
    /// this record.
    #[ts(optional)]
    pub risk_score: Option<f64>,
}

impl TaskEvidence {
    /// Validate a submission and mint the ledger record. `weight` is the
    /// insertion-order weight computed by the ledger for this position.
    pub fn from_submission(
        submission: &EvidenceSubmission,
        weight: f64,
    ) -> Result<Self, SignalError> {
        let performance = Score::new(submission.performance)?;
        let confidence = Score::new(submission.confidence)?;
        submission.signals.validate()?;
        if submission.scaffolding_level > MAX_SCAFFOLDING_LEVEL {
            return Err(SignalError::ScaffoldingOutOfRange {
                level: submission.scaffolding_level,
                max: MAX_SCAFFOLDING_LEVEL,
            });
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            performance,
            signals: submission.signals,
            confidence,
            completion_time_ms: submission.completion_time_ms,
            scaffolding_level: submission.scaffolding_level,
            answer_changes: submission.answer_changes,
            weight,
            recorded_at: submission.recorded_at.unwrap_or_else(Utc::now),
            stats_excluded: false,
            risk_score: None,
        })
    }

    /// Whether this record participates in ledger statistics.
    pub fn counts_toward_stats(&self) -> bool {
        !self.stats_excluded
    }
}
