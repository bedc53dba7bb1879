//! Data-quality warnings.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Category of a data-quality observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DataQualityKind {
    /// Too few included records for statistics to be reliable.
    SparseEvidence,
    /// A large share of the ledger is excluded by gaming flags.
    HighExclusionShare,
    /// Newest included record is old; the picture may be outdated.
    StaleEvidence,
}

/// A non-blocking observation about ledger quality.
///
/// Warnings are values attached to [`crate::models::LedgerStatistics`],
/// never errors: processing continues and the host decides whether to
/// surface them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DataQualityWarning {
    pub kind: DataQualityKind,
    pub message: String,
}

impl DataQualityWarning {
    pub fn new(kind: DataQualityKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
