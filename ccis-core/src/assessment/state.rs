//! Progression lifecycle states.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Lifecycle state of a competency assessment.
///
/// Transitions are evaluated by the progression crate after every
/// ledger change, in a fixed precedence order. The graph:
///
/// ```text
/// Initial -> InProgress -> { Advancing | Plateau } -> LevelAchieved
/// LevelAchieved -> { CertificationReady | InProgress }
/// CertificationReady -> Mastered
/// ```
///
/// `Mastered` is terminal: new evidence submissions are rejected, and
/// only risk audits may still touch the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProgressionState {
    /// Created, no evidence yet.
    Initial,
    /// Accumulating evidence below advancement criteria.
    InProgress,
    /// Evidence trending toward the next level's criteria.
    Advancing,
    /// Performance flat; plateau risk at or above threshold.
    Plateau,
    /// A new level was just reached this update.
    LevelAchieved,
    /// Certification criteria satisfied at level 3+.
    CertificationReady,
    /// Top level reached; terminal.
    Mastered,
}

impl ProgressionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Mastered)
    }

    /// Variant name for logs and error messages.
    pub fn variant_name(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::InProgress => "in_progress",
            Self::Advancing => "advancing",
            Self::Plateau => "plateau",
            Self::LevelAchieved => "level_achieved",
            Self::CertificationReady => "certification_ready",
            Self::Mastered => "mastered",
        }
    }
}

impl fmt::Display for ProgressionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.variant_name())
    }
}
