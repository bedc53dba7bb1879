//! Lifecycle state decisions.

use ccis_core::assessment::{CcisLevel, ProgressionState};
use ccis_core::models::TrendDirection;

/// Inputs for one transition decision.
///
/// Everything is precomputed by the engine; evaluation itself touches
/// no aggregate and no clock, so a decision can be replayed from a
/// snapshot.
#[derive(Debug, Clone)]
pub struct TransitionSignals {
    pub current_level: CcisLevel,
    /// Total ledger size, excluded records included.
    pub evidence_count: usize,
    pub plateau_risk: f64,
    pub plateau_threshold: f64,
    pub trend: TrendDirection,
    /// Every advancement criterion for the current level holds.
    pub advancement_satisfied: bool,
    /// The full certification gate passes (the gate carries its own
    /// level bar and review block).
    pub certification_ready: bool,
}

/// Decide the lifecycle state after a ledger change.
///
/// Precedence, first match wins:
/// 1. empty ledger → `Initial`;
/// 2. top level → `Mastered`;
/// 3. certification gate passes → `CertificationReady`;
/// 4. plateau risk at or above threshold → `Plateau`;
/// 5. improving trend with advancement criteria satisfied → `Advancing`;
/// 6. otherwise `InProgress`.
///
/// `LevelAchieved` never comes out of here: it is stamped directly by
/// the advancement operation and replaced on the next ledger change.
pub fn evaluate_transition(signals: &TransitionSignals) -> ProgressionState {
    if signals.evidence_count == 0 {
        return ProgressionState::Initial;
    }
    if signals.current_level.is_top() {
        return ProgressionState::Mastered;
    }
    if signals.certification_ready {
        return ProgressionState::CertificationReady;
    }
    if signals.plateau_risk >= signals.plateau_threshold {
        return ProgressionState::Plateau;
    }
    if signals.trend == TrendDirection::Improving && signals.advancement_satisfied {
        return ProgressionState::Advancing;
    }
    ProgressionState::InProgress
}
