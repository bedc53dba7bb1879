//! Plateau period tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::assessment::InterventionType;

/// A contiguous span during which an assessment sat in the plateau
/// state.
///
/// A period opens when plateau risk crosses the threshold. It is
/// resolved by an intervention, or closed unresolved when the
/// assessment leaves the plateau on its own (statistics recovered, or
/// the level advanced). At most one period is open per assessment at
/// any time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlateauPeriod {
    pub started_at: DateTime<Utc>,
    #[ts(optional)]
    pub ended_at: Option<DateTime<Utc>>,
    /// Plateau risk measured when the period opened.
    pub trigger_risk: f64,
    /// Intervention that closed the period.
    #[ts(optional)]
    pub resolved_by: Option<InterventionType>,
}

impl PlateauPeriod {
    pub fn open(trigger_risk: f64, started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            ended_at: None,
            trigger_risk,
            resolved_by: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }

    /// End the period without an intervention, e.g. when statistics
    /// recover by themselves.
    pub fn close(&mut self, at: DateTime<Utc>) {
        self.ended_at = Some(at);
    }

    /// End the period, crediting the intervention that broke it.
    pub fn resolve(&mut self, intervention: InterventionType, at: DateTime<Utc>) {
        self.ended_at = Some(at);
        self.resolved_by = Some(intervention);
    }

    /// Length of the period; open periods measure up to `now`.
    pub fn duration_days(&self, now: DateTime<Utc>) -> f64 {
        let end = self.ended_at.unwrap_or(now);
        (end - self.started_at).num_seconds() as f64 / 86_400.0
    }
}
