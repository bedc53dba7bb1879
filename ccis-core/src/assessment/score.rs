//! Bounded score value type.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::errors::SignalError;

/// A measurement on the unit interval.
///
/// Performance and learner confidence are both expressed as a [`Score`].
/// External values are validated with [`Score::new`] and rejected when
/// out of range or non-finite; values derived inside the engine
/// (weighted averages, blended components) go through
/// [`Score::saturating`], which clamps instead.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Score(f64);

impl Score {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 1.0;

    /// Validate an externally supplied value.
    pub fn new(value: f64) -> Result<Self, SignalError> {
        if !value.is_finite() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(SignalError::ScoreOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Clamp an internally computed value into range. Non-finite input
    /// collapses to the floor.
    pub fn saturating(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(Self::MIN, Self::MAX))
        } else {
            Self(Self::MIN)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
