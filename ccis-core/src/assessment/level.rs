//! The four-level CCIS proficiency scale.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use ts_rs::TS;

use crate::errors::SignalError;

/// Proficiency level on the CCIS scale.
///
/// Each level owns a half-open band of the progress percentage scale
/// (the top band is closed at 100):
///
/// | Level           | Band        |
/// |-----------------|-------------|
/// | `Dependent`     | [0, 25)     |
/// | `Guided`        | [25, 50)    |
/// | `SelfDirected`  | [50, 85)    |
/// | `Autonomous`    | [85, 100]   |
///
/// The bands partition [0, 100]: every valid percentage maps to exactly
/// one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CcisLevel {
    Dependent,
    Guided,
    SelfDirected,
    Autonomous,
}

impl CcisLevel {
    /// Lower edge of the `Guided` band.
    pub const GUIDED_FLOOR: f64 = 25.0;
    /// Lower edge of the `SelfDirected` band.
    pub const SELF_DIRECTED_FLOOR: f64 = 50.0;
    /// Lower edge of the `Autonomous` band.
    pub const AUTONOMOUS_FLOOR: f64 = 85.0;

    /// One-based position on the scale (1 = `Dependent` .. 4 = `Autonomous`).
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Dependent => 1,
            Self::Guided => 2,
            Self::SelfDirected => 3,
            Self::Autonomous => 4,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1 => Some(Self::Dependent),
            2 => Some(Self::Guided),
            3 => Some(Self::SelfDirected),
            4 => Some(Self::Autonomous),
            _ => None,
        }
    }

    /// The level above this one, or `None` at the top of the scale.
    pub fn next(self) -> Option<Self> {
        Self::from_ordinal(self.ordinal() + 1)
    }

    pub fn is_top(self) -> bool {
        self == Self::Autonomous
    }

    /// Band owned by this level as `(floor, ceiling)`. The ceiling is
    /// exclusive everywhere except the top band.
    pub fn band(self) -> (f64, f64) {
        match self {
            Self::Dependent => (0.0, Self::GUIDED_FLOOR),
            Self::Guided => (Self::GUIDED_FLOOR, Self::SELF_DIRECTED_FLOOR),
            Self::SelfDirected => (Self::SELF_DIRECTED_FLOOR, Self::AUTONOMOUS_FLOOR),
            Self::Autonomous => (Self::AUTONOMOUS_FLOOR, 100.0),
        }
    }

    /// Classify a progress percentage into its owning level. `None` when
    /// the value falls outside [0, 100] or is not finite.
    pub fn for_percentage(percentage: f64) -> Option<Self> {
        if !percentage.is_finite() || !(0.0..=100.0).contains(&percentage) {
            return None;
        }
        Some(if percentage < Self::GUIDED_FLOOR {
            Self::Dependent
        } else if percentage < Self::SELF_DIRECTED_FLOOR {
            Self::Guided
        } else if percentage < Self::AUTONOMOUS_FLOOR {
            Self::SelfDirected
        } else {
            Self::Autonomous
        })
    }

    /// Whether the given percentage falls inside this level's band.
    pub fn contains(self, percentage: f64) -> bool {
        Self::for_percentage(percentage) == Some(self)
    }

    pub fn all() -> [CcisLevel; 4] {
        [
            Self::Dependent,
            Self::Guided,
            Self::SelfDirected,
            Self::Autonomous,
        ]
    }
}

impl PartialOrd for CcisLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CcisLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl fmt::Display for CcisLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dependent => "dependent",
            Self::Guided => "guided",
            Self::SelfDirected => "self_directed",
            Self::Autonomous => "autonomous",
        };
        write!(f, "L{} ({name})", self.ordinal())
    }
}

/// A level paired with the percentage that placed it there.
///
/// Construction checks that the percentage falls inside the band the
/// level owns, so a `LevelPlacement` can never carry a contradictory
/// pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LevelPlacement {
    level: CcisLevel,
    percentage: f64,
}

impl LevelPlacement {
    /// Margin kept below a band ceiling so within-band positions never
    /// spill into the next level.
    const BAND_EDGE_MARGIN: f64 = 1e-6;

    pub fn new(level: CcisLevel, percentage: f64) -> Result<Self, SignalError> {
        if !level.contains(percentage) {
            return Err(SignalError::PercentageOutsideBand {
                level: level.ordinal(),
                percentage,
            });
        }
        Ok(Self { level, percentage })
    }

    /// Classify a raw percentage, rejecting values outside [0, 100].
    pub fn from_percentage(percentage: f64) -> Result<Self, SignalError> {
        let level = CcisLevel::for_percentage(percentage)
            .ok_or(SignalError::PercentageOutOfRange { value: percentage })?;
        Ok(Self { level, percentage })
    }

    /// Placement at a fraction of the given level's band. The fraction
    /// is clamped to [0, 1]; non-finite input reads as the band floor.
    /// For all but the top level the result stays strictly below the
    /// ceiling, so the placement always classifies back to `level`.
    pub fn at_band_fraction(level: CcisLevel, fraction: f64) -> Self {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let (floor, ceiling) = level.band();
        let mut percentage = floor + fraction * (ceiling - floor);
        if !level.is_top() {
            percentage = percentage.min(ceiling - Self::BAND_EDGE_MARGIN);
        }
        Self { level, percentage }
    }

    pub fn level(&self) -> CcisLevel {
        self.level
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }
}
