//! System-wide constants.
//!
//! Tunable parameters (thresholds, weights, rule tables) live in
//! [`crate::config`]; the values here are structural and never change
//! at runtime.

/// Engine version, taken from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of behavioral signals in a complete signal set.
pub const SIGNAL_COUNT: usize = 7;

/// Number of levels on the CCIS scale.
pub const LEVEL_COUNT: usize = 4;

/// Highest scaffolding level an evidence record may carry.
pub const MAX_SCAFFOLDING_LEVEL: u8 = 5;

/// Allowed deviation of the signal weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Floor and ceiling of the progress percentage scale.
pub const PERCENTAGE_MIN: f64 = 0.0;
pub const PERCENTAGE_MAX: f64 = 100.0;
