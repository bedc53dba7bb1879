//! # ccis-scoring
//!
//! Turns observed interaction behavior into evidence scores and level
//! placements. Three stages:
//!
//! 1. [`SignalNormalizer`] converts raw interaction telemetry into the
//!    seven-component behavioral signal set.
//! 2. [`BehavioralScorer`] collapses a signal set into a single score
//!    via the configured weighted sum.
//! 3. [`LevelClassifier`] maps progress percentages onto the discrete
//!    CCIS scale.
//!
//! [`FallbackScorer`] wraps an optional host-supplied scorer and falls
//! back to the deterministic one when it fails.

pub mod classifier;
pub mod fallback;
pub mod normalizer;
pub mod scorer;

pub use classifier::LevelClassifier;
pub use fallback::FallbackScorer;
pub use normalizer::{RawInteractionMetrics, SignalNormalizer};
pub use scorer::BehavioralScorer;
