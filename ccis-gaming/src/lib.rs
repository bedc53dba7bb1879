//! # ccis-gaming
//!
//! Detection of evidence patterns that look like gaming the assessment
//! rather than doing the work: implausibly fast completions, bot-grade
//! timing regularity, answer thrashing, and completion times far outside
//! the learner's own distribution.
//!
//! The [`GamingRiskAssessor`] runs every detector over a batch and folds
//! the hits into one `GamingRiskResult`. Risk is advisory data, never an
//! error: the progression crate decides what a high-risk result does to
//! the owning assessment (statistical exclusion plus a human-review
//! flag), and the evidence itself is never deleted.

pub mod assessor;
pub mod detectors;

pub use assessor::GamingRiskAssessor;
