//! # ccis-progression
//!
//! The write side of the engine. [`ProgressionEngine`] owns every
//! mutation of a [`ccis_core::assessment::CompetencyAssessment`]:
//! evidence ingestion, statistics refresh, lifecycle transitions, level
//! advancement, plateau interventions, and the gaming feedback loop.
//! [`AssessmentRegistry`] adds concurrent per-assessment access on top,
//! one entry lock per person-competency pair.
//!
//! Mutations validate first and mutate second: an error from any
//! operation means the aggregate is exactly as it was. Every successful
//! mutation bumps the aggregate version and recomputes derived state,
//! so readers never see statistics that lag the ledger.

pub mod advancement;
pub mod engine;
pub mod registry;
pub mod transition;

pub use engine::ProgressionEngine;
pub use registry::AssessmentRegistry;
pub use transition::{evaluate_transition, TransitionSignals};
