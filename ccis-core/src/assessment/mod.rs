//! Assessment domain types: the CCIS scale, scores, signals, evidence,
//! progression state, and the assessment aggregate.

pub mod competency;
pub mod evidence;
pub mod intervention;
pub mod level;
pub mod plateau;
pub mod score;
pub mod signals;
pub mod state;

pub use competency::CompetencyAssessment;
pub use evidence::{EvidenceSubmission, TaskEvidence};
pub use intervention::{InterventionRecord, InterventionType};
pub use level::{CcisLevel, LevelPlacement};
pub use plateau::PlateauPeriod;
pub use score::Score;
pub use signals::BehavioralSignalSet;
pub use state::ProgressionState;
