//! Traits defining the seams between subsystems and the host.

pub mod identity;
pub mod risk;
pub mod scorer;
pub mod store;

pub use identity::IIdentityResolver;
pub use risk::IRiskAssessor;
pub use scorer::IScorer;
pub use store::IAssessmentStore;
