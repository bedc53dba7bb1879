use crate::assessment::CompetencyAssessment;
use crate::errors::CcisResult;
use crate::models::{CompetencyId, PersonId};

/// Persistence gateway implemented by the host.
///
/// The engine is storage-agnostic: it hands over whole aggregates and
/// expects them back unchanged. Implementations should honor the
/// aggregate's `version` field for optimistic locking and surface
/// conflicts as [`crate::errors::CcisError::Store`].
pub trait IAssessmentStore: Send + Sync {
    /// Load the assessment for one person and competency, if it exists.
    fn load(
        &self,
        person: &PersonId,
        competency: &CompetencyId,
    ) -> CcisResult<Option<CompetencyAssessment>>;

    /// Persist an aggregate, inserting or replacing by id.
    fn save(&self, assessment: &CompetencyAssessment) -> CcisResult<()>;

    /// All assessments belonging to one person.
    fn list_for_person(&self, person: &PersonId) -> CcisResult<Vec<CompetencyAssessment>>;
}
