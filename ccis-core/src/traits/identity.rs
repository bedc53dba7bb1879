use crate::errors::CcisResult;
use crate::models::{CompetencyId, PersonId};

/// Checks that person and competency identifiers refer to real
/// entities.
///
/// Consulted once, at assessment creation; established assessments are
/// never re-resolved. [`crate::config::CatalogResolver`] covers the
/// common case of a static competency catalog.
pub trait IIdentityResolver: Send + Sync {
    fn person_exists(&self, person: &PersonId) -> CcisResult<bool>;

    fn competency_exists(&self, competency: &CompetencyId) -> CcisResult<bool>;
}
