//! The competency catalog.

use serde::{Deserialize, Serialize};

use crate::assessment::CcisLevel;
use crate::errors::{CcisError, CcisResult};
use crate::models::{CompetencyId, PersonId};
use crate::traits::IIdentityResolver;

/// One competency the engine can track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetencyDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Target level used when the host does not specify one.
    pub default_target_level: CcisLevel,
}

/// Immutable set of competencies, loaded once at startup.
///
/// The catalog is reference data, not a config knob: hosts typically
/// ship it as a TOML file next to the service config and never touch it
/// at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetencyCatalog {
    competencies: Vec<CompetencyDefinition>,
}

impl CompetencyCatalog {
    pub fn new(competencies: Vec<CompetencyDefinition>) -> Self {
        Self { competencies }
    }

    pub fn from_toml(toml_str: &str) -> CcisResult<Self> {
        toml::from_str(toml_str).map_err(|e| CcisError::Config(e.to_string()))
    }

    pub fn get(&self, id: &CompetencyId) -> Option<&CompetencyDefinition> {
        self.competencies.iter().find(|c| c.id == id.0)
    }

    pub fn contains(&self, id: &CompetencyId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.competencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competencies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompetencyDefinition> {
        self.competencies.iter()
    }
}

impl Default for CompetencyCatalog {
    fn default() -> Self {
        let define = |id: &str, name: &str, description: &str, target: CcisLevel| {
            CompetencyDefinition {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                default_target_level: target,
            }
        };
        Self::new(vec![
            define(
                "communication",
                "Communication",
                "Expressing ideas clearly and adapting to the audience",
                CcisLevel::Autonomous,
            ),
            define(
                "collaboration",
                "Collaboration",
                "Working productively in teams and managing shared work",
                CcisLevel::Autonomous,
            ),
            define(
                "critical_thinking",
                "Critical thinking",
                "Evaluating evidence and reasoning to sound conclusions",
                CcisLevel::Autonomous,
            ),
            define(
                "problem_solving",
                "Problem solving",
                "Decomposing novel problems and selecting effective strategies",
                CcisLevel::Autonomous,
            ),
            define(
                "self_management",
                "Self management",
                "Planning, monitoring, and adjusting one's own work",
                CcisLevel::SelfDirected,
            ),
            define(
                "metacognition",
                "Metacognition",
                "Judging one's own understanding and knowing when to seek help",
                CcisLevel::SelfDirected,
            ),
            define(
                "digital_fluency",
                "Digital fluency",
                "Selecting and applying digital tools appropriately",
                CcisLevel::SelfDirected,
            ),
        ])
    }
}

/// Identity resolver backed by the catalog.
///
/// Competencies resolve against catalog entries. Person identity lives
/// in the host's user system, so any non-empty person id is accepted
/// here; hosts with a real registry implement
/// [`IIdentityResolver`] themselves.
#[derive(Debug, Clone)]
pub struct CatalogResolver {
    catalog: CompetencyCatalog,
}

impl CatalogResolver {
    pub fn new(catalog: CompetencyCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CompetencyCatalog {
        &self.catalog
    }
}

impl IIdentityResolver for CatalogResolver {
    fn person_exists(&self, person: &PersonId) -> CcisResult<bool> {
        Ok(!person.0.trim().is_empty())
    }

    fn competency_exists(&self, competency: &CompetencyId) -> CcisResult<bool> {
        Ok(self.catalog.contains(competency))
    }
}
