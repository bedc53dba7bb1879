//! Identity newtypes.
//!
//! Person and competency identifiers come from the host system. The
//! engine never invents them; it only checks existence through
//! [`crate::traits::IIdentityResolver`] at assessment creation.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Opaque identifier for a learner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PersonId(pub String);

impl PersonId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PersonId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a competency in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompetencyId(pub String);

impl CompetencyId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CompetencyId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CompetencyId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for CompetencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
