//! Configuration for every subsystem.
//!
//! All sub-configs deserialize with `#[serde(default)]`, so an empty
//! TOML document yields the compiled defaults and a partial document
//! overrides only what it names.

pub mod advancement_config;
pub mod catalog;
pub mod certification_config;
pub mod defaults;
pub mod gaming_config;
pub mod ledger_config;
pub mod plateau_config;
pub mod scoring_config;

pub use advancement_config::{AdvancementConfig, AdvancementRule};
pub use catalog::{CatalogResolver, CompetencyCatalog, CompetencyDefinition};
pub use certification_config::CertificationConfig;
pub use gaming_config::GamingConfig;
pub use ledger_config::LedgerConfig;
pub use plateau_config::PlateauConfig;
pub use scoring_config::ScoringConfig;

use serde::{Deserialize, Serialize};

use crate::assessment::CcisLevel;
use crate::errors::{CcisError, CcisResult};

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CcisConfig {
    pub scoring: ScoringConfig,
    pub ledger: LedgerConfig,
    pub advancement: AdvancementConfig,
    pub plateau: PlateauConfig,
    pub gaming: GamingConfig,
    pub certification: CertificationConfig,
}

impl CcisConfig {
    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> CcisResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| CcisError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Cross-field validation of the final config.
    pub fn validate(&self) -> CcisResult<()> {
        self.scoring.validate()?;

        for level in [CcisLevel::Dependent, CcisLevel::Guided, CcisLevel::SelfDirected] {
            if self.advancement.rule_for(level).is_none() {
                return Err(CcisError::Config(format!(
                    "advancement table is missing a rule for {level}"
                )));
            }
        }
        if self.advancement.rule_for(CcisLevel::Autonomous).is_some() {
            return Err(CcisError::Config(
                "advancement table must not contain a rule for the top level".to_string(),
            ));
        }
        for rule in &self.advancement.rules {
            for (name, value) in [
                ("min_average_performance", rule.min_average_performance),
                ("min_average_confidence", rule.min_average_confidence),
                ("min_signal_strength", rule.min_signal_strength),
            ] {
                if !(0.0..=1.0).contains(&value) {
                    return Err(CcisError::Config(format!(
                        "advancement rule for {}: {name} must be in [0, 1], got {value}",
                        rule.from_level
                    )));
                }
            }
        }

        for (name, value) in [
            ("plateau.risk_threshold", self.plateau.risk_threshold),
            ("gaming.high_risk_threshold", self.gaming.high_risk_threshold),
            ("ledger.max_exclusion_share", self.ledger.max_exclusion_share),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CcisError::Config(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }
        if self.ledger.insertion_decay_rate <= 0.0 {
            return Err(CcisError::Config(format!(
                "ledger.insertion_decay_rate must be positive, got {}",
                self.ledger.insertion_decay_rate
            )));
        }
        if self.certification.min_level < 1 || self.certification.min_level > 4 {
            return Err(CcisError::Config(format!(
                "certification.min_level must be a level ordinal (1-4), got {}",
                self.certification.min_level
            )));
        }
        Ok(())
    }
}
