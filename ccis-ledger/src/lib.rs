//! # ccis-ledger
//!
//! Statistics over an assessment's evidence ledger. The ledger itself
//! lives on the aggregate in `ccis-core`; this crate owns the math:
//! insertion-order weights, the weighted aggregates, trend regression,
//! plateau risk, and data-quality warnings.
//!
//! Everything here is pure. [`LedgerCalculator::recompute`] takes the
//! evidence slice and a clock value and returns a fresh
//! [`ccis_core::models::LedgerStatistics`]; statistics are never
//! updated incrementally, so a recompute after any ledger change (new
//! evidence, gaming exclusion) always reflects exactly the current
//! records.

pub mod plateau_risk;
pub mod stats;
pub mod trend;
pub mod weights;

pub use plateau_risk::plateau_risk;
pub use stats::LedgerCalculator;
pub use trend::slope;
pub use weights::{insertion_weight, next_weight};
