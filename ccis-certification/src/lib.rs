//! # ccis-certification
//!
//! The readiness gate and evidence package builder for certifying a
//! competency at level 3 or above. [`CertificationChecker`] measures an
//! assessment against the configured criteria and reports per-criterion
//! detail; [`build_package`] turns a ready assessment into an immutable
//! [`ccis_core::models::CertificationPackage`] for the credentialing
//! system.
//!
//! Nothing here mutates the assessment. Certification is a read: the
//! progression engine calls into this crate both while evaluating state
//! transitions and when a host asks for the package itself.

pub mod builder;
pub mod readiness;

pub use builder::build_package;
pub use readiness::CertificationChecker;
