//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! motor broker billing test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for policies and invoices
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for billing figures
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
