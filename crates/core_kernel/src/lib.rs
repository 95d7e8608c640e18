//! Core Kernel - Foundational types for the motor broker billing system
//!
//! This crate provides the building blocks shared by the billing domain and
//! the API layer:
//! - An AED money type with precise decimal arithmetic
//! - Strongly-typed identifiers for policies and invoices

pub mod identifiers;
pub mod money;

pub use identifiers::{InvoiceId, PolicyId};
pub use money::Money;
