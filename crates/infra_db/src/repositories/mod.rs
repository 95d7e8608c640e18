//! Repository implementations for database access

pub mod billing;

pub use billing::BillingRepository;
