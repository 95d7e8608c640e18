//! Billing Domain - Policies, Invoices, and Billing Statistics
//!
//! This crate holds the reusable business logic behind the broker dashboard:
//!
//! - **Normalization**: raw backend rows (every field nullable except `id`)
//!   are mapped into well-formed [`Policy`] and [`Invoice`] records with fixed
//!   defaults and a total three-way status coercion per record type. The
//!   normalizer never fails; absent fields are defaulted, never rejected.
//! - **Aggregation**: [`compute_billing_stats`] derives the dashboard KPIs
//!   (premium written, collected, outstanding, active policy count, overdue
//!   invoice count) from the normalized collections via independent linear
//!   scans. Empty inputs yield all-zero stats.
//! - **Demo data**: the static fallback dataset shown whenever the backend is
//!   unreachable, unconfigured, or empty.
//!
//! Policies and invoices are independent collections. An invoice references a
//! policy only loosely, for display; the aggregations never join them.

pub mod demo;
pub mod error;
pub mod invoice;
pub mod policy;
pub mod stats;

pub use demo::{demo_invoices, demo_policies};
pub use error::BillingError;
pub use invoice::{Invoice, InvoiceStatus, RawInvoiceRow};
pub use policy::{Policy, PolicyStatus, RawPolicyRow};
pub use stats::{compute_billing_stats, invoice_status_breakdown, BillingStats, StatusBreakdown};

/// Display fallback for absent free-text fields (insured name, plate, emirate)
pub const MISSING_TEXT: &str = "\u{2014}";

/// Display fallback for absent document numbers
pub const MISSING_NUMBER: &str = "N/A";
