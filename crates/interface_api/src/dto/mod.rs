//! Request and response shapes for the dashboard API
//!
//! Everything here serializes as camelCase to match what the dashboard
//! frontend consumes.

pub mod invoice;
pub mod policy;
pub mod reports;

pub use invoice::{InvoiceDto, InvoicesResponse};
pub use policy::{CreatePolicyRequest, CreatePolicyResponse, PoliciesResponse, PolicyDto};
pub use reports::{ReportsResponse, StatsDto, StatusBreakdownDto};
