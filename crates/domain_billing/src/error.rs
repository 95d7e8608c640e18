//! Billing domain errors
//!
//! Normalization and aggregation are total and never fail; these errors only
//! arise when constructing new records in the create flow.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from the billing create flow
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingError {
    #[error("Premium cannot be negative: {0}")]
    NegativePremium(Decimal),

    #[error("Invoice amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    #[error("Policy expiry {expiry} precedes inception {inception}")]
    InvalidPolicyPeriod {
        inception: NaiveDate,
        expiry: NaiveDate,
    },

    #[error("Invoice due date {due} precedes issue date {issue}")]
    InvalidInvoicePeriod { issue: NaiveDate, due: NaiveDate },
}
