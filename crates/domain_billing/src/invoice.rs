//! Invoice records and normalization
//!
//! An [`Invoice`] represents one billing event tied to a policy. The policy
//! reference is loose: it is resolved for display only and may match no
//! policy at all. Whether an invoice is overdue is backend-assigned; it is
//! never recomputed from dates here.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{InvoiceId, Money};

use crate::error::BillingError;
use crate::MISSING_NUMBER;

/// Invoice settlement status
///
/// Coercion from backend values is total: only the exact strings `"paid"`
/// and `"overdue"` map to their variants, everything else falls through to
/// `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    /// Coerces a raw backend status value into an invoice status
    pub fn coerce(raw: Option<&str>) -> Self {
        match raw {
            Some("paid") => InvoiceStatus::Paid,
            Some("overdue") => InvoiceStatus::Overdue,
            _ => InvoiceStatus::Pending,
        }
    }

    /// Returns the lowercase wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A raw invoice row as returned by the backend
///
/// Every field except `id` is nullable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInvoiceRow {
    pub id: String,
    pub policy_id: Option<String>,
    pub invoice_number: Option<String>,
    pub issue_date: Option<String>,
    pub due_date: Option<String>,
    pub amount: Option<Decimal>,
    pub status: Option<String>,
}

impl RawInvoiceRow {
    /// Creates a row with only the identifier set, all other fields absent
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// One billing event tied to a policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Opaque unique identifier
    pub id: String,
    /// Loose reference to a policy; may resolve to no match
    pub policy_id: String,
    pub invoice_number: String,
    /// ISO-8601 date, empty when the backend had none
    pub issue_date: String,
    /// ISO-8601 date, empty when the backend had none
    pub due_date: String,
    /// Billed amount in AED
    pub amount: Money,
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Normalizes a raw backend row into a well-formed invoice
    ///
    /// Total and pure, like [`Policy::from_raw`](crate::Policy::from_raw).
    pub fn from_raw(row: RawInvoiceRow) -> Self {
        Self {
            id: row.id,
            policy_id: row.policy_id.unwrap_or_default(),
            invoice_number: row
                .invoice_number
                .unwrap_or_else(|| MISSING_NUMBER.to_string()),
            issue_date: row.issue_date.unwrap_or_default(),
            due_date: row.due_date.unwrap_or_default(),
            amount: Money::new(row.amount.unwrap_or_default()),
            status: InvoiceStatus::coerce(row.status.as_deref()),
        }
    }

    /// Creates a new pending invoice for the broker's create flow
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is negative or the due date precedes
    /// the issue date.
    pub fn new(
        policy_id: impl Into<String>,
        issue_date: NaiveDate,
        due_date: NaiveDate,
        amount: Money,
    ) -> Result<Self, BillingError> {
        if amount.is_negative() {
            return Err(BillingError::NegativeAmount(amount.amount()));
        }
        if due_date < issue_date {
            return Err(BillingError::InvalidInvoicePeriod {
                issue: issue_date,
                due: due_date,
            });
        }

        let id = InvoiceId::new_v7();
        Ok(Self {
            invoice_number: invoice_number_for(&id),
            id: id.to_string(),
            policy_id: policy_id.into(),
            issue_date: issue_date.format("%Y-%m-%d").to_string(),
            due_date: due_date.format("%Y-%m-%d").to_string(),
            amount,
            status: InvoiceStatus::Pending,
        })
    }

    /// Returns true if the invoice is fully paid
    pub fn is_paid(&self) -> bool {
        self.status == InvoiceStatus::Paid
    }

    /// Returns true if the invoice is past due, per backend-assigned status
    pub fn is_overdue(&self) -> bool {
        self.status == InvoiceStatus::Overdue
    }
}

/// Derives the broker invoice number from the invoice identifier
///
/// Tied to the unique id rather than a clock, so concurrent creates cannot
/// mint the same number.
fn invoice_number_for(id: &InvoiceId) -> String {
    let hex = id.as_uuid().simple().to_string();
    format!("INV-UAE-{}", hex[hex.len() - 12..].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_coercion_exact_matches_only() {
        assert_eq!(InvoiceStatus::coerce(Some("paid")), InvoiceStatus::Paid);
        assert_eq!(InvoiceStatus::coerce(Some("overdue")), InvoiceStatus::Overdue);
        assert_eq!(InvoiceStatus::coerce(Some("pending")), InvoiceStatus::Pending);
        assert_eq!(InvoiceStatus::coerce(Some("PAID")), InvoiceStatus::Pending);
        assert_eq!(InvoiceStatus::coerce(Some("foo")), InvoiceStatus::Pending);
        assert_eq!(InvoiceStatus::coerce(None), InvoiceStatus::Pending);
    }

    #[test]
    fn test_status_coercion_is_idempotent() {
        for raw in [Some("paid"), Some("overdue"), Some("cancelled"), None] {
            let once = InvoiceStatus::coerce(raw);
            let twice = InvoiceStatus::coerce(Some(once.as_str()));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_from_raw_defaults() {
        let invoice = Invoice::from_raw(RawInvoiceRow::with_id("inv-x"));

        assert_eq!(invoice.id, "inv-x");
        assert_eq!(invoice.policy_id, "");
        assert_eq!(invoice.invoice_number, "N/A");
        assert_eq!(invoice.issue_date, "");
        assert_eq!(invoice.due_date, "");
        assert!(invoice.amount.is_zero());
        assert_eq!(invoice.status, InvoiceStatus::Pending);
    }

    #[test]
    fn test_from_raw_passes_values_through() {
        let row = RawInvoiceRow {
            id: "inv-7".to_string(),
            policy_id: Some("pol-2".to_string()),
            invoice_number: Some("INV-UAE-2044".to_string()),
            issue_date: Some("2025-02-01".to_string()),
            due_date: Some("2025-02-16".to_string()),
            amount: Some(dec!(4725)),
            status: Some("overdue".to_string()),
        };

        let invoice = Invoice::from_raw(row);
        assert_eq!(invoice.policy_id, "pol-2");
        assert_eq!(invoice.amount.amount(), dec!(4725));
        assert!(invoice.is_overdue());
        assert!(!invoice.is_paid());
    }

    #[test]
    fn test_new_creates_pending_invoice() {
        let issue = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let due = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();

        let invoice = Invoice::new("pol-1", issue, due, Money::new(dec!(6250))).unwrap();

        assert!(invoice.id.starts_with("INV-"));
        assert!(invoice.invoice_number.starts_with("INV-UAE-"));
        assert_eq!(invoice.issue_date, "2025-01-05");
        assert_eq!(invoice.due_date, "2025-01-20");
        assert_eq!(invoice.status, InvoiceStatus::Pending);
    }

    #[test]
    fn test_back_to_back_creates_get_distinct_invoice_numbers() {
        let issue = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let due = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();

        let a = Invoice::new("pol-1", issue, due, Money::new(dec!(100))).unwrap();
        let b = Invoice::new("pol-1", issue, due, Money::new(dec!(100))).unwrap();

        assert_ne!(a.invoice_number, b.invoice_number);
    }

    #[test]
    fn test_invoice_number_is_derived_from_the_id() {
        let issue = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let due = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();

        let invoice = Invoice::new("pol-1", issue, due, Money::new(dec!(100))).unwrap();

        let suffix = invoice.invoice_number.strip_prefix("INV-UAE-").unwrap();
        assert_eq!(suffix.len(), 12);
        let id_hex = invoice.id.strip_prefix("INV-").unwrap().replace('-', "");
        assert!(id_hex.to_uppercase().ends_with(suffix));
    }

    #[test]
    fn test_new_rejects_negative_amount() {
        let issue = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let due = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();

        let result = Invoice::new("pol-1", issue, due, Money::new(dec!(-0.01)));
        assert!(matches!(result, Err(BillingError::NegativeAmount(_))));
    }

    #[test]
    fn test_new_rejects_due_before_issue() {
        let issue = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let due = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();

        let result = Invoice::new("pol-1", issue, due, Money::new(dec!(100)));
        assert!(matches!(result, Err(BillingError::InvalidInvoicePeriod { .. })));
    }
}
