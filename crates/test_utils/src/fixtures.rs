//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for the billing pipeline. These fixtures are
//! consistent and predictable, and mirror the figures the dashboard's
//! demo dataset produces.

use chrono::NaiveDate;
use core_kernel::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_billing::{RawInvoiceRow, RawPolicyRow};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Typical annual motor premium
    pub fn premium() -> Money {
        Money::new(dec!(12500.00))
    }

    /// Typical installment invoice amount (half the premium)
    pub fn installment() -> Money {
        Money::new(dec!(6250.00))
    }

    /// Zero dirhams
    pub fn zero() -> Money {
        Money::ZERO
    }

    /// A negative amount, for validation tests
    pub fn negative() -> Money {
        Money::new(dec!(-50.00))
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard policy inception date (Jan 1, 2025)
    pub fn inception() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    /// Standard policy expiry date (Dec 31, 2025)
    pub fn expiry() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }

    /// Standard invoice issue date
    pub fn issue() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
    }

    /// Standard invoice due date, fifteen days after issue
    pub fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
    }
}

/// Fixture for raw backend rows
pub struct RowFixtures;

impl RowFixtures {
    /// A fully-populated policy row
    pub fn policy_row() -> RawPolicyRow {
        RawPolicyRow {
            id: "pol-100".to_string(),
            policy_number: Some("DXB-MTR-2025-0100".to_string()),
            insured_name: Some("Emirates Auto Brokers LLC".to_string()),
            vehicle_plate: Some("D 12345".to_string()),
            emirate: Some("Dubai".to_string()),
            inception_date: Some("2025-01-01".to_string()),
            expiry_date: Some("2025-12-31".to_string()),
            premium: Some(dec!(12500)),
            status: Some("active".to_string()),
        }
    }

    /// A policy row with every nullable field absent
    pub fn sparse_policy_row() -> RawPolicyRow {
        RawPolicyRow::with_id("pol-sparse")
    }

    /// A fully-populated invoice row
    pub fn invoice_row() -> RawInvoiceRow {
        RawInvoiceRow {
            id: "inv-100".to_string(),
            policy_id: Some("pol-100".to_string()),
            invoice_number: Some("INV-UAE-2100".to_string()),
            issue_date: Some("2025-01-05".to_string()),
            due_date: Some("2025-01-20".to_string()),
            amount: Some(dec!(6250)),
            status: Some("pending".to_string()),
        }
    }

    /// An invoice row with every nullable field absent
    pub fn sparse_invoice_row() -> RawInvoiceRow {
        RawInvoiceRow::with_id("inv-sparse")
    }
}

/// Expected aggregate figures for the demo dataset
pub struct DemoExpectations;

impl DemoExpectations {
    pub fn total_premium() -> Decimal {
        dec!(41200)
    }

    pub fn total_collected() -> Decimal {
        dec!(6250)
    }

    pub fn total_outstanding() -> Decimal {
        dec!(15700)
    }

    pub const ACTIVE_POLICIES: usize = 2;
    pub const OVERDUE_INVOICES: usize = 1;
}
