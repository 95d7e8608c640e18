//! Static demo dataset
//!
//! Shown whenever the backend is unreachable, unconfigured, or returns an
//! empty result set. The aggregator treats this data exactly like live data.

use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

use core_kernel::Money;

use crate::invoice::{Invoice, InvoiceStatus};
use crate::policy::{Policy, PolicyStatus};

static DEMO_POLICIES: Lazy<Vec<Policy>> = Lazy::new(|| {
    vec![
        Policy {
            id: "pol-1".to_string(),
            policy_number: "DXB-MTR-2025-0101".to_string(),
            insured_name: "Emirates Auto Brokers LLC".to_string(),
            vehicle_plate: "D 12345".to_string(),
            emirate: "Dubai".to_string(),
            inception_date: "2025-01-01".to_string(),
            expiry_date: "2025-12-31".to_string(),
            premium: Money::new(dec!(12500)),
            status: PolicyStatus::Active,
        },
        Policy {
            id: "pol-2".to_string(),
            policy_number: "AUH-MTR-2024-2201".to_string(),
            insured_name: "Gulf Motor Leasing FZ-LLC".to_string(),
            vehicle_plate: "AD 90876".to_string(),
            emirate: "Abu Dhabi".to_string(),
            inception_date: "2024-06-15".to_string(),
            expiry_date: "2025-06-14".to_string(),
            premium: Money::new(dec!(18900)),
            status: PolicyStatus::Active,
        },
        Policy {
            id: "pol-3".to_string(),
            policy_number: "SHJ-MTR-2024-0912".to_string(),
            insured_name: "Sharjah Cargo Transport".to_string(),
            vehicle_plate: "S 55432".to_string(),
            emirate: "Sharjah".to_string(),
            inception_date: "2024-01-10".to_string(),
            expiry_date: "2025-01-09".to_string(),
            premium: Money::new(dec!(9800)),
            status: PolicyStatus::Expired,
        },
    ]
});

static DEMO_INVOICES: Lazy<Vec<Invoice>> = Lazy::new(|| {
    vec![
        Invoice {
            id: "inv-1".to_string(),
            policy_id: "pol-1".to_string(),
            invoice_number: "INV-UAE-2001".to_string(),
            issue_date: "2025-01-05".to_string(),
            due_date: "2025-01-20".to_string(),
            amount: Money::new(dec!(6250)),
            status: InvoiceStatus::Pending,
        },
        Invoice {
            id: "inv-2".to_string(),
            policy_id: "pol-1".to_string(),
            invoice_number: "INV-UAE-2002".to_string(),
            issue_date: "2024-12-10".to_string(),
            due_date: "2024-12-25".to_string(),
            amount: Money::new(dec!(6250)),
            status: InvoiceStatus::Paid,
        },
        Invoice {
            id: "inv-3".to_string(),
            policy_id: "pol-2".to_string(),
            invoice_number: "INV-UAE-2003".to_string(),
            issue_date: "2024-12-01".to_string(),
            due_date: "2024-12-20".to_string(),
            amount: Money::new(dec!(9450)),
            status: InvoiceStatus::Overdue,
        },
    ]
});

/// Returns the demo policy book
pub fn demo_policies() -> Vec<Policy> {
    DEMO_POLICIES.clone()
}

/// Returns the demo invoice ledger
pub fn demo_invoices() -> Vec<Invoice> {
    DEMO_INVOICES.clone()
}
