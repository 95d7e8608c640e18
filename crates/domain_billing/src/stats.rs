//! Billing statistics aggregation
//!
//! Derives the dashboard KPIs from normalized policy and invoice collections.
//! Every figure is an independent linear scan; results depend only on the
//! input collections and not on their ordering. All functions here are total:
//! empty inputs yield all-zero statistics.

use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::Money;

use crate::invoice::{Invoice, InvoiceStatus};
use crate::policy::Policy;

/// Aggregate billing KPIs for the dashboard
///
/// Derived, never stored; recomputed on every change to the underlying
/// collections. `total_outstanding + total_collected` need not equal
/// `total_premium`: policies and invoices are independent collections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillingStats {
    /// Sum of written premium over all policies, regardless of status
    pub total_premium: Money,
    /// Sum of invoice amounts not yet collected (pending + overdue)
    pub total_outstanding: Money,
    /// Sum of invoice amounts already paid
    pub total_collected: Money,
    /// Number of policies currently in force
    pub active_policies: usize,
    /// Number of invoices past due
    pub overdue_invoices: usize,
}

impl BillingStats {
    /// All-zero statistics, as produced for empty collections
    pub fn empty() -> Self {
        Self {
            total_premium: Money::ZERO,
            total_outstanding: Money::ZERO,
            total_collected: Money::ZERO,
            active_policies: 0,
            overdue_invoices: 0,
        }
    }
}

/// Computes billing statistics over the normalized collections
pub fn compute_billing_stats(policies: &[Policy], invoices: &[Invoice]) -> BillingStats {
    let total_premium = policies.iter().map(|p| p.premium).sum();
    let total_collected = invoices
        .iter()
        .filter(|i| i.is_paid())
        .map(|i| i.amount)
        .sum();
    let total_outstanding = invoices
        .iter()
        .filter(|i| !i.is_paid())
        .map(|i| i.amount)
        .sum();
    let active_policies = policies.iter().filter(|p| p.is_active()).count();
    let overdue_invoices = invoices.iter().filter(|i| i.is_overdue()).count();

    BillingStats {
        total_premium,
        total_outstanding,
        total_collected,
        active_policies,
        overdue_invoices,
    }
}

/// Invoice counts by status, the dashboard's aging proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub pending: usize,
    pub paid: usize,
    pub overdue: usize,
}

impl StatusBreakdown {
    /// Total number of invoices in the breakdown
    pub fn total(&self) -> usize {
        self.pending + self.paid + self.overdue
    }

    /// Share of overdue invoices as a whole percentage
    ///
    /// Returns `None` when there are no invoices at all; the dashboard
    /// renders that case as a dash rather than a rate.
    pub fn overdue_rate_percent(&self) -> Option<Decimal> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let rate = Decimal::from(self.overdue as u64) * Decimal::from(100u64)
            / Decimal::from(total as u64);
        Some(rate.round())
    }
}

/// Counts invoices by settlement status
pub fn invoice_status_breakdown(invoices: &[Invoice]) -> StatusBreakdown {
    let mut breakdown = StatusBreakdown {
        pending: 0,
        paid: 0,
        overdue: 0,
    };
    for invoice in invoices {
        match invoice.status {
            InvoiceStatus::Pending => breakdown.pending += 1,
            InvoiceStatus::Paid => breakdown.paid += 1,
            InvoiceStatus::Overdue => breakdown.overdue += 1,
        }
    }
    breakdown
}
