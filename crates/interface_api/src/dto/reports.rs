//! Billing report DTOs

use rust_decimal::Decimal;
use serde::Serialize;

use domain_billing::{BillingStats, StatusBreakdown};

/// The headline KPI block
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub total_premium: Decimal,
    pub total_collected: Decimal,
    pub total_outstanding: Decimal,
    pub active_policies: usize,
    pub overdue_invoices: usize,
}

impl From<&BillingStats> for StatsDto {
    fn from(stats: &BillingStats) -> Self {
        Self {
            total_premium: stats.total_premium.amount(),
            total_collected: stats.total_collected.amount(),
            total_outstanding: stats.total_outstanding.amount(),
            active_policies: stats.active_policies,
            overdue_invoices: stats.overdue_invoices,
        }
    }
}

/// Invoice counts by settlement status
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdownDto {
    pub pending: usize,
    pub paid: usize,
    pub overdue: usize,
}

impl From<&StatusBreakdown> for StatusBreakdownDto {
    fn from(breakdown: &StatusBreakdown) -> Self {
        Self {
            pending: breakdown.pending,
            paid: breakdown.paid,
            overdue: breakdown.overdue,
        }
    }
}

/// Response body for the billing report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsResponse {
    pub stats: StatsDto,
    pub breakdown: StatusBreakdownDto,
    /// Whole-percent overdue share; absent when there are no invoices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overdue_rate_percent: Option<Decimal>,
    pub policy_count: usize,
    pub invoice_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
