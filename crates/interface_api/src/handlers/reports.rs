//! Billing report handler

use axum::{extract::State, Extension, Json};

use domain_billing::{compute_billing_stats, invoice_status_breakdown};

use crate::auth::{has_role, roles, Claims};
use crate::dto::{ReportsResponse, StatsDto, StatusBreakdownDto};
use crate::error::ApiError;
use crate::fallback::load_book;
use crate::AppState;

/// GET /api/v1/reports/billing
///
/// Aggregates the dashboard KPIs over the full normalized book.
pub async fn billing_report(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<ReportsResponse>, ApiError> {
    if !has_role(&claims, roles::REPORT_READ) {
        return Err(ApiError::Forbidden("Missing report:read role".to_string()));
    }

    let (policies, invoices, warning) = load_book(state.repository.as_ref()).await;

    let stats = compute_billing_stats(&policies, &invoices);
    let breakdown = invoice_status_breakdown(&invoices);

    Ok(Json(ReportsResponse {
        stats: StatsDto::from(&stats),
        overdue_rate_percent: breakdown.overdue_rate_percent(),
        breakdown: StatusBreakdownDto::from(&breakdown),
        policy_count: policies.len(),
        invoice_count: invoices.len(),
        warning,
    }))
}
