//! Invoice DTOs

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use domain_billing::{Invoice, Policy, MISSING_TEXT};

/// An invoice as the dashboard renders it
///
/// `policy_number` is resolved against the policy list at response time;
/// a dangling policy reference renders as the missing-text placeholder.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDto {
    pub id: String,
    pub policy_id: String,
    pub policy_number: String,
    pub invoice_number: String,
    pub issue_date: String,
    pub due_date: String,
    pub amount: Decimal,
    pub status: String,
}

impl InvoiceDto {
    /// Builds the DTO, resolving the policy number from the lookup table
    pub fn resolve(invoice: &Invoice, policy_numbers: &HashMap<&str, &str>) -> Self {
        let policy_number = policy_numbers
            .get(invoice.policy_id.as_str())
            .map(|n| n.to_string())
            .unwrap_or_else(|| MISSING_TEXT.to_string());

        Self {
            id: invoice.id.clone(),
            policy_id: invoice.policy_id.clone(),
            policy_number,
            invoice_number: invoice.invoice_number.clone(),
            issue_date: invoice.issue_date.clone(),
            due_date: invoice.due_date.clone(),
            amount: invoice.amount.amount(),
            status: invoice.status.as_str().to_string(),
        }
    }
}

/// Builds the id-to-policy-number lookup table for display resolution
pub fn policy_number_index(policies: &[Policy]) -> HashMap<&str, &str> {
    policies
        .iter()
        .map(|p| (p.id.as_str(), p.policy_number.as_str()))
        .collect()
}

/// Response body for the invoice list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicesResponse {
    pub invoices: Vec<InvoiceDto>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
