//! Policy DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_billing::Policy;

use super::invoice::InvoiceDto;

/// A policy as the dashboard renders it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDto {
    pub id: String,
    pub policy_number: String,
    pub insured_name: String,
    pub vehicle_plate: String,
    pub emirate: String,
    pub inception_date: String,
    pub expiry_date: String,
    pub premium: Decimal,
    pub status: String,
}

impl From<&Policy> for PolicyDto {
    fn from(policy: &Policy) -> Self {
        Self {
            id: policy.id.clone(),
            policy_number: policy.policy_number.clone(),
            insured_name: policy.insured_name.clone(),
            vehicle_plate: policy.vehicle_plate.clone(),
            emirate: policy.emirate.clone(),
            inception_date: policy.inception_date.clone(),
            expiry_date: policy.expiry_date.clone(),
            premium: policy.premium.amount(),
            status: policy.status.as_str().to_string(),
        }
    }
}

/// Response body for the policy list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliciesResponse {
    pub policies: Vec<PolicyDto>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Request body for creating a policy with its first invoice
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePolicyRequest {
    #[validate(length(min = 1, message = "Policy number is required"))]
    pub policy_number: String,
    #[validate(length(min = 1, message = "Insured name is required"))]
    pub insured_name: String,
    #[validate(length(min = 1, message = "Vehicle plate is required"))]
    pub vehicle_plate: String,
    #[validate(length(min = 1, message = "Emirate is required"))]
    pub emirate: String,
    pub inception_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub premium: Decimal,
    /// Amount of the first invoice; defaults to the full premium
    pub first_invoice_amount: Option<Decimal>,
    pub invoice_due_date: NaiveDate,
}

/// Response body for a created policy and its first invoice
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePolicyResponse {
    pub policy: PolicyDto,
    pub invoice: InvoiceDto,
}
