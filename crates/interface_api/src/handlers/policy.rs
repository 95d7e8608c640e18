//! Policy handlers

use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::Utc;
use validator::Validate;

use core_kernel::Money;
use domain_billing::{Invoice, Policy};

use crate::auth::{has_role, roles, Claims};
use crate::dto::{CreatePolicyRequest, CreatePolicyResponse, PoliciesResponse, PolicyDto};
use crate::error::ApiError;
use crate::fallback::load_book;
use crate::AppState;

/// GET /api/v1/policies
///
/// Lists the normalized policy book, falling back to demo data when the
/// backend is unreachable, unconfigured, or empty.
pub async fn list_policies(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<PoliciesResponse>, ApiError> {
    if !has_role(&claims, roles::POLICY_READ) {
        return Err(ApiError::Forbidden("Missing policy:read role".to_string()));
    }

    let (policies, _invoices, warning) = load_book(state.repository.as_ref()).await;

    let dtos: Vec<PolicyDto> = policies.iter().map(PolicyDto::from).collect();
    Ok(Json(PoliciesResponse {
        count: dtos.len(),
        policies: dtos,
        warning,
    }))
}

/// POST /api/v1/policies
///
/// Creates a policy together with its first pending invoice in a single
/// transaction. Requires a configured backend; demo mode is read-only.
pub async fn create_policy(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreatePolicyRequest>,
) -> Result<(StatusCode, Json<CreatePolicyResponse>), ApiError> {
    if !has_role(&claims, roles::POLICY_WRITE) {
        return Err(ApiError::Forbidden("Missing policy:write role".to_string()));
    }
    request.validate()?;

    let Some(repository) = state.repository.as_ref() else {
        return Err(ApiError::Unavailable(
            "Backend not configured; policies cannot be created in demo mode".to_string(),
        ));
    };

    let policy = Policy::new(
        request.policy_number,
        request.insured_name,
        request.vehicle_plate,
        request.emirate,
        request.inception_date,
        request.expiry_date,
        Money::new(request.premium),
    )?;

    let invoice_amount = request.first_invoice_amount.unwrap_or(request.premium);
    let invoice = Invoice::new(
        policy.id.clone(),
        Utc::now().date_naive(),
        request.invoice_due_date,
        Money::new(invoice_amount),
    )?;

    repository.create_policy_with_invoice(&policy, &invoice).await?;

    tracing::info!(
        policy_id = %policy.id,
        policy_number = %policy.policy_number,
        user = %claims.sub,
        "Policy created with first invoice"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatePolicyResponse {
            policy: PolicyDto::from(&policy),
            invoice: crate::dto::InvoiceDto::resolve(
                &invoice,
                &crate::dto::invoice::policy_number_index(std::slice::from_ref(&policy)),
            ),
        }),
    ))
}
