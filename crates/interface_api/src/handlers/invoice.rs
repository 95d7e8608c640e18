//! Invoice handlers

use axum::{extract::State, Extension, Json};

use crate::auth::{has_role, roles, Claims};
use crate::dto::invoice::policy_number_index;
use crate::dto::{InvoiceDto, InvoicesResponse};
use crate::error::ApiError;
use crate::fallback::load_book;
use crate::AppState;

/// GET /api/v1/invoices
///
/// Lists the normalized invoices with their policy numbers resolved for
/// display. Both collections are fetched so the join works against whatever
/// dataset (live or demo) the policies came from.
pub async fn list_invoices(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<InvoicesResponse>, ApiError> {
    if !has_role(&claims, roles::INVOICE_READ) {
        return Err(ApiError::Forbidden("Missing invoice:read role".to_string()));
    }

    let (policies, invoices, warning) = load_book(state.repository.as_ref()).await;

    let index = policy_number_index(&policies);
    let dtos: Vec<InvoiceDto> = invoices
        .iter()
        .map(|invoice| InvoiceDto::resolve(invoice, &index))
        .collect();

    Ok(Json(InvoicesResponse {
        count: dtos.len(),
        invoices: dtos,
        warning,
    }))
}
