//! HTTP API Layer
//!
//! This crate provides the REST API behind the broker billing dashboard
//! using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for policies, invoices, and reports
//! - **Middleware**: Authentication and audit logging
//! - **DTOs**: camelCase request/response shapes matching the dashboard
//! - **Fallback**: Demo-data substitution when the backend is out of reach
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(repository, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod fallback;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use infra_db::BillingRepository;

use crate::config::ApiConfig;
use crate::handlers::{health, invoice, policy, reports};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
///
/// `repository` is `None` in demo mode; every read handler then serves the
/// static fallback dataset.
#[derive(Clone)]
pub struct AppState {
    pub repository: Option<BillingRepository>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `repository` - Billing repository, or `None` for demo mode
/// * `config` - API configuration
pub fn create_router(repository: Option<BillingRepository>, config: ApiConfig) -> Router {
    let state = AppState { repository, config };

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Protected dashboard routes
    let api_routes = Router::new()
        .route(
            "/policies",
            get(policy::list_policies).post(policy::create_policy),
        )
        .route("/invoices", get(invoice::list_invoices))
        .route("/reports/billing", get(reports::billing_report))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            audit_middleware,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
