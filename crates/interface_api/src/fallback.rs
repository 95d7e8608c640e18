//! Demo fallback at the data-fetch boundary
//!
//! The core aggregation is ignorant of failure handling; this module decides
//! what data the handlers feed it. Missing configuration, a backend error,
//! and an empty result set all substitute the static demo dataset plus a
//! human-readable warning string. The warning rides along in the response
//! body for the dashboard to display.

use tracing::warn;

use domain_billing::{demo_invoices, demo_policies, Invoice, Policy};
use infra_db::{BillingRepository, DatabaseError};

/// A collection plus the warning that explains where it came from
#[derive(Debug)]
pub struct Loaded<T> {
    pub data: Vec<T>,
    pub warning: Option<String>,
}

/// Resolves a fetch outcome against the demo fallback
///
/// `fetched` is `None` when no backend is configured at all.
pub fn or_demo<T>(
    fetched: Option<Result<Vec<T>, DatabaseError>>,
    demo: Vec<T>,
    what: &str,
) -> Loaded<T> {
    match fetched {
        None => Loaded {
            data: demo,
            warning: Some(format!("Backend not configured. Showing demo {what}.")),
        },
        Some(Err(e)) => {
            warn!(error = %e, what, "Backend fetch failed, falling back to demo data");
            Loaded {
                data: demo,
                warning: Some(format!("Backend error: {e}. Showing demo {what}.")),
            }
        }
        Some(Ok(data)) if data.is_empty() => Loaded {
            data: demo,
            warning: Some(format!("No {what} found. Showing demo data.")),
        },
        Some(Ok(data)) => Loaded {
            data,
            warning: None,
        },
    }
}

/// Loads and normalizes both collections, falling back per collection
///
/// This is the whole read pipeline: fetch raw rows, normalize each one,
/// substitute demo data where needed. One warning line is enough for the
/// dashboard banner; when both collections warn, the invoice warning wins.
pub async fn load_book(
    repository: Option<&BillingRepository>,
) -> (Vec<Policy>, Vec<Invoice>, Option<String>) {
    let fetched_policies = match repository {
        Some(repo) => Some(
            repo.list_policy_rows()
                .await
                .map(|rows| rows.into_iter().map(Policy::from_raw).collect()),
        ),
        None => None,
    };
    let fetched_invoices = match repository {
        Some(repo) => Some(
            repo.list_invoice_rows()
                .await
                .map(|rows| rows.into_iter().map(Invoice::from_raw).collect()),
        ),
        None => None,
    };

    let policies = or_demo(fetched_policies, demo_policies(), "policies");
    let invoices = or_demo(fetched_invoices, demo_invoices(), "invoices");

    let warning = invoices.warning.or(policies.warning);
    (policies.data, invoices.data, warning)
}
