//! Billing repository
//!
//! Database access for the dashboard's two tables: `policies` and `invoices`.
//! List queries return the raw nullable row shapes consumed by the billing
//! normalizer; the backend is the source of truth for statuses and the
//! normalizer handles whatever it sends back.
//!
//! Queries are runtime-checked (no compile-time macro verification), so this
//! crate builds without a live database.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::debug;

use domain_billing::{Invoice, Policy, RawInvoiceRow, RawPolicyRow};

use crate::error::DatabaseError;

/// Single consistent cap for list queries
///
/// The dashboard shows at most a few hundred records; anything beyond this
/// is noise on screen.
const LIST_LIMIT: i64 = 200;

/// Repository for policies and invoices
#[derive(Debug, Clone)]
pub struct BillingRepository {
    pool: PgPool,
}

impl BillingRepository {
    /// Creates a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Verifies database connectivity with a trivial query
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Fetches raw policy rows, newest inception first
    ///
    /// Every field except `id` may be NULL; defaulting is the normalizer's
    /// job, not the query's.
    pub async fn list_policy_rows(&self) -> Result<Vec<RawPolicyRow>, DatabaseError> {
        let rows = sqlx::query(
            r#"
            SELECT
                id::text AS id,
                policy_number,
                insured_name,
                vehicle_plate,
                emirate,
                inception_date::text AS inception_date,
                expiry_date::text AS expiry_date,
                premium,
                status
            FROM policies
            ORDER BY inception_date DESC NULLS LAST
            LIMIT $1
            "#,
        )
        .bind(LIST_LIMIT)
        .try_map(|row: PgRow| {
            Ok(RawPolicyRow {
                id: row.try_get("id")?,
                policy_number: row.try_get("policy_number")?,
                insured_name: row.try_get("insured_name")?,
                vehicle_plate: row.try_get("vehicle_plate")?,
                emirate: row.try_get("emirate")?,
                inception_date: row.try_get("inception_date")?,
                expiry_date: row.try_get("expiry_date")?,
                premium: row.try_get("premium")?,
                status: row.try_get("status")?,
            })
        })
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Fetched policy rows");
        Ok(rows)
    }

    /// Fetches raw invoice rows, newest issue first
    pub async fn list_invoice_rows(&self) -> Result<Vec<RawInvoiceRow>, DatabaseError> {
        let rows = sqlx::query(
            r#"
            SELECT
                id::text AS id,
                policy_id::text AS policy_id,
                invoice_number,
                issue_date::text AS issue_date,
                due_date::text AS due_date,
                amount,
                status
            FROM invoices
            ORDER BY issue_date DESC NULLS LAST
            LIMIT $1
            "#,
        )
        .bind(LIST_LIMIT)
        .try_map(|row: PgRow| {
            Ok(RawInvoiceRow {
                id: row.try_get("id")?,
                policy_id: row.try_get("policy_id")?,
                invoice_number: row.try_get("invoice_number")?,
                issue_date: row.try_get("issue_date")?,
                due_date: row.try_get("due_date")?,
                amount: row.try_get("amount")?,
                status: row.try_get("status")?,
            })
        })
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Fetched invoice rows");
        Ok(rows)
    }

    /// Inserts a policy together with its first invoice
    ///
    /// Both rows land in a single transaction: either the policy and its
    /// invoice are created together, or neither is.
    pub async fn create_policy_with_invoice(
        &self,
        policy: &Policy,
        invoice: &Invoice,
    ) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO policies (
                id, policy_number, insured_name, vehicle_plate, emirate,
                inception_date, expiry_date, premium, status
            ) VALUES ($1, $2, $3, $4, $5, $6::date, $7::date, $8, $9)
            "#,
        )
        .bind(&policy.id)
        .bind(&policy.policy_number)
        .bind(&policy.insured_name)
        .bind(&policy.vehicle_plate)
        .bind(&policy.emirate)
        .bind(&policy.inception_date)
        .bind(&policy.expiry_date)
        .bind(policy.premium.amount())
        .bind(policy.status.as_str())
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO invoices (
                id, policy_id, invoice_number, issue_date, due_date, amount, status
            ) VALUES ($1, $2, $3, $4::date, $5::date, $6, $7)
            "#,
        )
        .bind(&invoice.id)
        .bind(&invoice.policy_id)
        .bind(&invoice.invoice_number)
        .bind(&invoice.issue_date)
        .bind(&invoice.due_date)
        .bind(invoice.amount.amount())
        .bind(invoice.status.as_str())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(
            policy_id = %policy.id,
            invoice_id = %invoice.id,
            "Created policy with first invoice"
        );
        Ok(())
    }
}
