//! Database Infrastructure
//!
//! PostgreSQL access for the motor broker backend using SQLx:
//!
//! - **Pool**: connection pool configuration and creation
//! - **Repositories**: list queries returning raw nullable rows for the
//!   billing normalizer, plus the transactional policy+invoice insert
//! - **Errors**: database error taxonomy with PostgreSQL error-code mapping
//!
//! Queries are runtime-checked so the crate builds without a live database;
//! the demo-fallback path in the API layer covers the unconfigured case.

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::BillingRepository;
