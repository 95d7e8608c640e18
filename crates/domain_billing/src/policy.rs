//! Motor policy records and normalization
//!
//! A [`Policy`] represents one underwritten motor insurance contract. Records
//! are constructed fresh on every fetch cycle, never mutated in place, and
//! replaced wholesale on the next fetch.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Money, PolicyId};

use crate::error::BillingError;
use crate::{MISSING_NUMBER, MISSING_TEXT};

/// Policy lifecycle status
///
/// Coercion from backend values is total: only the exact strings
/// `"cancelled"` and `"expired"` map to their variants, everything else
/// (including absent or unrecognized values) falls through to `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyStatus {
    Active,
    Cancelled,
    Expired,
}

impl PolicyStatus {
    /// Coerces a raw backend status value into a policy status
    pub fn coerce(raw: Option<&str>) -> Self {
        match raw {
            Some("cancelled") => PolicyStatus::Cancelled,
            Some("expired") => PolicyStatus::Expired,
            _ => PolicyStatus::Active,
        }
    }

    /// Returns the lowercase wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyStatus::Active => "active",
            PolicyStatus::Cancelled => "cancelled",
            PolicyStatus::Expired => "expired",
        }
    }
}

impl fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A raw policy row as returned by the backend
///
/// Every field except `id` is nullable. This is the input shape of the
/// normalizer and carries backend-native naming.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPolicyRow {
    pub id: String,
    pub policy_number: Option<String>,
    pub insured_name: Option<String>,
    pub vehicle_plate: Option<String>,
    pub emirate: Option<String>,
    pub inception_date: Option<String>,
    pub expiry_date: Option<String>,
    pub premium: Option<Decimal>,
    pub status: Option<String>,
}

impl RawPolicyRow {
    /// Creates a row with only the identifier set, all other fields absent
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// One underwritten motor insurance contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Opaque unique identifier
    pub id: String,
    /// Display identifier (broker-assigned)
    pub policy_number: String,
    pub insured_name: String,
    pub vehicle_plate: String,
    pub emirate: String,
    /// ISO-8601 date, empty when the backend had none
    pub inception_date: String,
    /// ISO-8601 date, empty when the backend had none
    pub expiry_date: String,
    /// Annual written premium in AED
    pub premium: Money,
    pub status: PolicyStatus,
}

impl Policy {
    /// Normalizes a raw backend row into a well-formed policy
    ///
    /// Total and pure: nulls resolve to fixed defaults, unrecognized status
    /// values coerce to `Active`, and no input is ever rejected.
    pub fn from_raw(row: RawPolicyRow) -> Self {
        Self {
            id: row.id,
            policy_number: row.policy_number.unwrap_or_else(|| MISSING_NUMBER.to_string()),
            insured_name: row.insured_name.unwrap_or_else(|| MISSING_TEXT.to_string()),
            vehicle_plate: row.vehicle_plate.unwrap_or_else(|| MISSING_TEXT.to_string()),
            emirate: row.emirate.unwrap_or_else(|| MISSING_TEXT.to_string()),
            inception_date: row.inception_date.unwrap_or_default(),
            expiry_date: row.expiry_date.unwrap_or_default(),
            premium: Money::new(row.premium.unwrap_or_default()),
            status: PolicyStatus::coerce(row.status.as_deref()),
        }
    }

    /// Creates a new policy for the broker's create flow
    ///
    /// The policy starts `Active` with a fresh time-ordered identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the premium is negative or the expiry date
    /// precedes the inception date.
    pub fn new(
        policy_number: impl Into<String>,
        insured_name: impl Into<String>,
        vehicle_plate: impl Into<String>,
        emirate: impl Into<String>,
        inception_date: NaiveDate,
        expiry_date: NaiveDate,
        premium: Money,
    ) -> Result<Self, BillingError> {
        if premium.is_negative() {
            return Err(BillingError::NegativePremium(premium.amount()));
        }
        if expiry_date < inception_date {
            return Err(BillingError::InvalidPolicyPeriod {
                inception: inception_date,
                expiry: expiry_date,
            });
        }

        Ok(Self {
            id: PolicyId::new_v7().to_string(),
            policy_number: policy_number.into(),
            insured_name: insured_name.into(),
            vehicle_plate: vehicle_plate.into(),
            emirate: emirate.into(),
            inception_date: inception_date.format("%Y-%m-%d").to_string(),
            expiry_date: expiry_date.format("%Y-%m-%d").to_string(),
            premium,
            status: PolicyStatus::Active,
        })
    }

    /// Returns true if the policy is in force
    pub fn is_active(&self) -> bool {
        self.status == PolicyStatus::Active
    }
}
