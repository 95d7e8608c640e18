//! Test Data Builders
//!
//! Builder patterns for constructing normalized policies and invoices with
//! sensible defaults, so tests specify only the fields they care about.

use core_kernel::Money;
use domain_billing::{Invoice, InvoiceStatus, Policy, PolicyStatus};

use crate::fixtures::MoneyFixtures;

/// Builder for normalized test policies
pub struct TestPolicyBuilder {
    id: String,
    policy_number: String,
    insured_name: String,
    vehicle_plate: String,
    emirate: String,
    inception_date: String,
    expiry_date: String,
    premium: Money,
    status: PolicyStatus,
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            id: "pol-test".to_string(),
            policy_number: "DXB-MTR-2025-0001".to_string(),
            insured_name: "Test Motors LLC".to_string(),
            vehicle_plate: "D 1".to_string(),
            emirate: "Dubai".to_string(),
            inception_date: "2025-01-01".to_string(),
            expiry_date: "2025-12-31".to_string(),
            premium: MoneyFixtures::premium(),
            status: PolicyStatus::Active,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_policy_number(mut self, number: impl Into<String>) -> Self {
        self.policy_number = number.into();
        self
    }

    pub fn with_premium(mut self, premium: Money) -> Self {
        self.premium = premium;
        self
    }

    pub fn with_status(mut self, status: PolicyStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the policy
    pub fn build(self) -> Policy {
        Policy {
            id: self.id,
            policy_number: self.policy_number,
            insured_name: self.insured_name,
            vehicle_plate: self.vehicle_plate,
            emirate: self.emirate,
            inception_date: self.inception_date,
            expiry_date: self.expiry_date,
            premium: self.premium,
            status: self.status,
        }
    }
}

/// Builder for normalized test invoices
pub struct TestInvoiceBuilder {
    id: String,
    policy_id: String,
    invoice_number: String,
    issue_date: String,
    due_date: String,
    amount: Money,
    status: InvoiceStatus,
}

impl Default for TestInvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestInvoiceBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            id: "inv-test".to_string(),
            policy_id: "pol-test".to_string(),
            invoice_number: "INV-UAE-0001".to_string(),
            issue_date: "2025-01-05".to_string(),
            due_date: "2025-01-20".to_string(),
            amount: MoneyFixtures::installment(),
            status: InvoiceStatus::Pending,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_policy_id(mut self, policy_id: impl Into<String>) -> Self {
        self.policy_id = policy_id.into();
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_status(mut self, status: InvoiceStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the invoice
    pub fn build(self) -> Invoice {
        Invoice {
            id: self.id,
            policy_id: self.policy_id,
            invoice_number: self.invoice_number,
            issue_date: self.issue_date,
            due_date: self.due_date,
            amount: self.amount,
            status: self.status,
        }
    }
}
