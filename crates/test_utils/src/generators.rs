//! Property-Based Test Generators
//!
//! Proptest strategies for raw backend rows and normalized records. Raw-row
//! strategies deliberately include absent and unrecognized values, since the
//! normalizer must accept anything the backend produces.

use fake::faker::company::en::CompanyName;
use fake::Fake;
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::Money;
use domain_billing::{RawInvoiceRow, RawPolicyRow};

/// Strategy for amounts in fils, spanning negative through large positive
pub fn amount_fils_strategy() -> impl Strategy<Value = i64> {
    -10_000_000i64..100_000_000i64
}

/// Strategy for non-negative Money values
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (0i64..100_000_000i64).prop_map(Money::from_fils)
}

/// Strategy for arbitrary-sign Money values
pub fn money_strategy() -> impl Strategy<Value = Money> {
    amount_fils_strategy().prop_map(Money::from_fils)
}

/// Strategy for raw policy status values, valid and garbage alike
pub fn raw_policy_status_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("active".to_string())),
        Just(Some("cancelled".to_string())),
        Just(Some("expired".to_string())),
        "[a-z]{1,12}".prop_map(Some),
    ]
}

/// Strategy for raw invoice status values, valid and garbage alike
pub fn raw_invoice_status_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("pending".to_string())),
        Just(Some("paid".to_string())),
        Just(Some("overdue".to_string())),
        "[a-z]{1,12}".prop_map(Some),
    ]
}

/// Strategy for optional ISO dates, including absent values
pub fn raw_date_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        (2020u32..2030u32, 1u32..13u32, 1u32..29u32)
            .prop_map(|(y, m, d)| Some(format!("{y:04}-{m:02}-{d:02}"))),
    ]
}

/// Strategy for optional decimal amounts
pub fn raw_amount_strategy() -> impl Strategy<Value = Option<Decimal>> {
    prop_oneof![
        Just(None),
        amount_fils_strategy().prop_map(|fils| Some(Decimal::new(fils, 2))),
    ]
}

/// Strategy for raw policy rows with any mix of present and absent fields
pub fn raw_policy_row_strategy() -> impl Strategy<Value = RawPolicyRow> {
    (
        "pol-[0-9]{1,6}",
        proptest::option::of(Just(fake_insured_name())),
        raw_date_strategy(),
        raw_date_strategy(),
        raw_amount_strategy(),
        raw_policy_status_strategy(),
    )
        .prop_map(|(id, insured_name, inception, expiry, premium, status)| {
            RawPolicyRow {
                id,
                policy_number: None,
                insured_name,
                vehicle_plate: None,
                emirate: None,
                inception_date: inception,
                expiry_date: expiry,
                premium,
                status,
            }
        })
}

/// Strategy for raw invoice rows with any mix of present and absent fields
pub fn raw_invoice_row_strategy() -> impl Strategy<Value = RawInvoiceRow> {
    (
        "inv-[0-9]{1,6}",
        proptest::option::of("pol-[0-9]{1,6}"),
        raw_date_strategy(),
        raw_date_strategy(),
        raw_amount_strategy(),
        raw_invoice_status_strategy(),
    )
        .prop_map(|(id, policy_id, issue, due, amount, status)| RawInvoiceRow {
            id,
            policy_id,
            invoice_number: None,
            issue_date: issue,
            due_date: due,
            amount,
            status,
        })
}

/// Generates a realistic insured company name
pub fn fake_insured_name() -> String {
    let name: String = CompanyName().fake();
    format!("{name} LLC")
}
