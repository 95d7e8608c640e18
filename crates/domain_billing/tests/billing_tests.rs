//! Comprehensive tests for domain_billing

use rust_decimal_macros::dec;

use core_kernel::Money;

use domain_billing::demo::{demo_invoices, demo_policies};
use domain_billing::invoice::{Invoice, InvoiceStatus};
use domain_billing::policy::{Policy, PolicyStatus, RawPolicyRow};
use domain_billing::stats::{compute_billing_stats, invoice_status_breakdown, BillingStats};
use domain_billing::BillingError;

use test_utils::assertions::{assert_billing_stats, assert_money_positive, assert_money_zero};
use test_utils::builders::{TestInvoiceBuilder, TestPolicyBuilder};
use test_utils::fixtures::{DemoExpectations, MoneyFixtures, RowFixtures, TemporalFixtures};

// ============================================================================
// Normalizer Tests
// ============================================================================

mod normalizer_tests {
    use super::*;

    #[test]
    fn test_all_null_policy_row_gets_documented_defaults() {
        let policy = Policy::from_raw(RowFixtures::sparse_policy_row());

        assert_eq!(policy.policy_number, "N/A");
        assert_eq!(policy.insured_name, "\u{2014}");
        assert_eq!(policy.vehicle_plate, "\u{2014}");
        assert_eq!(policy.emirate, "\u{2014}");
        assert_eq!(policy.inception_date, "");
        assert_eq!(policy.expiry_date, "");
        assert_eq!(policy.premium, MoneyFixtures::zero());
        assert_eq!(policy.status, PolicyStatus::Active);
    }

    #[test]
    fn test_all_null_invoice_row_gets_documented_defaults() {
        let invoice = Invoice::from_raw(RowFixtures::sparse_invoice_row());

        assert_eq!(invoice.policy_id, "");
        assert_eq!(invoice.invoice_number, "N/A");
        assert_eq!(invoice.issue_date, "");
        assert_eq!(invoice.due_date, "");
        assert_money_zero(&invoice.amount);
        assert_eq!(invoice.status, InvoiceStatus::Pending);
    }

    #[test]
    fn test_populated_rows_pass_values_through() {
        let policy = Policy::from_raw(RowFixtures::policy_row());
        assert_eq!(policy.policy_number, "DXB-MTR-2025-0100");
        assert_eq!(policy.premium, MoneyFixtures::premium());
        assert!(policy.is_active());

        let invoice = Invoice::from_raw(RowFixtures::invoice_row());
        assert_eq!(invoice.policy_id, "pol-100");
        assert_eq!(invoice.amount, MoneyFixtures::installment());
        assert_eq!(invoice.status, InvoiceStatus::Pending);
    }

    #[test]
    fn test_policy_status_lands_in_three_way_enum() {
        for raw in [
            None,
            Some("active"),
            Some("cancelled"),
            Some("expired"),
            Some("Cancelled"),
            Some("foo"),
            Some(""),
        ] {
            let status = PolicyStatus::coerce(raw);
            let is_exact_match = raw == Some("cancelled") || raw == Some("expired");
            assert_eq!(status != PolicyStatus::Active, is_exact_match);
        }
    }

    #[test]
    fn test_invoice_status_lands_in_three_way_enum() {
        for raw in [
            None,
            Some("pending"),
            Some("paid"),
            Some("overdue"),
            Some("Paid"),
            Some("foo"),
            Some(""),
        ] {
            let status = InvoiceStatus::coerce(raw);
            let is_exact_match = raw == Some("paid") || raw == Some("overdue");
            assert_eq!(status != InvoiceStatus::Pending, is_exact_match);
        }
    }

    #[test]
    fn test_normalizing_already_normalized_values_is_a_noop() {
        let once = Policy::from_raw(RowFixtures::policy_row());

        // Feed the normalized record's own values back through
        let roundtrip = RawPolicyRow {
            id: once.id.clone(),
            policy_number: Some(once.policy_number.clone()),
            insured_name: Some(once.insured_name.clone()),
            vehicle_plate: Some(once.vehicle_plate.clone()),
            emirate: Some(once.emirate.clone()),
            inception_date: Some(once.inception_date.clone()),
            expiry_date: Some(once.expiry_date.clone()),
            premium: Some(once.premium.amount()),
            status: Some(once.status.as_str().to_string()),
        };
        let twice = Policy::from_raw(roundtrip);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_raw_rows_deserialize_from_backend_json() {
        let json = r#"{
            "id": "pol-5",
            "policy_number": null,
            "insured_name": "Ajman Fleet Co",
            "vehicle_plate": null,
            "emirate": "Ajman",
            "inception_date": "2025-02-01",
            "expiry_date": null,
            "premium": 4400.25,
            "status": null
        }"#;

        let row: RawPolicyRow = serde_json::from_str(json).unwrap();
        let policy = Policy::from_raw(row);

        assert_eq!(policy.policy_number, "N/A");
        assert_eq!(policy.insured_name, "Ajman Fleet Co");
        assert_eq!(policy.vehicle_plate, "\u{2014}");
        assert_eq!(policy.expiry_date, "");
        assert_eq!(policy.premium.amount(), dec!(4400.25));
        assert_eq!(policy.status, PolicyStatus::Active);
    }
}

// ============================================================================
// Create Flow Tests
// ============================================================================

mod create_flow_tests {
    use super::*;

    #[test]
    fn test_create_policy_with_fixture_dates() {
        let policy = Policy::new(
            "DXB-MTR-2025-0500",
            "Jebel Ali Logistics",
            "D 4040",
            "Dubai",
            TemporalFixtures::inception(),
            TemporalFixtures::expiry(),
            MoneyFixtures::premium(),
        )
        .unwrap();

        assert_eq!(policy.inception_date, "2025-01-01");
        assert_eq!(policy.expiry_date, "2025-12-31");
        assert_money_positive(&policy.premium);
        assert!(policy.is_active());
    }

    #[test]
    fn test_create_rejects_negative_amounts() {
        let policy = Policy::new(
            "DXB-MTR-2025-0500",
            "Jebel Ali Logistics",
            "D 4040",
            "Dubai",
            TemporalFixtures::inception(),
            TemporalFixtures::expiry(),
            MoneyFixtures::negative(),
        );
        assert!(matches!(policy, Err(BillingError::NegativePremium(_))));

        let invoice = Invoice::new(
            "pol-1",
            TemporalFixtures::issue(),
            TemporalFixtures::due(),
            MoneyFixtures::negative(),
        );
        assert!(matches!(invoice, Err(BillingError::NegativeAmount(_))));
    }

    #[test]
    fn test_created_invoice_starts_pending() {
        let invoice = Invoice::new(
            "pol-1",
            TemporalFixtures::issue(),
            TemporalFixtures::due(),
            MoneyFixtures::installment(),
        )
        .unwrap();

        assert_eq!(invoice.issue_date, "2025-01-05");
        assert_eq!(invoice.due_date, "2025-01-20");
        assert_eq!(invoice.status, InvoiceStatus::Pending);
    }
}

// ============================================================================
// Aggregator Tests
// ============================================================================

mod aggregator_tests {
    use super::*;

    #[test]
    fn test_empty_inputs_yield_all_zero_stats() {
        let stats = compute_billing_stats(&[], &[]);
        assert_eq!(stats, BillingStats::empty());
        assert_money_zero(&stats.total_premium);
    }

    #[test]
    fn test_worked_example_from_the_dashboard() {
        let policies = vec![TestPolicyBuilder::new()
            .with_id("pol-1")
            .with_policy_number("DXB-MTR-2025-0101")
            .with_premium(Money::new(dec!(12500)))
            .build()];
        let invoices = vec![
            TestInvoiceBuilder::new()
                .with_id("inv-2002")
                .with_amount(Money::new(dec!(6250)))
                .with_status(InvoiceStatus::Paid)
                .build(),
            TestInvoiceBuilder::new()
                .with_id("inv-2003")
                .with_amount(Money::new(dec!(9450)))
                .with_status(InvoiceStatus::Overdue)
                .build(),
        ];

        let stats = compute_billing_stats(&policies, &invoices);
        assert_billing_stats(
            &stats,
            Money::new(dec!(12500)),
            Money::new(dec!(6250)),
            Money::new(dec!(9450)),
            1,
            1,
        );
    }

    #[test]
    fn test_premium_sums_over_all_statuses() {
        let policies = vec![
            TestPolicyBuilder::new()
                .with_id("pol-a")
                .with_premium(Money::new(dec!(100)))
                .build(),
            TestPolicyBuilder::new()
                .with_id("pol-b")
                .with_premium(Money::new(dec!(200)))
                .with_status(PolicyStatus::Cancelled)
                .build(),
            TestPolicyBuilder::new()
                .with_id("pol-c")
                .with_premium(Money::new(dec!(300)))
                .with_status(PolicyStatus::Expired)
                .build(),
        ];

        let stats = compute_billing_stats(&policies, &[]);
        assert_eq!(stats.total_premium.amount(), dec!(600));
        assert_eq!(stats.active_policies, 1);
    }

    #[test]
    fn test_pending_counts_toward_outstanding_not_overdue() {
        let invoices = vec![
            TestInvoiceBuilder::new()
                .with_id("inv-a")
                .with_amount(Money::new(dec!(100)))
                .build(),
            TestInvoiceBuilder::new()
                .with_id("inv-b")
                .with_amount(Money::new(dec!(200)))
                .with_status(InvoiceStatus::Overdue)
                .build(),
        ];

        let stats = compute_billing_stats(&[], &invoices);
        assert_eq!(stats.total_outstanding.amount(), dec!(300));
        assert_eq!(stats.total_collected, Money::ZERO);
        assert_eq!(stats.overdue_invoices, 1);
    }

    #[test]
    fn test_outstanding_and_collected_need_not_sum_to_premium() {
        let policies = vec![TestPolicyBuilder::new()
            .with_premium(Money::new(dec!(999)))
            .build()];
        let invoices = vec![TestInvoiceBuilder::new()
            .with_amount(Money::new(dec!(50)))
            .with_status(InvoiceStatus::Paid)
            .build()];

        let stats = compute_billing_stats(&policies, &invoices);
        assert_ne!(
            stats.total_collected + stats.total_outstanding,
            stats.total_premium
        );
    }

    #[test]
    fn test_breakdown_matches_statuses() {
        let invoices: Vec<Invoice> = [
            InvoiceStatus::Pending,
            InvoiceStatus::Pending,
            InvoiceStatus::Paid,
            InvoiceStatus::Overdue,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, status)| {
            TestInvoiceBuilder::new()
                .with_id(format!("inv-{i}"))
                .with_amount(Money::new(dec!(1)))
                .with_status(status)
                .build()
        })
        .collect();

        let breakdown = invoice_status_breakdown(&invoices);
        assert_eq!(breakdown.pending, 2);
        assert_eq!(breakdown.paid, 1);
        assert_eq!(breakdown.overdue, 1);
        assert_eq!(breakdown.overdue_rate_percent(), Some(dec!(25)));
    }
}

// ============================================================================
// Aggregator Property Tests
// ============================================================================

mod aggregator_proptests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::generators::{money_strategy, positive_money_strategy};

    proptest! {
        #[test]
        fn premium_total_is_the_sum_of_built_policies(
            premiums in proptest::collection::vec(positive_money_strategy(), 0..30)
        ) {
            let policies: Vec<Policy> = premiums
                .iter()
                .enumerate()
                .map(|(i, premium)| {
                    TestPolicyBuilder::new()
                        .with_id(format!("pol-{i}"))
                        .with_premium(*premium)
                        .build()
                })
                .collect();

            let stats = compute_billing_stats(&policies, &[]);
            let expected: Money = premiums.iter().sum();
            prop_assert_eq!(stats.total_premium, expected);
        }

        #[test]
        fn conservation_holds_for_any_amount_signs(
            amounts in proptest::collection::vec(money_strategy(), 0..30),
            statuses in proptest::collection::vec(0usize..3, 30)
        ) {
            let invoices: Vec<Invoice> = amounts
                .iter()
                .zip(&statuses)
                .enumerate()
                .map(|(i, (amount, pick))| {
                    let status = [
                        InvoiceStatus::Pending,
                        InvoiceStatus::Paid,
                        InvoiceStatus::Overdue,
                    ][*pick];
                    TestInvoiceBuilder::new()
                        .with_id(format!("inv-{i}"))
                        .with_amount(*amount)
                        .with_status(status)
                        .build()
                })
                .collect();

            let stats = compute_billing_stats(&[], &invoices);
            let total: Money = invoices.iter().map(|i| i.amount).sum();
            prop_assert_eq!(stats.total_collected + stats.total_outstanding, total);
        }
    }
}

// ============================================================================
// Demo Fallback Dataset Tests
// ============================================================================

mod demo_tests {
    use super::*;

    #[test]
    fn test_aggregator_handles_demo_data_like_live_data() {
        let stats = compute_billing_stats(&demo_policies(), &demo_invoices());

        assert_billing_stats(
            &stats,
            Money::new(DemoExpectations::total_premium()),
            Money::new(DemoExpectations::total_collected()),
            Money::new(DemoExpectations::total_outstanding()),
            DemoExpectations::ACTIVE_POLICIES,
            DemoExpectations::OVERDUE_INVOICES,
        );
    }

    #[test]
    fn test_demo_calls_return_fresh_copies() {
        let mut first = demo_policies();
        first.clear();
        assert_eq!(demo_policies().len(), 3);
    }
}

// ============================================================================
// Wire Format Tests
// ============================================================================

mod serde_tests {
    use super::*;

    #[test]
    fn test_policy_serializes_with_lowercase_status() {
        let json = serde_json::to_value(&demo_policies()[2]).unwrap();
        assert_eq!(json["status"], "expired");
        assert_eq!(json["policy_number"], "SHJ-MTR-2024-0912");
    }

    #[test]
    fn test_invoice_roundtrips_through_json() {
        let original = demo_invoices().remove(2);
        let back: Invoice =
            serde_json::from_str(&serde_json::to_string(&original).unwrap()).unwrap();
        assert_eq!(original, back);
    }
}
