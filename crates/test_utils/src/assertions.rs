//! Custom Test Assertions
//!
//! Assertion helpers for billing figures that give more meaningful error
//! messages than standard assertions.

use core_kernel::Money;
use domain_billing::BillingStats;

/// Asserts that a Money value is strictly positive
pub fn assert_money_positive(money: &Money) {
    assert!(money.is_positive(), "Expected positive amount, got {money}");
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(money.is_zero(), "Expected zero amount, got {money}");
}

/// Asserts every figure of a stats block at once
///
/// # Panics
///
/// Panics with a per-field message on the first mismatch.
pub fn assert_billing_stats(
    actual: &BillingStats,
    total_premium: Money,
    total_collected: Money,
    total_outstanding: Money,
    active_policies: usize,
    overdue_invoices: usize,
) {
    assert_eq!(
        actual.total_premium, total_premium,
        "total_premium mismatch: got {}, expected {}",
        actual.total_premium, total_premium
    );
    assert_eq!(
        actual.total_collected, total_collected,
        "total_collected mismatch: got {}, expected {}",
        actual.total_collected, total_collected
    );
    assert_eq!(
        actual.total_outstanding, total_outstanding,
        "total_outstanding mismatch: got {}, expected {}",
        actual.total_outstanding, total_outstanding
    );
    assert_eq!(
        actual.active_policies, active_policies,
        "active_policies mismatch"
    );
    assert_eq!(
        actual.overdue_invoices, overdue_invoices,
        "overdue_invoices mismatch"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_billing::{compute_billing_stats, demo_invoices, demo_policies};
    use rust_decimal_macros::dec;

    #[test]
    fn test_assert_billing_stats_on_demo_data() {
        let stats = compute_billing_stats(&demo_policies(), &demo_invoices());
        assert_billing_stats(
            &stats,
            Money::new(dec!(41200)),
            Money::new(dec!(6250)),
            Money::new(dec!(15700)),
            2,
            1,
        );
    }
}
