use payoff_core::{
    calculate_payoff_comparison, Debt, PayoffStatus, PayoffStrategy, MAX_PAYOFF_MONTHS,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// A debt whose minimum payment exceeds its first-month interest
fn amortizing_debt_strategy(index: usize) -> impl Strategy<Value = Debt> {
    (0u32..2_000_000u32, 0u32..4_000u32, 100u32..50_000u32).prop_map(
        move |(balance_cents, apr_bps, cushion_cents)| {
            let balance = balance_cents as f64 / 100.0;
            let apr = apr_bps as f64 / 100.0;
            let interest = balance * apr / 100.0 / 12.0;
            let minimum = (interest + cushion_cents as f64 / 100.0).ceil();
            Debt::new(format!("d{index}"), format!("Debt {index}"), balance, minimum, apr)
        },
    )
}

fn debts_strategy() -> impl Strategy<Value = Vec<Debt>> {
    (0usize..6).prop_flat_map(|n| {
        (0..n).map(amortizing_debt_strategy).collect::<Vec<_>>()
    })
}

fn extra_strategy() -> impl Strategy<Value = f64> {
    (0u32..100_000u32).prop_map(|cents| cents as f64 / 100.0)
}

fn strategies(debts: &[Debt], extra: f64) -> Vec<PayoffStrategy> {
    let result = calculate_payoff_comparison(debts, extra).unwrap();
    vec![result.snowball, result.avalanche]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Two runs over the same inputs are identical.
    #[test]
    fn prop_comparison_is_deterministic(debts in debts_strategy(), extra in extra_strategy()) {
        let first = calculate_payoff_comparison(&debts, extra).unwrap();
        let second = calculate_payoff_comparison(&debts, extra).unwrap();
        prop_assert_eq!(first, second);
    }

    /// payment == principal + interest on every ledger row.
    #[test]
    fn prop_payment_is_principal_plus_interest(debts in debts_strategy(), extra in extra_strategy()) {
        for s in strategies(&debts, extra) {
            for p in &s.monthly_payments {
                prop_assert!(
                    (p.payment - (p.principal + p.interest)).abs() < 1e-9,
                    "month {} {}: {} != {} + {}",
                    p.month, p.debt_name, p.payment, p.principal, p.interest
                );
                prop_assert!(p.payment >= 0.0 && p.interest >= 0.0 && p.remaining_balance >= 0.0);
            }
        }
    }

    /// With minimums above interest, balances never go up.
    #[test]
    fn prop_balances_never_increase(debts in debts_strategy(), extra in extra_strategy()) {
        for s in strategies(&debts, extra) {
            for debt in &debts {
                let mut previous = debt.balance;
                for p in s.payments_for(&debt.id) {
                    prop_assert!(p.remaining_balance <= previous);
                    previous = p.remaining_balance;
                }
            }
        }
    }

    /// A converged plan leaves every debt at exactly zero.
    #[test]
    fn prop_converged_plans_end_at_zero(debts in debts_strategy(), extra in extra_strategy()) {
        for s in strategies(&debts, extra) {
            prop_assert!(s.months_to_payoff <= MAX_PAYOFF_MONTHS);
            if s.status != PayoffStatus::PaidOff {
                prop_assert_eq!(s.months_to_payoff, MAX_PAYOFF_MONTHS);
                continue;
            }
            for debt in debts.iter().filter(|d| d.balance > 0.0) {
                let last = s.payments_for(&debt.id).last();
                prop_assert_eq!(last.map(|p| p.remaining_balance), Some(0.0));
            }
            let last_month = s.monthly_payments.last().map(|p| p.month).unwrap_or(0);
            prop_assert_eq!(last_month, s.months_to_payoff);
        }
    }

    /// Months are emitted in order and each debt appears at most once per month.
    #[test]
    fn prop_ledger_is_chronological(debts in debts_strategy(), extra in extra_strategy()) {
        for s in strategies(&debts, extra) {
            for w in s.monthly_payments.windows(2) {
                prop_assert!(w[0].month <= w[1].month);
                prop_assert!(w[0].month < w[1].month || w[0].debt_id != w[1].debt_id);
            }
        }
    }

    /// Zero debts cost nothing, whatever the extra payment.
    #[test]
    fn prop_zero_debts_zero_cost(extra in extra_strategy()) {
        for s in strategies(&[], extra) {
            prop_assert_eq!(s.months_to_payoff, 0);
            prop_assert_eq!(s.total_interest_paid, 0.0);
            prop_assert!(s.monthly_payments.is_empty());
        }
    }
}
