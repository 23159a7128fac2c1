//! Payoff simulator: month-by-month amortization with minimum-payment rollover.
//!
//! Algorithm (deterministic, per month):
//! 1) pool = extra payment + minimums freed by debts already paid off
//! 2) every open debt, in sorted order, pays min(minimum, balance + interest)
//! 3) a debt cleared by its own minimum frees that minimum into the pool
//!    right away and for every later month
//! 4) the pool goes to the first open debt in sorted order (the target);
//!    a target cleared here frees its minimum from next month on
//! 5) one ledger row per (month, debt) is emitted after step 4
//!
//! The loop ends when every debt is paid off or the month cap is hit.

use crate::debt::Debt;
use crate::method::PayoffMethod;
use crate::strategy::{DebtPayment, MonthlyPayment, PayoffStatus, PayoffStrategy};

/// Safety cap on simulated months (50 years)
pub const MAX_PAYOFF_MONTHS: u32 = 600;

/// Upper bound for a configured cap (100 years)
pub const MONTH_CAP_LIMIT: u32 = 1200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub max_months: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_months: MAX_PAYOFF_MONTHS,
        }
    }
}

impl SimulationConfig {
    /// Clamped to [`MONTH_CAP_LIMIT`]
    pub fn with_max_months(mut self, max_months: u32) -> Self {
        self.max_months = max_months.min(MONTH_CAP_LIMIT);
        self
    }
}

/// Per-run mutable state for one input debt
#[derive(Debug, Clone)]
struct WorkingDebt<'a> {
    debt: &'a Debt,
    current_balance: f64,
    paid_off: bool,
}

impl<'a> WorkingDebt<'a> {
    fn new(debt: &'a Debt) -> Self {
        Self {
            debt,
            current_balance: debt.balance,
            paid_off: debt.is_paid_off(),
        }
    }
}

/// Payment, principal and interest booked against one debt this month
#[derive(Debug, Clone, Copy, Default)]
struct MonthEntry {
    payment: f64,
    principal: f64,
    interest: f64,
}

/// Run the simulation over debts already sorted by `method`.
///
/// Inputs are assumed valid (see [`crate::validation`]); `method` only labels
/// the output.
pub fn simulate(
    sorted_debts: &[Debt],
    extra_payment: f64,
    method: PayoffMethod,
    config: &SimulationConfig,
) -> PayoffStrategy {
    let mut working: Vec<WorkingDebt<'_>> = sorted_debts.iter().map(WorkingDebt::new).collect();

    // Debts that start at zero free their minimum from month 1.
    let mut rollover: f64 = working
        .iter()
        .filter(|w| w.paid_off)
        .map(|w| w.debt.minimum_payment)
        .sum();

    let mut monthly_payments = Vec::new();
    let mut total_interest = 0.0;
    let mut month: u32 = 0;

    while working.iter().any(|w| !w.paid_off) && month < config.max_months {
        month += 1;

        let mut remaining_extra = extra_payment + rollover;
        let mut entries: Vec<Option<MonthEntry>> = vec![None; working.len()];

        for (slot, w) in entries.iter_mut().zip(working.iter_mut()) {
            if w.paid_off {
                continue;
            }

            let interest = w.current_balance * w.debt.monthly_rate();
            let payoff_amount = w.current_balance + interest;
            let applied = w.debt.minimum_payment.min(payoff_amount);
            let principal = applied - interest;

            if applied >= payoff_amount {
                w.current_balance = 0.0;
            } else {
                w.current_balance -= principal;
            }
            total_interest += interest;

            *slot = Some(MonthEntry {
                payment: applied,
                principal,
                interest,
            });

            if w.current_balance <= 0.0 {
                w.paid_off = true;
                remaining_extra += w.debt.minimum_payment;
                rollover += w.debt.minimum_payment;
            }
        }

        if remaining_extra > 0.0 {
            if let Some(target) = working.iter().position(|w| !w.paid_off) {
                let w = &mut working[target];
                let amount = remaining_extra.min(w.current_balance);
                w.current_balance -= amount;

                // An open target was processed above, so its entry exists.
                if let Some(entry) = entries[target].as_mut() {
                    entry.payment += amount;
                    entry.principal += amount;
                }

                if w.current_balance <= 0.0 {
                    w.paid_off = true;
                    rollover += w.debt.minimum_payment;
                }
            }
        }

        for (entry, w) in entries.iter().zip(working.iter()) {
            if let Some(entry) = entry {
                monthly_payments.push(MonthlyPayment {
                    month,
                    debt_id: w.debt.id.clone(),
                    debt_name: w.debt.name.clone(),
                    payment: entry.payment,
                    principal: entry.principal,
                    interest: entry.interest,
                    remaining_balance: w.current_balance.max(0.0),
                });
            }
        }
    }

    let status = if working.iter().all(|w| w.paid_off) {
        PayoffStatus::PaidOff
    } else {
        tracing::warn!(
            method = %method,
            max_months = config.max_months,
            "payoff plan did not converge before the month cap"
        );
        PayoffStatus::MonthCapReached
    };

    let total_interest_paid = round_cents(total_interest);
    tracing::debug!(
        method = %method,
        months = month,
        total_interest_paid,
        ?status,
        "payoff simulation finished"
    );

    PayoffStrategy {
        method,
        monthly_payments,
        total_interest_paid,
        months_to_payoff: month,
        debt_payments: first_month_payments(sorted_debts, extra_payment),
        status,
    }
}

/// Month-1 snapshot: every minimum, plus the whole extra on the first debt.
fn first_month_payments(sorted_debts: &[Debt], extra_payment: f64) -> Vec<DebtPayment> {
    sorted_debts
        .iter()
        .enumerate()
        .map(|(i, debt)| DebtPayment {
            debt_id: debt.id.clone(),
            debt_name: debt.name.clone(),
            monthly_payment: debt.minimum_payment + if i == 0 { extra_payment } else { 0.0 },
        })
        .collect()
}

pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(debts: &[Debt], extra: f64) -> PayoffStrategy {
        simulate(debts, extra, PayoffMethod::Snowball, &SimulationConfig::default())
    }

    #[test]
    fn test_empty_list_is_zero_cost() {
        let s = run(&[], 150.0);
        assert_eq!(s.months_to_payoff, 0);
        assert_eq!(s.total_interest_paid, 0.0);
        assert!(s.monthly_payments.is_empty());
        assert!(s.debt_payments.is_empty());
        assert_eq!(s.status, PayoffStatus::PaidOff);
    }

    #[test]
    fn test_single_debt_no_interest() {
        let debts = vec![Debt::new("a", "A", 250.0, 100.0, 0.0)];
        let s = run(&debts, 0.0);
        assert_eq!(s.months_to_payoff, 3);
        let payments: Vec<f64> = s.monthly_payments.iter().map(|p| p.payment).collect();
        assert_eq!(payments, vec![100.0, 100.0, 50.0]);
        assert_eq!(s.monthly_payments[2].remaining_balance, 0.0);
        assert_eq!(s.total_interest_paid, 0.0);
    }

    #[test]
    fn test_first_month_interest() {
        let debts = vec![
            Debt::new("a", "A", 1000.0, 50.0, 20.0),
            Debt::new("b", "B", 3000.0, 90.0, 12.0),
        ];
        let s = run(&debts, 100.0);
        let m1: Vec<&MonthlyPayment> = s.monthly_payments.iter().filter(|p| p.month == 1).collect();
        assert_eq!(m1.len(), 2);
        assert!((m1[0].interest - 16.666_666_666_666_668).abs() < 1e-9);
        assert!((m1[1].interest - 30.0).abs() < 1e-9);
        // Extra goes to the first debt in sorted order
        assert_eq!(m1[0].payment, 150.0);
        assert_eq!(m1[1].payment, 90.0);
    }

    #[test]
    fn test_zero_balance_debt_frees_minimum_from_month_one() {
        let debts = vec![
            Debt::new("z", "Zero", 0.0, 40.0, 10.0),
            Debt::new("p", "Open", 100.0, 10.0, 0.0),
        ];
        let s = run(&debts, 0.0);
        assert!(s.payments_for("z").next().is_none());
        assert_eq!(s.months_to_payoff, 2);
        assert_eq!(s.monthly_payments[0].payment, 50.0);
        assert_eq!(s.monthly_payments[1].remaining_balance, 0.0);
    }

    #[test]
    fn test_cap_reached_when_minimum_below_interest() {
        let debts = vec![Debt::new("n", "Underwater", 10_000.0, 50.0, 12.0)];
        let s = run(&debts, 0.0);
        assert_eq!(s.months_to_payoff, MAX_PAYOFF_MONTHS);
        assert_eq!(s.status, PayoffStatus::MonthCapReached);
        let last = s.monthly_payments.last().unwrap();
        assert!(last.remaining_balance > 10_000.0);
        assert!(last.principal < 0.0);
    }

    #[test]
    fn test_custom_cap() {
        let debts = vec![Debt::new("a", "A", 1000.0, 10.0, 0.0)];
        let config = SimulationConfig::default().with_max_months(12);
        let s = simulate(&debts, 0.0, PayoffMethod::Avalanche, &config);
        assert_eq!(s.months_to_payoff, 12);
        assert_eq!(s.status, PayoffStatus::MonthCapReached);
        assert_eq!(s.monthly_payments.last().unwrap().remaining_balance, 880.0);
    }

    #[test]
    fn test_extreme_inputs_stay_finite() {
        let debts = vec![Debt::new("a", "A", crate::MAX_AMOUNT, 0.0, crate::MAX_APR)];
        let config = SimulationConfig::default().with_max_months(u32::MAX);
        assert_eq!(config.max_months, MONTH_CAP_LIMIT);

        let s = simulate(&debts, 0.0, PayoffMethod::Avalanche, &config);
        assert_eq!(s.months_to_payoff, MONTH_CAP_LIMIT);
        assert!(s.total_interest_paid.is_finite());
        for p in &s.monthly_payments {
            assert!(p.remaining_balance.is_finite());
            assert!(p.principal.is_finite());
            assert!((p.payment - (p.principal + p.interest)).abs() <= 1e-6 * p.interest.abs().max(1.0));
        }
    }

    #[test]
    fn test_debt_payments_snapshot() {
        let debts = vec![
            Debt::new("a", "A", 100.0, 10.0, 0.0),
            Debt::new("b", "B", 900.0, 30.0, 0.0),
        ];
        let s = run(&debts, 75.0);
        assert_eq!(s.debt_payments.len(), 2);
        assert_eq!(s.debt_payments[0].monthly_payment, 85.0);
        assert_eq!(s.debt_payments[1].monthly_payment, 30.0);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(427.955_000_1), 427.96);
        assert_eq!(round_cents(0.004), 0.0);
        assert_eq!(round_cents(12.345_67), 12.35);
    }
}
