//! Comparison driver: snowball and avalanche over the same inputs.

use crate::debt::Debt;
use crate::method::PayoffMethod;
use crate::simulator::{simulate, SimulationConfig};
use crate::strategy::{CalculationResult, PayoffStrategy};
use crate::validation::{validate_inputs, ValidationError};

/// Validate, order by `method`, and simulate.
pub fn calculate_strategy(
    debts: &[Debt],
    extra_payment: f64,
    method: PayoffMethod,
    config: &SimulationConfig,
) -> Result<PayoffStrategy, ValidationError> {
    validate_inputs(debts, extra_payment)?;
    Ok(run_method(debts, extra_payment, method, config))
}

/// Smallest balance first
pub fn calculate_snowball(debts: &[Debt], extra_payment: f64) -> Result<PayoffStrategy, ValidationError> {
    calculate_strategy(debts, extra_payment, PayoffMethod::Snowball, &SimulationConfig::default())
}

/// Highest APR first
pub fn calculate_avalanche(debts: &[Debt], extra_payment: f64) -> Result<PayoffStrategy, ValidationError> {
    calculate_strategy(debts, extra_payment, PayoffMethod::Avalanche, &SimulationConfig::default())
}

pub fn calculate_payoff_comparison(
    debts: &[Debt],
    extra_payment: f64,
) -> Result<CalculationResult, ValidationError> {
    calculate_payoff_comparison_with(debts, extra_payment, &SimulationConfig::default())
}

/// Both methods under a caller-supplied month cap. Validation runs once, up
/// front; no partial result is produced on failure.
pub fn calculate_payoff_comparison_with(
    debts: &[Debt],
    extra_payment: f64,
    config: &SimulationConfig,
) -> Result<CalculationResult, ValidationError> {
    validate_inputs(debts, extra_payment)?;

    Ok(CalculationResult {
        snowball: run_method(debts, extra_payment, PayoffMethod::Snowball, config),
        avalanche: run_method(debts, extra_payment, PayoffMethod::Avalanche, config),
        debts: debts.to_vec(),
        extra_payment,
    })
}

fn run_method(
    debts: &[Debt],
    extra_payment: f64,
    method: PayoffMethod,
    config: &SimulationConfig,
) -> PayoffStrategy {
    let sorted = method.order(debts);
    simulate(&sorted, extra_payment, method, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::PayoffStatus;

    fn sample() -> Vec<Debt> {
        vec![
            Debt::new("a", "Card A", 1000.0, 50.0, 20.0),
            Debt::new("b", "Loan B", 3000.0, 90.0, 12.0),
        ]
    }

    #[test]
    fn test_comparison_keeps_inputs() {
        let debts = sample();
        let result = calculate_payoff_comparison(&debts, 100.0).unwrap();
        assert_eq!(result.debts, debts);
        assert_eq!(result.extra_payment, 100.0);
        assert_eq!(result.snowball.method, PayoffMethod::Snowball);
        assert_eq!(result.avalanche.method, PayoffMethod::Avalanche);
        assert_eq!(result.strategy(PayoffMethod::Avalanche), &result.avalanche);
    }

    #[test]
    fn test_invalid_input_yields_no_result() {
        let mut debts = sample();
        debts[1].apr = 150.0;
        let err = calculate_payoff_comparison(&debts, 100.0).unwrap_err();
        assert!(matches!(err, ValidationError::AprOutOfRange { ref id, .. } if id == "b"));
        assert!(calculate_snowball(&sample(), -1.0).is_err());
    }

    #[test]
    fn test_empty_comparison() {
        let result = calculate_payoff_comparison(&[], 200.0).unwrap();
        for s in [&result.snowball, &result.avalanche] {
            assert_eq!(s.months_to_payoff, 0);
            assert_eq!(s.total_interest_paid, 0.0);
            assert!(s.monthly_payments.is_empty());
            assert_eq!(s.status, PayoffStatus::PaidOff);
        }
    }

    #[test]
    fn test_methods_diverge_when_orders_differ() {
        // Small low-rate balance vs large high-rate balance
        let debts = vec![
            Debt::new("small", "Small", 500.0, 25.0, 5.0),
            Debt::new("big", "Big", 5000.0, 120.0, 25.0),
        ];
        let snowball = calculate_snowball(&debts, 200.0).unwrap();
        let avalanche = calculate_avalanche(&debts, 200.0).unwrap();

        assert_eq!(snowball.debt_payments[0].debt_id, "small");
        assert_eq!(avalanche.debt_payments[0].debt_id, "big");
        assert!(avalanche.total_interest_paid < snowball.total_interest_paid);
    }

    #[test]
    fn test_configured_cap_applies_to_both() {
        let config = SimulationConfig::default().with_max_months(3);
        let result = calculate_payoff_comparison_with(&sample(), 0.0, &config).unwrap();
        assert_eq!(result.snowball.months_to_payoff, 3);
        assert_eq!(result.avalanche.status, PayoffStatus::MonthCapReached);
    }
}
