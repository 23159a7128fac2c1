//! payoff-core: debt snowball/avalanche payoff simulation engine
//!
//! Pure, deterministic computation: no I/O, no shared state. Callers supply
//! debts and an extra monthly payment and get back a month-by-month ledger
//! for each repayment method.

pub mod comparison;
pub mod debt;
pub mod method;
pub mod simulator;
pub mod strategy;
pub mod validation;

pub use comparison::{
    calculate_avalanche, calculate_payoff_comparison, calculate_payoff_comparison_with,
    calculate_snowball, calculate_strategy,
};
pub use debt::{Debt, PortfolioSummary};
pub use method::{OrderingPolicy, PayoffMethod, UnknownMethod};
pub use simulator::{simulate, SimulationConfig, MAX_PAYOFF_MONTHS, MONTH_CAP_LIMIT};
pub use strategy::{CalculationResult, DebtPayment, MonthlyPayment, PayoffStatus, PayoffStrategy};
pub use validation::{
    validate_inputs, DebtField, ValidationError, MAX_AMOUNT, MAX_APR, MAX_NAME_LEN,
};
