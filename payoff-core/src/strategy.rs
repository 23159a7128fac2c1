//! Simulation output: the monthly ledger and per-method summary.

use crate::debt::Debt;
use crate::method::PayoffMethod;
use serde::{Deserialize, Serialize};

/// One payment toward one debt in one simulated month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPayment {
    /// 1-based month since start
    pub month: u32,
    pub debt_id: String,
    pub debt_name: String,
    /// principal + interest
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    /// Balance after this payment, floored at 0
    pub remaining_balance: f64,
}

/// First-month payment snapshot for one debt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayment {
    pub debt_id: String,
    pub debt_name: String,
    pub monthly_payment: f64,
}

/// How a simulation ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PayoffStatus {
    /// Every debt reached zero
    #[serde(rename = "paid-off")]
    PaidOff,
    /// The month cap stopped the loop with balances outstanding
    #[serde(rename = "month-cap-reached")]
    MonthCapReached,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayoffStrategy {
    pub method: PayoffMethod,
    pub monthly_payments: Vec<MonthlyPayment>,
    /// Rounded to cents
    pub total_interest_paid: f64,
    pub months_to_payoff: u32,
    pub debt_payments: Vec<DebtPayment>,
    pub status: PayoffStatus,
}

impl PayoffStrategy {
    pub fn is_paid_off(&self) -> bool {
        self.status == PayoffStatus::PaidOff
    }

    /// All ledger rows for one debt, in month order
    pub fn payments_for<'a>(&'a self, debt_id: &'a str) -> impl Iterator<Item = &'a MonthlyPayment> + 'a {
        self.monthly_payments.iter().filter(move |p| p.debt_id == debt_id)
    }

    /// Month in which a debt's balance first reached zero, if it did
    pub fn payoff_month(&self, debt_id: &str) -> Option<u32> {
        self.payments_for(debt_id)
            .find(|p| p.remaining_balance <= 0.0)
            .map(|p| p.month)
    }

    /// Sum of every payment made over the plan
    pub fn total_paid(&self) -> f64 {
        self.monthly_payments.iter().map(|p| p.payment).sum()
    }
}

/// Both methods computed over the same inputs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub snowball: PayoffStrategy,
    pub avalanche: PayoffStrategy,
    /// Input debts, in the order they were given
    pub debts: Vec<Debt>,
    pub extra_payment: f64,
}

impl CalculationResult {
    pub fn strategy(&self, method: PayoffMethod) -> &PayoffStrategy {
        match method {
            PayoffMethod::Snowball => &self.snowball,
            PayoffMethod::Avalanche => &self.avalanche,
        }
    }
}
