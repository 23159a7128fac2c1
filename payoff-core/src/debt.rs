//! Debt records supplied by the caller, plus portfolio-level totals.

use serde::{Deserialize, Serialize};

/// A single debt as recorded by the user.
///
/// Immutable for the duration of a simulation; the simulator works on its own
/// copies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Debt {
    /// Opaque unique identifier
    pub id: String,
    /// Display label (non-empty, at most 100 chars)
    pub name: String,
    /// Principal owed
    pub balance: f64,
    /// Contractual minimum due each month
    #[serde(alias = "minimumPayment")]
    pub minimum_payment: f64,
    /// Annual percentage rate, 0-100
    pub apr: f64,
}

impl Debt {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        balance: f64,
        minimum_payment: f64,
        apr: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
            minimum_payment,
            apr,
        }
    }

    /// Monthly periodic rate as a fraction (APR 12 -> 0.01)
    pub fn monthly_rate(&self) -> f64 {
        self.apr / 100.0 / 12.0
    }

    /// A zero balance means there is nothing left to pay
    pub fn is_paid_off(&self) -> bool {
        self.balance <= 0.0
    }

    /// Interest accrued in the first month at the recorded balance
    pub fn first_month_interest(&self) -> f64 {
        self.balance * self.monthly_rate()
    }

    /// True if the minimum payment alone shrinks the balance
    pub fn minimum_covers_interest(&self) -> bool {
        self.is_paid_off() || self.minimum_payment > self.first_month_interest()
    }
}

/// Totals over a debt list (dashboard view)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub debt_count: usize,
    pub total_balance: f64,
    pub total_minimum_payment: f64,
    /// 0 when there are no debts
    pub highest_apr: f64,
}

impl PortfolioSummary {
    pub fn from_debts(debts: &[Debt]) -> Self {
        Self {
            debt_count: debts.len(),
            total_balance: debts.iter().map(|d| d.balance).sum(),
            total_minimum_payment: debts.iter().map(|d| d.minimum_payment).sum(),
            highest_apr: debts.iter().map(|d| d.apr).fold(0.0, f64::max),
        }
    }

    /// What the user pays every month: all minimums plus the extra amount
    pub fn total_monthly_budget(&self, extra_payment: f64) -> f64 {
        self.total_minimum_payment + extra_payment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debt_creation() {
        let debt = Debt::new("d-1", "Visa", 1000.0, 50.0, 12.0);
        assert_eq!(debt.balance, 1000.0);
        assert!(!debt.is_paid_off());
        assert!((debt.monthly_rate() - 0.01).abs() < 1e-12);
        assert!((debt.first_month_interest() - 10.0).abs() < 1e-9);
        assert!(debt.minimum_covers_interest());
    }

    #[test]
    fn test_minimum_below_interest() {
        let debt = Debt::new("d-1", "Loan", 10_000.0, 50.0, 12.0);
        assert!(!debt.minimum_covers_interest());

        let cleared = Debt::new("d-2", "Closed card", 0.0, 0.0, 20.0);
        assert!(cleared.minimum_covers_interest());
    }

    #[test]
    fn test_deserialize_accepts_camel_case_minimum() {
        let json = r#"{"id":"a","name":"Card","balance":10,"minimumPayment":5,"apr":3}"#;
        let debt: Debt = serde_json::from_str(json).unwrap();
        assert_eq!(debt.minimum_payment, 5.0);

        let json = r#"{"id":"a","name":"Card","balance":10,"minimum_payment":7,"apr":3}"#;
        let debt: Debt = serde_json::from_str(json).unwrap();
        assert_eq!(debt.minimum_payment, 7.0);
    }

    #[test]
    fn test_portfolio_summary() {
        let debts = vec![
            Debt::new("a", "Card", 1000.0, 50.0, 20.0),
            Debt::new("b", "Car", 3000.0, 90.0, 12.0),
        ];
        let summary = PortfolioSummary::from_debts(&debts);
        assert_eq!(summary.debt_count, 2);
        assert_eq!(summary.total_balance, 4000.0);
        assert_eq!(summary.total_minimum_payment, 140.0);
        assert_eq!(summary.highest_apr, 20.0);
        assert_eq!(summary.total_monthly_budget(100.0), 240.0);
    }

    #[test]
    fn test_portfolio_summary_empty() {
        let summary = PortfolioSummary::from_debts(&[]);
        assert_eq!(summary, PortfolioSummary::default());
    }
}
