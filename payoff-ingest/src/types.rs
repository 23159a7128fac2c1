use chrono::{DateTime, Utc};
use payoff_core::Debt;
use serde::{Deserialize, Serialize};

/// A saved set of debts plus the user's extra monthly payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPlan {
    pub debts: Vec<Debt>,
    /// None when the source carries no extra payment (e.g. a bare CSV)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_payment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_utc: Option<DateTime<Utc>>,
}

impl DebtPlan {
    pub fn new(debts: Vec<Debt>, extra_payment: f64) -> Self {
        Self {
            debts,
            extra_payment: Some(extra_payment),
            created_at_utc: Some(Utc::now()),
        }
    }

    /// Debts only, e.g. from a CSV import
    pub fn from_debts(debts: Vec<Debt>) -> Self {
        Self {
            debts,
            extra_payment: None,
            created_at_utc: None,
        }
    }
}
