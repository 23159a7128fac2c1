//! Repayment ordering policies.
//!
//! A method is nothing more than a comparator over debts. The order is fixed
//! once, from the recorded balances/APRs, before the simulation starts:
//! - snowball: balance ASC
//! - avalanche: apr DESC
//!
//! Ties keep input order (stable sort).

use crate::debt::Debt;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Comparator deciding which debt receives extra payment first
pub type OrderingPolicy = fn(&Debt, &Debt) -> Ordering;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PayoffMethod {
    /// Smallest balance first
    #[serde(rename = "snowball")]
    Snowball,
    /// Highest APR first
    #[serde(rename = "avalanche")]
    Avalanche,
}

impl PayoffMethod {
    pub const ALL: [PayoffMethod; 2] = [PayoffMethod::Snowball, PayoffMethod::Avalanche];

    pub fn comparator(&self) -> OrderingPolicy {
        match self {
            PayoffMethod::Snowball => by_balance_asc,
            PayoffMethod::Avalanche => by_apr_desc,
        }
    }

    /// Return a sorted copy of `debts`; the input slice is left untouched.
    pub fn order(&self, debts: &[Debt]) -> Vec<Debt> {
        let mut sorted = debts.to_vec();
        sorted.sort_by(self.comparator());
        sorted
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PayoffMethod::Snowball => "snowball",
            PayoffMethod::Avalanche => "avalanche",
        }
    }

    /// Capitalized label for reports
    pub fn label(&self) -> &'static str {
        match self {
            PayoffMethod::Snowball => "Snowball",
            PayoffMethod::Avalanche => "Avalanche",
        }
    }
}

fn by_balance_asc(a: &Debt, b: &Debt) -> Ordering {
    a.balance.total_cmp(&b.balance)
}

fn by_apr_desc(a: &Debt, b: &Debt) -> Ordering {
    b.apr.total_cmp(&a.apr)
}

impl fmt::Display for PayoffMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown payoff method '{0}' (expected snowball or avalanche)")]
pub struct UnknownMethod(pub String);

impl FromStr for PayoffMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "snowball" => Ok(PayoffMethod::Snowball),
            "avalanche" => Ok(PayoffMethod::Avalanche),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}
