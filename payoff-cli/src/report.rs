//! Presentation-side aggregation over a computed plan: balance timelines,
//! the snowball-vs-avalanche verdict, and schedule export.

use anyhow::Result;
use payoff_core::{CalculationResult, Debt, PayoffStrategy};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

use crate::format::{format_currency, format_duration};

/// Total remaining balance across all debts at the end of a month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimelinePoint {
    pub month: u32,
    pub total_remaining: f64,
}

pub fn balance_timeline(strategy: &PayoffStrategy) -> Vec<TimelinePoint> {
    let mut totals: BTreeMap<u32, f64> = BTreeMap::new();
    for p in &strategy.monthly_payments {
        *totals.entry(p.month).or_default() += p.remaining_balance;
    }
    totals
        .into_iter()
        .map(|(month, total_remaining)| TimelinePoint {
            month,
            total_remaining,
        })
        .collect()
}

/// Remaining balance per debt for one month, aligned with the debt list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtBalances {
    pub month: u32,
    pub balances: Vec<f64>,
}

/// Month -> remaining balance of every debt. Debts with no row in a month
/// (already paid off) show 0.
pub fn per_debt_timeline(strategy: &PayoffStrategy, debts: &[Debt]) -> Vec<DebtBalances> {
    let column: BTreeMap<&str, usize> = debts
        .iter()
        .enumerate()
        .map(|(i, d)| (d.id.as_str(), i))
        .collect();

    let mut rows: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for p in &strategy.monthly_payments {
        let row = rows.entry(p.month).or_insert_with(|| vec![0.0; debts.len()]);
        if let Some(&i) = column.get(p.debt_id.as_str()) {
            row[i] = p.remaining_balance;
        }
    }

    rows.into_iter()
        .map(|(month, balances)| DebtBalances { month, balances })
        .collect()
}

/// Snowball minus avalanche: positive numbers mean avalanche is cheaper/faster
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub interest_savings: f64,
    pub months_saved: i64,
}

impl Verdict {
    pub fn from_result(result: &CalculationResult) -> Self {
        Self {
            interest_savings: result.snowball.total_interest_paid
                - result.avalanche.total_interest_paid,
            months_saved: result.snowball.months_to_payoff as i64
                - result.avalanche.months_to_payoff as i64,
        }
    }

    /// None when both methods cost the same to the cent
    pub fn message(&self) -> Option<String> {
        if self.interest_savings.abs() < 0.005 {
            return None;
        }
        let amount = format_currency(self.interest_savings.abs());
        if self.interest_savings > 0.0 {
            let mut msg = format!("The avalanche method saves you {amount} in interest");
            if self.months_saved > 0 {
                msg.push_str(" and ");
                msg.push_str(&format_duration(self.months_saved as u32));
            }
            Some(msg)
        } else {
            Some(format!(
                "The snowball method costs {amount} more but may provide better motivation"
            ))
        }
    }
}

/// Warning line for a plan that stopped at the month cap
pub fn non_convergence_notice(strategy: &PayoffStrategy) -> Option<String> {
    if strategy.is_paid_off() {
        return None;
    }
    Some(format!(
        "Warning: the {} plan does not pay off debt within {} months; \
         minimum payments may not cover interest",
        strategy.method, strategy.months_to_payoff
    ))
}

/// One line per debt whose minimum does not cover its first month of interest
pub fn interest_warnings(debts: &[Debt]) -> Vec<String> {
    debts
        .iter()
        .filter(|d| !d.minimum_covers_interest())
        .map(|d| {
            format!(
                "{}: minimum {} does not cover {} monthly interest",
                d.name,
                format_currency(d.minimum_payment),
                format_currency(d.first_month_interest())
            )
        })
        .collect()
}

/// Write the ledger as CSV with a header row
pub fn write_schedule_csv<W: Write>(w: W, strategy: &PayoffStrategy) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    for p in &strategy.monthly_payments {
        wtr.serialize(p)?;
    }
    wtr.flush()?;
    Ok(())
}
