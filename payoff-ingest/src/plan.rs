//! JSON plan files (`plan.json`) and format dispatch.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::parsers::debt_csv::parse_debts_csv;
use crate::types::DebtPlan;

pub fn load_plan(path: impl AsRef<Path>) -> Result<DebtPlan> {
    let p = path.as_ref();
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_plan(path: impl AsRef<Path>, plan: &DebtPlan) -> Result<()> {
    let p = path.as_ref();
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// Load debts from `.csv` or `.json`, chosen by extension. A missing file
/// surfaces as the open/read error of the chosen loader.
pub fn load_debts(path: impl AsRef<Path>) -> Result<DebtPlan> {
    let p = path.as_ref();
    let ext = p
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => Ok(DebtPlan::from_debts(parse_debts_csv(p)?)),
        "json" => load_plan(p),
        other => bail!(
            "unsupported debt file '{}' (extension '{}'; expected .csv or .json)",
            p.display(),
            other
        ),
    }
}
