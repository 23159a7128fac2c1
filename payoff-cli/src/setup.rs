use anyhow::{bail, Context, Result};
use payoff_core::{validate_inputs, Debt, PortfolioSummary};
use payoff_ingest::parsers::cells::CellParser;
use payoff_ingest::{save_plan, DebtPlan};
use std::io::{self, BufRead, Write};

use crate::format::format_currency;
use crate::state::plan_path;

/// None at end of input
fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        return Ok(None);
    }
    Ok(Some(s.trim().to_string()))
}

/// Ask until the answer parses
fn prompt_number<R: BufRead>(
    input: &mut R,
    label: &str,
    parse: impl Fn(&str) -> Result<f64>,
) -> Result<f64> {
    loop {
        let Some(raw) = prompt(input, label)? else {
            bail!("input ended while waiting for '{}'", label.trim());
        };
        match parse(&raw) {
            Ok(v) => return Ok(v),
            Err(e) => println!("  {e}; try again"),
        }
    }
}

/// Collect debts until a blank name, then the extra payment.
fn read_plan<R: BufRead>(input: &mut R) -> Result<DebtPlan> {
    let cells = CellParser::new()?;
    let mut debts = Vec::new();

    println!("Enter your debts (blank name to finish)\n");
    loop {
        let name = match prompt(input, &format!("Debt #{} name", debts.len() + 1))? {
            Some(name) if !name.is_empty() => name,
            _ => break,
        };
        let balance = prompt_number(input, "  Balance", |s| cells.money(s))?;
        let minimum = prompt_number(input, "  Minimum payment", |s| cells.money(s))?;
        let apr = prompt_number(input, "  APR %", |s| cells.percent(s))?;

        let id = format!("debt-{:03}", debts.len() + 1);
        let debt = Debt::new(id, name, balance, minimum, apr);
        if let Err(e) = validate_inputs(std::slice::from_ref(&debt), 0.0) {
            println!("  Skipped: {e}\n");
            continue;
        }
        debts.push(debt);
        println!();
    }

    let extra = loop {
        let extra = prompt_number(input, "Extra monthly payment (0 for none)", |s| {
            if s.is_empty() { Ok(0.0) } else { cells.money(s) }
        })?;
        match validate_inputs(&debts, extra) {
            Ok(()) => break extra,
            Err(e) => println!("  {e}; try again"),
        }
    };

    Ok(DebtPlan::new(debts, extra))
}

pub fn run_setup() -> Result<()> {
    println!("Payoff setup\n");

    let stdin = io::stdin();
    let plan = read_plan(&mut stdin.lock())?;

    let path = plan_path()?;
    save_plan(&path, &plan).with_context(|| format!("saving plan to {}", path.display()))?;
    tracing::info!(debts = plan.debts.len(), path = %path.display(), "plan saved");

    let summary = PortfolioSummary::from_debts(&plan.debts);
    println!("\nWrote: {}", path.display());
    println!(
        "{} debts, {} total, {} per month including extra",
        summary.debt_count,
        format_currency(summary.total_balance),
        format_currency(summary.total_monthly_budget(plan.extra_payment.unwrap_or(0.0)))
    );
    println!("\nNext:\n- Compare methods: `payoff compare`\n- Full schedule: `payoff schedule`");
    Ok(())
}
