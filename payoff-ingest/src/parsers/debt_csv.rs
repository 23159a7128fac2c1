//! Parse a debt list from CSV.
//!
//! Expected header (any order, case-insensitive):
//!   id (optional), name, balance, minimum_payment, apr
//!
//! Aliases: `minimum`, `min_payment`, `minimum payment` for the minimum;
//! `rate`, `interest rate` for the APR. Rows without an id get `debt-NNN`.

use anyhow::{bail, Context, Result};
use payoff_core::Debt;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use super::cells::CellParser;

#[derive(Debug, Clone, Copy)]
struct Columns {
    id: Option<usize>,
    name: usize,
    balance: usize,
    minimum_payment: usize,
    apr: usize,
}

fn normalize_header(h: &str) -> String {
    h.trim().to_lowercase().replace([' ', '-'], "_")
}

fn find_column(headers: &[String], names: &[&str]) -> Option<usize> {
    headers.iter().position(|h| names.contains(&h.as_str()))
}

impl Columns {
    fn from_headers(raw: &csv::StringRecord) -> Result<Self> {
        let headers: Vec<String> = raw.iter().map(normalize_header).collect();
        let require = |label: &str, names: &[&str]| {
            find_column(&headers, names)
                .with_context(|| format!("missing '{label}' column (found: {})", headers.join(", ")))
        };

        Ok(Self {
            id: find_column(&headers, &["id", "debt_id"]),
            name: require("name", &["name", "debt", "debt_name"])?,
            balance: require("balance", &["balance", "current_balance"])?,
            minimum_payment: require(
                "minimum_payment",
                &["minimum_payment", "minimum", "min_payment"],
            )?,
            apr: require("apr", &["apr", "rate", "interest_rate"])?,
        })
    }
}

/// Parse a debt CSV file.
pub fn parse_debts_csv(path: impl AsRef<Path>) -> Result<Vec<Debt>> {
    let file = std::fs::File::open(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    parse_debts_csv_reader(file).with_context(|| format!("parsing {}", path.as_ref().display()))
}

/// One data row before ids are assigned
struct Row {
    id: Option<String>,
    name: String,
    balance: f64,
    minimum_payment: f64,
    apr: f64,
}

/// Parse debts from any CSV source. Numeric cells must parse; blank rows are
/// skipped.
pub fn parse_debts_csv_reader<R: Read>(reader: R) -> Result<Vec<Debt>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;
    let cells = CellParser::new()?;
    let mut rows = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        // Physical line of the record; the reader drops empty lines.
        let line = record.position().map_or(i as u64 + 2, |p| p.line());

        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let get = |idx: usize| record.get(idx).unwrap_or("").trim();

        let name = get(columns.name);
        if name.is_empty() {
            bail!("line {line}: empty name");
        }

        let balance = cells
            .money(get(columns.balance))
            .with_context(|| format!("line {line}: balance"))?;
        let minimum_payment = cells
            .money(get(columns.minimum_payment))
            .with_context(|| format!("line {line}: minimum_payment"))?;
        let apr = cells
            .percent(get(columns.apr))
            .with_context(|| format!("line {line}: apr"))?;

        rows.push(Row {
            id: columns.id.map(get).filter(|s| !s.is_empty()).map(str::to_string),
            name: name.to_string(),
            balance,
            minimum_payment,
            apr,
        });
    }

    let debts = assign_ids(rows);
    tracing::debug!(count = debts.len(), "parsed debts from CSV");
    Ok(debts)
}

/// Rows without an id get the next `debt-NNN` not already used in the file.
fn assign_ids(rows: Vec<Row>) -> Vec<Debt> {
    let mut used: HashSet<String> = rows.iter().filter_map(|r| r.id.clone()).collect();
    let mut next = 1;

    rows.into_iter()
        .map(|row| {
            let id = row.id.unwrap_or_else(|| loop {
                let candidate = format!("debt-{next:03}");
                next += 1;
                if used.insert(candidate.clone()) {
                    break candidate;
                }
            });
            Debt::new(id, row.name, row.balance, row.minimum_payment, row.apr)
        })
        .collect()
}
