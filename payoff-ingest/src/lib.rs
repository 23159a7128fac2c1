//! payoff-ingest: load debt lists from CSV exports and JSON plan files.

pub mod types;
pub mod parsers;
pub mod plan;

pub use types::DebtPlan;
pub use parsers::debt_csv::{parse_debts_csv, parse_debts_csv_reader};
pub use plan::{load_debts, load_plan, save_plan};
