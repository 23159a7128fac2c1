//! File-format parsers producing [`payoff_core::Debt`] values.

pub mod cells;
pub mod debt_csv;
