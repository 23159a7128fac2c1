//! Input validation. Runs before any simulation; the first failure wins.

use crate::debt::Debt;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Longest accepted debt name, in characters
pub const MAX_NAME_LEN: usize = 100;

/// Highest accepted APR (percent)
pub const MAX_APR: f64 = 100.0;

/// Largest accepted money amount. Together with [`MAX_APR`] and
/// [`crate::MONTH_CAP_LIMIT`] this keeps every simulated balance finite.
pub const MAX_AMOUNT: f64 = 1e12;

/// Numeric fields of a [`Debt`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebtField {
    Balance,
    MinimumPayment,
    Apr,
}

impl fmt::Display for DebtField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DebtField::Balance => "balance",
            DebtField::MinimumPayment => "minimum_payment",
            DebtField::Apr => "apr",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("debt #{index} has an empty id")]
    EmptyId { index: usize },

    #[error("debt id '{id}' appears more than once")]
    DuplicateId { id: String },

    #[error("debt '{id}' has an empty name")]
    EmptyName { id: String },

    #[error("debt '{id}' name is {len} characters (max {max})")]
    NameTooLong { id: String, len: usize, max: usize },

    #[error("debt '{id}' ({name}): {field} must be a finite number, got {value}")]
    NonFinite {
        id: String,
        name: String,
        field: DebtField,
        value: f64,
    },

    #[error("debt '{id}' ({name}): {field} must not be negative, got {value}")]
    Negative {
        id: String,
        name: String,
        field: DebtField,
        value: f64,
    },

    #[error("debt '{id}' ({name}): {field} must be at most {max}, got {value}")]
    TooLarge {
        id: String,
        name: String,
        field: DebtField,
        value: f64,
        max: f64,
    },

    #[error("debt '{id}' ({name}): apr must be between 0 and {max}, got {value}")]
    AprOutOfRange {
        id: String,
        name: String,
        value: f64,
        max: f64,
    },

    #[error("extra payment must be a finite amount between 0 and {max}, got {0}", max = MAX_AMOUNT)]
    ExtraPayment(f64),
}

/// Check one debt in isolation (id uniqueness is a list-level check)
pub fn validate_debt(index: usize, debt: &Debt) -> Result<(), ValidationError> {
    if debt.id.trim().is_empty() {
        return Err(ValidationError::EmptyId { index });
    }

    let name = debt.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName { id: debt.id.clone() });
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong {
            id: debt.id.clone(),
            len,
            max: MAX_NAME_LEN,
        });
    }

    for (field, value) in [
        (DebtField::Balance, debt.balance),
        (DebtField::MinimumPayment, debt.minimum_payment),
        (DebtField::Apr, debt.apr),
    ] {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite {
                id: debt.id.clone(),
                name: debt.name.clone(),
                field,
                value,
            });
        }
        if value < 0.0 {
            return Err(ValidationError::Negative {
                id: debt.id.clone(),
                name: debt.name.clone(),
                field,
                value,
            });
        }
    }

    for (field, value) in [
        (DebtField::Balance, debt.balance),
        (DebtField::MinimumPayment, debt.minimum_payment),
    ] {
        if value > MAX_AMOUNT {
            return Err(ValidationError::TooLarge {
                id: debt.id.clone(),
                name: debt.name.clone(),
                field,
                value,
                max: MAX_AMOUNT,
            });
        }
    }

    if debt.apr > MAX_APR {
        return Err(ValidationError::AprOutOfRange {
            id: debt.id.clone(),
            name: debt.name.clone(),
            value: debt.apr,
            max: MAX_APR,
        });
    }

    Ok(())
}

pub fn validate_extra_payment(extra_payment: f64) -> Result<(), ValidationError> {
    if !(0.0..=MAX_AMOUNT).contains(&extra_payment) {
        return Err(ValidationError::ExtraPayment(extra_payment));
    }
    Ok(())
}

/// Validate a whole input set: every debt, unique ids, and the extra payment.
pub fn validate_inputs(debts: &[Debt], extra_payment: f64) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for (index, debt) in debts.iter().enumerate() {
        validate_debt(index, debt)?;
        if !seen.insert(debt.id.as_str()) {
            return Err(ValidationError::DuplicateId { id: debt.id.clone() });
        }
    }
    validate_extra_payment(extra_payment)
}
