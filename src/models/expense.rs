//! Expense record model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;

/// One user-entered spending event
///
/// Name and amount are assumed pre-validated (trimmed, positive) by the
/// boundary that constructs the record; the store does not re-check them
/// on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned at creation and immutable thereafter
    pub id: ExpenseId,

    /// Non-empty trimmed description
    pub name: String,

    /// Positive amount
    pub amount: Money,

    /// Calendar day of the expense; time of day is never compared
    pub date: NaiveDate,

    /// Category, carrying the label when custom
    pub category: ExpenseCategory,
}

impl Expense {
    /// Create a new expense with a fresh id
    ///
    /// The custom category label, if any, is trimmed here; this mirrors the
    /// sanitization the store applies on every add/edit.
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        category: ExpenseCategory,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            date,
            category: category.normalized(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) {}",
            self.date.format("%Y-%m-%d"),
            self.name,
            self.category.label(),
            self.amount
        )
    }
}
