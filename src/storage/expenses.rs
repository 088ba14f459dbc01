//! Expense repository for JSON storage
//!
//! The structured record store: the full expense list is serialized to
//! `expenses.json` and rewritten in full on every save. The data volume is
//! personal-scale, so there is no incremental persistence.

use std::path::PathBuf;

use crate::models::Expense;

use super::file_io::{read_json_lenient, write_json_atomic};
use crate::error::SpendlogError;

/// Serializable expense file structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load all expenses from disk
    ///
    /// A missing or unreadable file yields an empty list; a load problem is
    /// never fatal.
    pub fn load(&self) -> Vec<Expense> {
        let data: ExpenseData = read_json_lenient(&self.path);
        data.expenses
    }

    /// Save the full expense list to disk, atomically
    pub fn save(&self, expenses: &[Expense]) -> Result<(), SpendlogError> {
        let data = ExpenseData {
            expenses: expenses.to_vec(),
        };
        write_json_atomic(&self.path, &data)
    }
}
