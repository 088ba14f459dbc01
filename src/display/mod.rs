//! Terminal display formatting

pub mod expense;

pub use expense::{format_expense_details, format_expense_table};
