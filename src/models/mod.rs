//! Core data models for spendlog
//!
//! This module contains the data structures that represent the expense
//! tracking domain: expenses, categories, money, and calendar months.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use category::ExpenseCategory;
pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::Money;
pub use month::Month;
