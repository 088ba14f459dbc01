//! Expense display formatting
//!
//! Formats expenses for terminal output: the list table and the single
//! record detail view.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn from_expense(expense: &Expense, currency: &str) -> Self {
        Self {
            id: expense.id.to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            name: expense.name.clone(),
            category: expense.category.label().to_string(),
            amount: format!("{}{}", currency, expense.amount),
        }
    }
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[&Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow::from_expense(e, currency))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    let mut output = table.to_string();
    output.push('\n');
    output
}

/// Format a single expense for the detail view
pub fn format_expense_details(expense: &Expense, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:  {}\n", expense.id));
    output.push_str(&format!("Name:     {}\n", expense.name));
    output.push_str(&format!("Date:     {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!("Category: {}\n", expense.category.label()));
    output.push_str(&format!("Amount:   {}{}\n", currency, expense.amount));
    output
}
