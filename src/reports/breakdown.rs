//! Monthly category breakdown
//!
//! Groups the selected month's expenses by category (or by the custom label
//! for custom categories), sums the amounts per group, and renders the
//! result as a terminal bar chart with the monthly limit marked.

use std::collections::HashMap;

use crate::models::{Money, Month};
use crate::store::ExpenseStore;

/// Width of the widest bar in the terminal rendering
const BAR_WIDTH: usize = 30;

/// One category group in the breakdown
#[derive(Debug, Clone)]
pub struct BreakdownEntry {
    /// Category name, or the custom label for custom categories
    pub label: String,
    /// Total spending in this group
    pub total: Money,
    /// Number of expenses in this group
    pub count: usize,
    /// Share of the month's total spending
    pub percentage: f64,
}

/// Per-category spending for one month, compared against the monthly limit
#[derive(Debug, Clone)]
pub struct MonthlyBreakdown {
    /// The month covered by the report
    pub month: Month,
    /// Groups sorted by total descending
    pub entries: Vec<BreakdownEntry>,
    /// Total spending for the month
    pub total: Money,
    /// The configured monthly limit
    pub limit: Money,
}

impl MonthlyBreakdown {
    /// Generate the breakdown for the store's selected month
    pub fn generate(store: &ExpenseStore) -> Self {
        let month = store.selected_month().unwrap_or_else(Month::current);
        let expenses = store.filter_by_month();

        let mut groups: HashMap<&str, (Money, usize)> = HashMap::new();
        let mut total = Money::zero();

        for expense in &expenses {
            let entry = groups
                .entry(expense.category.label())
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
            total += expense.amount;
        }

        let mut entries: Vec<BreakdownEntry> = groups
            .into_iter()
            .map(|(label, (group_total, count))| {
                let percentage = if total.is_zero() {
                    0.0
                } else {
                    group_total.cents() as f64 / total.cents() as f64 * 100.0
                };
                BreakdownEntry {
                    label: label.to_string(),
                    total: group_total,
                    count,
                    percentage,
                }
            })
            .collect();

        // Largest groups first; ties in label order for stable output
        entries.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.label.cmp(&b.label)));

        Self {
            month,
            entries,
            total,
            limit: store.monthly_limit(),
        }
    }

    /// Whether the month's total exceeds the limit
    pub fn exceeds_limit(&self) -> bool {
        self.total > self.limit
    }

    /// Render the breakdown as a terminal bar chart
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Monthly Expense Breakdown  {}\n", self.month));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.entries.is_empty() {
            output.push_str("No expenses this month.\n");
        } else {
            let max_cents = self
                .entries
                .iter()
                .map(|e| e.total.cents())
                .max()
                .unwrap_or(0)
                .max(1);

            for entry in &self.entries {
                let width =
                    (entry.total.cents() as f64 / max_cents as f64 * BAR_WIDTH as f64).round()
                        as usize;
                output.push_str(&format!(
                    "{:<16} {}{:>10}  {:<width$}  {:>5.1}%\n",
                    entry.label,
                    currency,
                    entry.total.to_string(),
                    "#".repeat(width.max(1)),
                    entry.percentage,
                    width = BAR_WIDTH,
                ));
            }

            output.push_str(&"-".repeat(60));
            output.push('\n');
            output.push_str(&format!(
                "{:<16} {}{:>10}\n",
                "Total", currency, self.total.to_string()
            ));
        }

        let status = if self.exceeds_limit() { "EXCEEDED" } else { "ok" };
        output.push_str(&format!(
            "Limit: {}{} [{}]\n",
            currency, self.limit, status
        ));

        output
    }
}
