//! The expense store
//!
//! `ExpenseStore` owns the canonical expense list and the monthly budget
//! limit. It loads both at construction, keeps the list sorted by date
//! descending, derives the day/month filtered views and totals, and
//! evaluates the budget check.
//!
//! Every mutation applies in memory first and then rewrites the record file.
//! A persist failure is logged and never rolls the mutation back; memory
//! stays authoritative for the rest of the session.

use std::collections::HashSet;

use chrono::{Days, Local, NaiveDate};
use tracing::warn;

use crate::config::{Settings, SpendlogPaths};
use crate::error::SpendlogResult;
use crate::models::{Expense, ExpenseCategory, ExpenseId, Money, Month};
use crate::storage::ExpenseRepository;

/// Owns the expense list, the monthly limit, and the transient view filters
pub struct ExpenseStore {
    repo: ExpenseRepository,
    paths: SpendlogPaths,
    settings: Settings,
    expenses: Vec<Expense>,
    /// Month-level view scope; defaults to the current month
    selected_month: Option<Month>,
    /// Day-level view scope; narrows the view further than the month
    selected_date: Option<NaiveDate>,
}

impl ExpenseStore {
    /// Open the store: load expenses and settings, seed first-run samples
    ///
    /// A missing or corrupt expense file is treated as "no prior data". If
    /// the store is still empty after loading, four sample records are
    /// seeded and persisted. A missing or corrupt settings file falls back
    /// to defaults, and the default monthly limit is written out
    /// immediately.
    pub fn open(paths: SpendlogPaths) -> SpendlogResult<Self> {
        paths.ensure_directories()?;

        let repo = ExpenseRepository::new(paths.expenses_file());
        let mut expenses = repo.load();

        let seeded = expenses.is_empty();
        if seeded {
            let today = Local::now().date_naive();
            expenses = sample_expenses(today);
        }

        let (settings, settings_loaded) = match Settings::load(&paths) {
            Some(settings) => (settings, true),
            None => (Settings::default(), false),
        };

        let mut store = Self {
            repo,
            paths,
            settings,
            expenses,
            selected_month: Some(Month::current()),
            selected_date: None,
        };
        store.sort_by_date_desc();

        if seeded {
            store.persist();
        }
        if !settings_loaded {
            store.persist_settings();
        }

        Ok(store)
    }

    // ----- mutations -----

    /// Add a new expense and return it
    ///
    /// The caller is responsible for validating name and amount; the store
    /// only sanitizes the custom category label.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        category: ExpenseCategory,
    ) -> Expense {
        let expense = Expense::new(name, amount, date, category);
        self.expenses.push(expense.clone());
        self.sort_by_date_desc();
        self.persist();
        expense
    }

    /// Replace the expense with the given id, preserving the id
    ///
    /// Returns false when no record matches; the caller decides whether a
    /// miss is an error.
    pub fn edit(
        &mut self,
        id: ExpenseId,
        name: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        category: ExpenseCategory,
    ) -> bool {
        let Some(slot) = self.expenses.iter_mut().find(|e| e.id == id) else {
            return false;
        };

        *slot = Expense {
            id,
            name: name.into(),
            amount,
            date,
            category: category.normalized(),
        };
        self.sort_by_date_desc();
        self.persist();
        true
    }

    /// Remove every expense whose id is in the given set
    ///
    /// Ids not present are ignored. Returns the number of records removed.
    pub fn remove(&mut self, ids: &HashSet<ExpenseId>) -> usize {
        let before = self.expenses.len();
        self.expenses.retain(|e| !ids.contains(&e.id));
        let removed = before - self.expenses.len();

        if removed > 0 {
            self.persist();
        }
        removed
    }

    // ----- views -----

    /// The full list, sorted by date descending
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Look up an expense by id
    pub fn find(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Expenses in the selected month (or the current month when none is
    /// selected). Ignores the day-level filter.
    pub fn filter_by_month(&self) -> Vec<&Expense> {
        let month = self.selected_month.unwrap_or_else(Month::current);
        self.expenses
            .iter()
            .filter(|e| month.contains(e.date))
            .collect()
    }

    /// The display view: day filter first, then month filter, then everything
    pub fn filter_by_date(&self) -> Vec<&Expense> {
        if let Some(date) = self.selected_date {
            return self.expenses.iter().filter(|e| e.date == date).collect();
        }
        if let Some(month) = self.selected_month {
            return self
                .expenses
                .iter()
                .filter(|e| month.contains(e.date))
                .collect();
        }
        self.expenses.iter().collect()
    }

    /// Sum of the display view ("Total Spent (Filtered)")
    pub fn total_for_filtered_view(&self) -> Money {
        self.filter_by_date().iter().map(|e| e.amount).sum()
    }

    /// Sum of the selected month, independent of the day filter
    pub fn month_total(&self) -> Money {
        self.filter_by_month().iter().map(|e| e.amount).sum()
    }

    /// Whether the selected month's total exceeds the monthly limit
    ///
    /// Always evaluated against the month filter so that selecting a single
    /// day cannot mask a month-level overspend.
    pub fn exceeds_monthly_limit(&self) -> bool {
        self.month_total() > self.settings.monthly_limit
    }

    // ----- filters -----

    pub fn selected_month(&self) -> Option<Month> {
        self.selected_month
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// Set or clear the month-level view scope
    pub fn select_month(&mut self, month: Option<Month>) {
        self.selected_month = month;
    }

    /// Set or clear the day-level view scope
    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
    }

    // ----- monthly limit -----

    pub fn monthly_limit(&self) -> Money {
        self.settings.monthly_limit
    }

    /// Update the monthly limit and persist the preference immediately
    pub fn set_monthly_limit(&mut self, limit: Money) {
        self.settings.monthly_limit = limit;
        self.persist_settings();
    }

    /// Currency symbol for display
    pub fn currency_symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    // ----- internals -----

    fn sort_by_date_desc(&mut self) {
        // Stable sort: records on the same date keep their insertion order
        self.expenses.sort_by(|a, b| b.date.cmp(&a.date));
    }

    fn persist(&self) {
        if let Err(e) = self.repo.save(&self.expenses) {
            warn!("failed to save expenses, keeping in-memory state: {}", e);
        }
    }

    fn persist_settings(&self) {
        if let Err(e) = self.settings.save(&self.paths) {
            warn!("failed to save settings, keeping in-memory state: {}", e);
        }
    }
}

/// First-run demonstration records: two dated today, two dated yesterday
fn sample_expenses(today: NaiveDate) -> Vec<Expense> {
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);
    vec![
        Expense::new(
            "Big Shopping",
            Money::from_units(3000),
            today,
            ExpenseCategory::Shopping,
        ),
        Expense::new(
            "Trip Ticket",
            Money::from_units(2000),
            today,
            ExpenseCategory::Travel,
        ),
        Expense::new(
            "Rent Share",
            Money::from_units(1000),
            yesterday,
            ExpenseCategory::Other,
        ),
        Expense::new("Dinner", Money::from_units(500), yesterday, ExpenseCategory::Food),
    ]
}
