//! Expense command handlers
//!
//! The validation boundary for user input lives here: names are trimmed and
//! must be non-empty, amounts must be positive, and a custom category
//! requires a label. The store itself assumes pre-validated input.

use std::collections::HashSet;

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::display::{format_expense_details, format_expense_table};
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId, Money, Month};
use crate::store::ExpenseStore;

/// Day/month scope shared by the list, total, and remove commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Show only this day (YYYY-MM-DD)
    #[arg(long, conflicts_with_all = ["month", "all"])]
    pub date: Option<NaiveDate>,

    /// Show only this month (YYYY-MM)
    #[arg(long, conflicts_with = "all")]
    pub month: Option<Month>,

    /// Show the whole list, ignoring the default month scope
    #[arg(long)]
    pub all: bool,
}

impl FilterArgs {
    /// Apply this scope to the store's transient filters
    ///
    /// Selecting a day also scopes the month to that day's month, so the
    /// budget check runs against the month being looked at.
    pub fn apply(&self, store: &mut ExpenseStore) {
        if self.all {
            store.select_month(None);
            store.select_date(None);
            return;
        }
        if let Some(date) = self.date {
            store.select_date(Some(date));
            store.select_month(Some(Month::of(date)));
            return;
        }
        if let Some(month) = self.month {
            store.select_month(Some(month));
            store.select_date(None);
        }
    }
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Name of the expense
    pub name: String,

    /// Amount, e.g. 120 or 99.50
    pub amount: String,

    /// Date of the expense (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Category: food, shopping, travel, other, or custom
    #[arg(short, long, default_value = "other")]
    pub category: String,

    /// Label for a custom category
    #[arg(short, long)]
    pub label: Option<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Id of the expense to edit (full UUID or exp- prefixed)
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New amount
    #[arg(long)]
    pub amount: Option<String>,

    /// New date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// New category: food, shopping, travel, other, or custom
    #[arg(long)]
    pub category: Option<String>,

    /// New label for a custom category
    #[arg(long)]
    pub label: Option<String>,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Ids of expenses to remove
    pub ids: Vec<String>,

    /// Positions within the filtered view to remove (0-based)
    #[arg(short, long)]
    pub offset: Vec<usize>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

fn parse_name(raw: &str) -> SpendlogResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(SpendlogError::Validation("name must not be empty".into()));
    }
    Ok(name.to_string())
}

fn parse_amount(raw: &str) -> SpendlogResult<Money> {
    let amount: Money = raw
        .parse()
        .map_err(|e: crate::models::money::ParseMoneyError| {
            SpendlogError::Validation(e.to_string())
        })?;
    if !amount.is_positive() {
        return Err(SpendlogError::Validation(
            "amount must be greater than zero".into(),
        ));
    }
    Ok(amount)
}

/// Resolve an id argument: a full UUID, or a unique prefix as shown in the
/// list view (with or without the `exp-` part)
fn resolve_id(store: &ExpenseStore, raw: &str) -> SpendlogResult<ExpenseId> {
    if let Ok(id) = raw.parse::<ExpenseId>() {
        return Ok(id);
    }

    let prefix = raw.strip_prefix("exp-").unwrap_or(raw);
    let matches: Vec<ExpenseId> = store
        .expenses()
        .iter()
        .filter(|e| e.id.as_uuid().to_string().starts_with(prefix))
        .map(|e| e.id)
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(SpendlogError::NotFound(raw.to_string())),
        _ => Err(SpendlogError::Validation(format!(
            "expense id '{}' is ambiguous ({} matches)",
            raw,
            matches.len()
        ))),
    }
}

fn parse_category(kind: &str, label: Option<&str>) -> SpendlogResult<ExpenseCategory> {
    ExpenseCategory::from_kind_label(kind, label).map_err(SpendlogError::Validation)
}

/// Translate positions within a filtered view into the underlying record ids
///
/// Offsets are positions in the *currently filtered* view, never in the full
/// list, so removal must go through ids.
pub fn offsets_to_ids(view: &[&Expense], offsets: &[usize]) -> SpendlogResult<Vec<ExpenseId>> {
    offsets
        .iter()
        .map(|&offset| {
            view.get(offset)
                .map(|e| e.id)
                .ok_or_else(|| {
                    SpendlogError::Validation(format!(
                        "offset {} is out of range for the current view ({} rows)",
                        offset,
                        view.len()
                    ))
                })
        })
        .collect()
}

fn print_limit_warning(store: &ExpenseStore) {
    if store.exceeds_monthly_limit() {
        println!(
            "Warning: this month's total ({}{}) exceeds your limit ({}{}).",
            store.currency_symbol(),
            store.month_total(),
            store.currency_symbol(),
            store.monthly_limit()
        );
    }
}

/// `spendlog add`
pub fn handle_add(store: &mut ExpenseStore, args: AddArgs) -> SpendlogResult<()> {
    let name = parse_name(&args.name)?;
    let amount = parse_amount(&args.amount)?;
    let category = parse_category(&args.category, args.label.as_deref())?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let expense = store.add(name, amount, date, category);

    println!("Added:");
    print!("{}", format_expense_details(&expense, store.currency_symbol()));

    store.select_month(Some(Month::of(date)));
    store.select_date(None);
    print_limit_warning(store);
    Ok(())
}

/// `spendlog list`
pub fn handle_list(store: &mut ExpenseStore, filter: FilterArgs) -> SpendlogResult<()> {
    filter.apply(store);

    let view = store.filter_by_date();
    print!("{}", format_expense_table(&view, store.currency_symbol()));
    println!(
        "Total Spent (Filtered): {}{}",
        store.currency_symbol(),
        store.total_for_filtered_view()
    );
    print_limit_warning(store);
    Ok(())
}

/// `spendlog total`
pub fn handle_total(store: &mut ExpenseStore, filter: FilterArgs) -> SpendlogResult<()> {
    filter.apply(store);
    println!(
        "Total Spent (Filtered): {}{}",
        store.currency_symbol(),
        store.total_for_filtered_view()
    );
    Ok(())
}

/// `spendlog edit`
pub fn handle_edit(store: &mut ExpenseStore, args: EditArgs) -> SpendlogResult<()> {
    let id = resolve_id(store, &args.id)?;
    let existing = store
        .find(id)
        .cloned()
        .ok_or_else(|| SpendlogError::NotFound(args.id.clone()))?;

    let name = match args.name {
        Some(raw) => parse_name(&raw)?,
        None => existing.name.clone(),
    };
    let amount = match args.amount {
        Some(raw) => parse_amount(&raw)?,
        None => existing.amount,
    };
    let date = args.date.unwrap_or(existing.date);

    let category = match (args.category, args.label) {
        (Some(kind), label) => parse_category(&kind, label.as_deref())?,
        (None, Some(label)) => {
            if !existing.category.is_custom() {
                return Err(SpendlogError::Validation(
                    "--label without --category is only valid for an expense that is already custom"
                        .into(),
                ));
            }
            parse_category("custom", Some(&label))?
        }
        (None, None) => existing.category.clone(),
    };

    if !store.edit(id, name, amount, date, category) {
        return Err(SpendlogError::NotFound(args.id));
    }

    let updated = store
        .find(id)
        .ok_or_else(|| SpendlogError::NotFound(args.id))?;
    println!("Updated:");
    print!("{}", format_expense_details(updated, store.currency_symbol()));
    Ok(())
}

/// `spendlog remove`
pub fn handle_remove(store: &mut ExpenseStore, args: RemoveArgs) -> SpendlogResult<()> {
    if args.ids.is_empty() && args.offset.is_empty() {
        return Err(SpendlogError::Validation(
            "nothing to remove: pass ids or --offset".into(),
        ));
    }

    args.filter.apply(store);

    let mut ids: HashSet<ExpenseId> = args
        .ids
        .iter()
        .map(|raw| resolve_id(store, raw))
        .collect::<SpendlogResult<_>>()?;

    if !args.offset.is_empty() {
        let view = store.filter_by_date();
        ids.extend(offsets_to_ids(&view, &args.offset)?);
    }

    let removed = store.remove(&ids);
    println!("Removed {} expense(s).", removed);
    Ok(())
}
