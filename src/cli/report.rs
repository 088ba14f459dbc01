//! Report commands

use clap::Args;

use crate::error::SpendlogResult;
use crate::models::Month;
use crate::reports::MonthlyBreakdown;
use crate::store::ExpenseStore;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Month to report on (YYYY-MM); defaults to the current month
    #[arg(long)]
    pub month: Option<Month>,
}

/// `spendlog report`
pub fn handle_report(store: &mut ExpenseStore, args: ReportArgs) -> SpendlogResult<()> {
    if let Some(month) = args.month {
        store.select_month(Some(month));
        store.select_date(None);
    }

    let report = MonthlyBreakdown::generate(store);
    print!("{}", report.format_terminal(store.currency_symbol()));
    Ok(())
}
