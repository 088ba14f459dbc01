//! Monthly limit commands

use clap::Subcommand;

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::Money;
use crate::store::ExpenseStore;

#[derive(Subcommand, Debug)]
pub enum LimitCommands {
    /// Show the current monthly limit
    Show,
    /// Set the monthly limit
    Set {
        /// New limit, e.g. 500 or 750.50
        amount: String,
    },
}

/// `spendlog limit`
pub fn handle_limit_command(store: &mut ExpenseStore, cmd: LimitCommands) -> SpendlogResult<()> {
    match cmd {
        LimitCommands::Show => {
            println!(
                "Monthly limit: {}{}",
                store.currency_symbol(),
                store.monthly_limit()
            );
        }
        LimitCommands::Set { amount } => {
            let limit: Money = amount.parse().map_err(
                |e: crate::models::money::ParseMoneyError| SpendlogError::Validation(e.to_string()),
            )?;
            if !limit.is_positive() {
                return Err(SpendlogError::Validation(
                    "the monthly limit must be greater than zero".into(),
                ));
            }

            store.set_monthly_limit(limit);
            println!(
                "Monthly limit set to {}{}",
                store.currency_symbol(),
                store.monthly_limit()
            );
        }
    }
    Ok(())
}
