//! Reports over the expense list

pub mod breakdown;

pub use breakdown::{BreakdownEntry, MonthlyBreakdown};
