//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the expense store.

pub mod expense;
pub mod limit;
pub mod report;

pub use expense::{
    handle_add, handle_edit, handle_list, handle_remove, handle_total, AddArgs, EditArgs,
    FilterArgs, RemoveArgs,
};
pub use limit::{handle_limit_command, LimitCommands};
pub use report::{handle_report, ReportArgs};
