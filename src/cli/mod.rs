//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod export;

pub use budget::{handle_budget_command, BudgetArgs};
pub use expense::{
    handle_add_command, handle_delete_command, handle_list_command, handle_summary_command,
    AddArgs, DeleteArgs, ListArgs, SummaryArgs,
};
pub use export::{handle_export_command, ExportArgs};
