//! CLI command for data export

use clap::Args;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::export::ExportService;
use crate::storage::ExpenseRepository;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (defaults to the configured export file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Handle the `export` command
pub fn handle_export_command<R: ExpenseRepository>(
    exporter: &ExportService<'_, R>,
    settings: &Settings,
    args: ExportArgs,
) -> ExpenseResult<()> {
    let output = args
        .file
        .unwrap_or_else(|| PathBuf::from(&settings.default_export_file));

    let count = exporter.export_to_file(&output)?;
    println!("Exported {} expenses to {}", count, output.display());
    Ok(())
}
