//! Export command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::context::FinanceContext;
use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_balances_csv, export_full_json, export_full_yaml, export_transactions_csv};

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// Everything, as JSON
    Json,
    /// Everything, as YAML
    Yaml,
    /// Transactions as CSV
    Csv,
    /// Account, card, holding and vault balances as CSV
    Balances,
}

#[derive(Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

pub async fn handle_export(ctx: &FinanceContext, args: ExportArgs) -> FinanceResult<()> {
    if !ctx.is_authenticated() {
        return Err(FinanceError::NotAuthenticated);
    }
    let snapshot = ctx.refresh().await;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        ExportFormat::Json => export_full_json(&snapshot, &mut writer, !args.compact)?,
        ExportFormat::Yaml => export_full_yaml(&snapshot, &mut writer)?,
        ExportFormat::Csv => export_transactions_csv(&snapshot, &mut writer)?,
        ExportFormat::Balances => export_balances_csv(&snapshot, &mut writer)?,
    }
    writer.flush()?;

    if let Some(path) = &args.output {
        eprintln!(
            "Exported {} transactions to {}",
            snapshot.transactions.len(),
            path.display()
        );
    }
    Ok(())
}
