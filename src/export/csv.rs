//! CSV export of transactions and balances

use std::collections::HashMap;
use std::io::Write;

use crate::context::FinanceSnapshot;
use crate::error::{FinanceError, FinanceResult};
use crate::models::EntityId;

fn export_err(e: impl std::fmt::Display) -> FinanceError {
    FinanceError::Export(e.to_string())
}

/// One row per transaction; expenses carry a negative amount
pub fn export_transactions_csv<W: Write>(
    snapshot: &FinanceSnapshot,
    writer: W,
) -> FinanceResult<()> {
    let account_names: HashMap<_, _> = snapshot
        .bank_accounts
        .iter()
        .map(|a| (&a.id, a.bank_name.as_str()))
        .collect();

    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["ID", "Date", "Type", "Category", "Description", "Account", "Amount"])
        .map_err(export_err)?;

    let mut transactions: Vec<_> = snapshot.transactions.iter().collect();
    transactions.sort_by_key(|t| t.date);
    for txn in transactions {
        let account = txn
            .account_id
            .as_ref()
            .map(|id| account_names.get(id).copied().unwrap_or("Unknown"))
            .unwrap_or("");
        out.write_record([
            txn.id.to_string(),
            txn.date.format("%Y-%m-%d").to_string(),
            txn.kind.as_str().to_string(),
            txn.category.clone(),
            txn.description.clone(),
            account.to_string(),
            txn.signed_amount().to_string(),
        ])
        .map_err(export_err)?;
    }

    out.flush().map_err(export_err)
}

/// Bank accounts, credit cards and holdings with their current amounts
pub fn export_balances_csv<W: Write>(snapshot: &FinanceSnapshot, writer: W) -> FinanceResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["Kind", "ID", "Name", "Amount"])
        .map_err(export_err)?;

    for account in &snapshot.bank_accounts {
        out.write_record([
            "bank account",
            account.id.as_str(),
            account.bank_name.as_str(),
            account.balance.to_string().as_str(),
        ])
        .map_err(export_err)?;
    }
    for card in &snapshot.credit_cards {
        out.write_record([
            "credit card",
            card.id.as_str(),
            card.name.as_str(),
            (-card.current_balance).to_string().as_str(),
        ])
        .map_err(export_err)?;
    }
    for investment in &snapshot.investments {
        out.write_record([
            "investment",
            investment.id.as_str(),
            investment.name.as_str(),
            investment.current_value.to_string().as_str(),
        ])
        .map_err(export_err)?;
    }
    for entry in &snapshot.vault {
        out.write_record([
            "vault",
            entry.id.as_str(),
            entry.name.as_str(),
            entry.amount.to_string().as_str(),
        ])
        .map_err(export_err)?;
    }

    out.flush().map_err(export_err)
}
