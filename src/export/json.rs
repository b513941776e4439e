//! JSON export
//!
//! Writes every loaded collection with a schema version so an export can
//! be checked before anything reads it back.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::context::FinanceSnapshot;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    BankAccount, BudgetCategory, Category, Commitment, CreditCard, DebitCard, Investment, Sip,
    Transaction, UserOptions, VaultEntry,
};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub transactions: Vec<Transaction>,
    pub bank_accounts: Vec<BankAccount>,
    pub credit_cards: Vec<CreditCard>,
    pub debit_cards: Vec<DebitCard>,
    pub budgets: Vec<BudgetCategory>,
    pub commitments: Vec<Commitment>,
    pub vault: Vec<VaultEntry>,
    pub investments: Vec<Investment>,
    pub sips: Vec<Sip>,
    pub categories: Vec<Category>,
    pub options: UserOptions,
    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub account_count: usize,
    pub card_count: usize,
    pub investment_count: usize,
    pub earliest_transaction: Option<String>,
    pub latest_transaction: Option<String>,
}

impl FullExport {
    pub fn from_snapshot(snapshot: &FinanceSnapshot) -> Self {
        let dates = || snapshot.transactions.iter().map(|t| t.date);
        let metadata = ExportMetadata {
            transaction_count: snapshot.transactions.len(),
            account_count: snapshot.bank_accounts.len(),
            card_count: snapshot.credit_cards.len() + snapshot.debit_cards.len(),
            investment_count: snapshot.investments.len(),
            earliest_transaction: dates().min().map(|d| d.to_string()),
            latest_transaction: dates().max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions: snapshot.transactions.clone(),
            bank_accounts: snapshot.bank_accounts.clone(),
            credit_cards: snapshot.credit_cards.clone(),
            debit_cards: snapshot.debit_cards.clone(),
            budgets: snapshot.budgets.clone(),
            commitments: snapshot.commitments.clone(),
            vault: snapshot.vault.clone(),
            investments: snapshot.investments.clone(),
            sips: snapshot.sips.clone(),
            categories: snapshot.categories.clone(),
            options: snapshot.options.clone(),
            metadata,
        }
    }

    /// Check the schema version and the account references
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let accounts: HashSet<_> = self.bank_accounts.iter().map(|a| &a.id).collect();
        for txn in &self.transactions {
            if let Some(account) = &txn.account_id {
                if !accounts.contains(account) {
                    return Err(format!(
                        "Transaction {} references unknown account {}",
                        txn.id, account
                    ));
                }
            }
        }
        for card in &self.debit_cards {
            if let Some(account) = &card.linked_account_id {
                if !accounts.contains(account) {
                    return Err(format!(
                        "Debit card {} references unknown account {}",
                        card.id, account
                    ));
                }
            }
        }
        Ok(())
    }
}

pub fn export_full_json<W: Write>(
    snapshot: &FinanceSnapshot,
    writer: &mut W,
    pretty: bool,
) -> FinanceResult<()> {
    let export = FullExport::from_snapshot(snapshot);
    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| FinanceError::Export(e.to_string()))
}

/// Read an export back, rejecting ones that fail [`FullExport::validate`]
pub fn read_json_export(json: &str) -> FinanceResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json).map_err(|e| FinanceError::Export(e.to_string()))?;
    export.validate().map_err(FinanceError::Export)?;
    Ok(export)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{BankAccountId, Money, TransactionId, TransactionType};
    use chrono::NaiveDate;

    pub(crate) fn sample_snapshot() -> FinanceSnapshot {
        let account = BankAccount {
            id: BankAccountId::from("acc-1"),
            bank_name: "HDFC".into(),
            account_type: "savings".into(),
            balance: Money::from_major(20_000),
            account_number: None,
        };
        let txn = |id: &str, day: u32, desc: &str| Transaction {
            id: TransactionId::from(id),
            kind: TransactionType::Expense,
            amount: Money::from_cents(45_050),
            category: "Groceries".into(),
            date: NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
            description: desc.into(),
            account_id: Some(account.id.clone()),
        };
        FinanceSnapshot {
            transactions: vec![txn("t1", 2, "Veg, fruit"), txn("t2", 28, "Milk")],
            bank_accounts: vec![account],
            ..FinanceSnapshot::default()
        }
    }

    #[test]
    fn test_full_export() {
        let export = FullExport::from_snapshot(&sample_snapshot());
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.transaction_count, 2);
        assert_eq!(export.metadata.earliest_transaction.as_deref(), Some("2024-04-02"));
        assert_eq!(export.metadata.latest_transaction.as_deref(), Some("2024-04-28"));
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_read_back() {
        let mut out = Vec::new();
        export_full_json(&sample_snapshot(), &mut out, true).unwrap();
        let export = read_json_export(std::str::from_utf8(&out).unwrap()).unwrap();
        assert_eq!(export.bank_accounts[0].bank_name, "HDFC");
        assert_eq!(export.transactions.len(), 2);
    }

    #[test]
    fn test_dangling_account_rejected() {
        let mut snapshot = sample_snapshot();
        snapshot.bank_accounts.clear();
        let err = FullExport::from_snapshot(&snapshot).validate().unwrap_err();
        assert!(err.contains("unknown account acc-1"));
    }
}
