//! Transaction model
//!
//! A single income or expense entry, optionally tied to a bank account.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::dates;
use super::ids::{BankAccountId, TransactionId};
use super::money::Money;
use super::resource::{id_unassigned, Resource};

/// Direction of a transaction (also used by categories)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    /// Spelling used on the wire and in exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Parse transaction type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "credit" => Some(Self::Income),
            "expense" | "out" | "debit" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "id_unassigned")]
    pub id: TransactionId,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Always positive; the direction lives in `kind`
    pub amount: Money,

    pub category: String,

    #[serde(with = "dates::date")]
    pub date: NaiveDate,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<BankAccountId>,
}

impl Transaction {
    /// Amount with the sign applied (expenses negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }
}

impl Resource for Transaction {
    type Id = TransactionId;
    const LABEL: &'static str = "Transaction";
    const PATH: &'static str = "transactions";
    const INVALIDATES: &'static [&'static str] = &["accounts", "budgets", "categories", "analytics"];

    fn id(&self) -> &TransactionId {
        &self.id
    }

    fn title(&self) -> String {
        if self.description.trim().is_empty() {
            self.category.clone()
        } else {
            self.description.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction {
            id: TransactionId::unassigned(),
            kind: TransactionType::Expense,
            amount: Money::from_major(450),
            category: "Food".into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            description: String::new(),
            account_id: None,
        }
    }

    #[test]
    fn test_signed_amount() {
        let mut txn = sample();
        assert_eq!(txn.signed_amount().cents(), -45000);
        txn.kind = TransactionType::Income;
        assert_eq!(txn.signed_amount().cents(), 45000);
    }

    #[test]
    fn test_new_record_serializes_without_id() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["type"], "expense");
        assert_eq!(json["date"], "2024-05-02");
        assert_eq!(json["amount"], 450);
    }

    #[test]
    fn test_reads_backend_shape() {
        let txn: Transaction = serde_json::from_str(
            r#"{"id":"clt9","type":"income","amount":52000.5,"category":"Salary",
                "date":"2024-05-01T00:00:00.000Z","accountId":"acc1","userId":"u1"}"#,
        )
        .unwrap();
        assert_eq!(txn.id.to_string(), "clt9");
        assert!(txn.is_income());
        assert_eq!(txn.amount.cents(), 5_200_050);
        assert_eq!(txn.account_id, Some(BankAccountId::from("acc1")));
        assert_eq!(txn.title(), "Salary");
    }

    #[test]
    fn test_wire_spelling_matches_serde() {
        for kind in [TransactionType::Income, TransactionType::Expense] {
            assert_eq!(serde_json::to_value(kind).unwrap(), kind.as_str());
        }
    }

    #[test]
    fn test_type_parsing() {
        assert_eq!(TransactionType::parse("INCOME"), Some(TransactionType::Income));
        assert_eq!(TransactionType::parse("expense"), Some(TransactionType::Expense));
        assert_eq!(TransactionType::parse("transfer"), None);
    }
}
