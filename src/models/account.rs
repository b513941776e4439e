//! Bank account model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BankAccountId;
use super::money::Money;
use super::resource::{id_unassigned, Resource};

/// Account types offered before the user customises their list
pub const DEFAULT_ACCOUNT_TYPES: &[&str] = &["savings", "current", "salary", "fixed deposit"];

/// A bank account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    #[serde(default, skip_serializing_if = "id_unassigned")]
    pub id: BankAccountId,

    #[serde(alias = "name")]
    pub bank_name: String,

    /// One of the user's account types, or a custom value
    pub account_type: String,

    #[serde(default)]
    pub balance: Money,

    /// Masked number as entered, e.g. "XXXX1234"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
}

impl BankAccount {
    /// Last four characters of the account number, if any
    pub fn masked_number(&self) -> Option<String> {
        let number = self.account_number.as_deref()?.trim();
        if number.is_empty() {
            return None;
        }
        let tail: String = number
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        Some(format!("••{}", tail))
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.bank_name, self.account_type)
    }
}

impl Resource for BankAccount {
    type Id = BankAccountId;
    const LABEL: &'static str = "Account";
    const PATH: &'static str = "accounts";

    fn id(&self) -> &BankAccountId {
        &self.id
    }

    fn title(&self) -> String {
        self.bank_name.clone()
    }
}
