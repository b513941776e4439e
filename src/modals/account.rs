//! Bank account form
//!
//! Mirrors the account dialog of the old terminal UI: bank name, type,
//! starting balance and an optional account number.

use super::{amount_text, parse_optional_amount, require, ChoiceField, EntityForm};
use crate::context::FinanceContext;
use crate::models::{BankAccount, BankAccountId, Money, OptionList, UserOptions};
use crate::stores::BankAccountStore;

#[derive(Debug, Clone)]
pub struct BankAccountForm {
    pub bank_name: String,
    pub account_type: ChoiceField,
    pub balance: String,
    pub account_number: String,
}

impl Default for BankAccountForm {
    fn default() -> Self {
        Self {
            bank_name: String::new(),
            account_type: ChoiceField::new("Account type", OptionList::AccountTypes),
            balance: String::new(),
            account_number: String::new(),
        }
    }
}

impl EntityForm for BankAccountForm {
    type Record = BankAccount;

    fn from_record(account: &BankAccount) -> Self {
        let mut form = Self {
            bank_name: account.bank_name.clone(),
            balance: amount_text(account.balance),
            account_number: account.account_number.clone().unwrap_or_default(),
            ..Self::default()
        };
        form.account_type.set_value(&account.account_type);
        form
    }

    fn validate(&self) -> Result<(), String> {
        let name = require("Bank name", &self.bank_name)?;
        if name.len() > 50 {
            return Err("Bank name too long (max 50 characters)".into());
        }
        self.account_type.require()?;
        parse_optional_amount("Balance", &self.balance)?;

        let number = self.account_number.trim();
        if !number.is_empty() && !number.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err("Account number may only contain letters and digits".into());
        }
        Ok(())
    }

    fn build(&self) -> Result<BankAccount, String> {
        self.validate()?;
        let number = self.account_number.trim();
        Ok(BankAccount {
            id: BankAccountId::unassigned(),
            bank_name: require("Bank name", &self.bank_name)?,
            account_type: self.account_type.require()?,
            balance: parse_optional_amount("Balance", &self.balance)?.unwrap_or_else(Money::zero),
            account_number: (!number.is_empty()).then(|| number.to_string()),
        })
    }

    fn store(ctx: &FinanceContext) -> &BankAccountStore {
        &ctx.bank_accounts
    }

    fn apply_options(&mut self, options: &UserOptions) {
        self.account_type.set_options(options);
    }
}
