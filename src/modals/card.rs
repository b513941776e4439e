//! Credit and debit card forms

use super::{amount_text, parse_amount, parse_optional_amount, require, ChoiceField, EntityForm};
use crate::context::FinanceContext;
use crate::models::card::DUE_DAY_RANGE;
use crate::models::{
    BankAccountId, CreditCard, CreditCardId, DebitCard, DebitCardId, Money, OptionList, UserOptions,
};
use crate::stores::{CreditCardStore, DebitCardStore};

#[derive(Debug, Clone)]
pub struct CreditCardForm {
    pub name: String,
    pub issuer: String,
    pub network: ChoiceField,
    pub credit_limit: String,
    pub current_balance: String,
    /// Day of the month, as typed
    pub due_date: String,
}

impl Default for CreditCardForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            issuer: String::new(),
            network: ChoiceField::new("Network", OptionList::CardNetworks),
            credit_limit: String::new(),
            current_balance: String::new(),
            due_date: String::new(),
        }
    }
}

/// Parse the due day; only whole numbers 1-31 are accepted
pub fn parse_due_day(raw: &str) -> Result<u8, String> {
    let message = || "Due date must be a day of the month (1-31)".to_string();
    let day: u8 = raw.trim().parse().map_err(|_| message())?;
    if DUE_DAY_RANGE.contains(&day) {
        Ok(day)
    } else {
        Err(message())
    }
}

impl EntityForm for CreditCardForm {
    type Record = CreditCard;

    fn from_record(card: &CreditCard) -> Self {
        let mut form = Self {
            name: card.name.clone(),
            issuer: card.issuer.clone(),
            credit_limit: amount_text(card.credit_limit),
            current_balance: amount_text(card.current_balance),
            due_date: card.due_day().map(|d| d.to_string()).unwrap_or_default(),
            ..Self::default()
        };
        form.network.set_value(&card.network);
        form
    }

    fn validate(&self) -> Result<(), String> {
        require("Card name", &self.name)?;
        let limit = parse_amount("Credit limit", &self.credit_limit)?;
        if limit.is_zero() {
            return Err("Credit limit must be greater than zero".into());
        }
        parse_optional_amount("Current balance", &self.current_balance)?;
        parse_due_day(&self.due_date)?;
        Ok(())
    }

    fn build(&self) -> Result<CreditCard, String> {
        self.validate()?;
        Ok(CreditCard {
            id: CreditCardId::unassigned(),
            name: require("Card name", &self.name)?,
            issuer: self.issuer.trim().to_string(),
            network: self.network.resolve().unwrap_or_default(),
            credit_limit: parse_amount("Credit limit", &self.credit_limit)?,
            current_balance: parse_optional_amount("Current balance", &self.current_balance)?
                .unwrap_or_else(Money::zero),
            due_date: parse_due_day(&self.due_date)?,
        })
    }

    fn store(ctx: &FinanceContext) -> &CreditCardStore {
        &ctx.credit_cards
    }

    fn apply_options(&mut self, options: &UserOptions) {
        self.network.set_options(options);
    }
}

#[derive(Debug, Clone)]
pub struct DebitCardForm {
    pub name: String,
    pub bank_name: String,
    pub network: ChoiceField,
    pub last_four: String,
    pub linked_account_id: String,
}

impl Default for DebitCardForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            bank_name: String::new(),
            network: ChoiceField::new("Network", OptionList::CardNetworks),
            last_four: String::new(),
            linked_account_id: String::new(),
        }
    }
}

impl EntityForm for DebitCardForm {
    type Record = DebitCard;

    fn from_record(card: &DebitCard) -> Self {
        let mut form = Self {
            name: card.name.clone(),
            bank_name: card.bank_name.clone(),
            last_four: card.last_four.clone().unwrap_or_default(),
            linked_account_id: card
                .linked_account_id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            ..Self::default()
        };
        form.network.set_value(&card.network);
        form
    }

    fn validate(&self) -> Result<(), String> {
        require("Card name", &self.name)?;
        require("Bank name", &self.bank_name)?;
        let last_four = self.last_four.trim();
        if !last_four.is_empty()
            && (last_four.len() != 4 || !last_four.chars().all(|c| c.is_ascii_digit()))
        {
            return Err("Last four digits must be exactly 4 digits".into());
        }
        Ok(())
    }

    fn build(&self) -> Result<DebitCard, String> {
        self.validate()?;
        let last_four = self.last_four.trim();
        let linked = self.linked_account_id.trim();
        Ok(DebitCard {
            id: DebitCardId::unassigned(),
            name: require("Card name", &self.name)?,
            bank_name: require("Bank name", &self.bank_name)?,
            network: self.network.resolve().unwrap_or_default(),
            last_four: (!last_four.is_empty()).then(|| last_four.to_string()),
            linked_account_id: (!linked.is_empty()).then(|| BankAccountId::from(linked)),
        })
    }

    fn store(ctx: &FinanceContext) -> &DebitCardStore {
        &ctx.debit_cards
    }

    fn apply_options(&mut self, options: &UserOptions) {
        self.network.set_options(options);
    }
}
