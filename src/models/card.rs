//! Credit and debit card models

use serde::{Deserialize, Serialize};

use super::ids::{BankAccountId, CreditCardId, DebitCardId};
use super::money::Money;
use super::resource::{id_unassigned, Resource};

/// Networks offered before the user customises their list
pub const DEFAULT_CARD_NETWORKS: &[&str] = &["Visa", "Mastercard", "RuPay", "American Express"];

/// Share of the outstanding balance used for the minimum-due estimate
pub const MINIMUM_DUE_PERCENT: i64 = 5;

/// Valid range for a statement due day
pub const DUE_DAY_RANGE: std::ops::RangeInclusive<u8> = 1..=31;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    #[serde(default, skip_serializing_if = "id_unassigned")]
    pub id: CreditCardId,

    pub name: String,

    #[serde(default, alias = "bank")]
    pub issuer: String,

    #[serde(default)]
    pub network: String,

    pub credit_limit: Money,

    #[serde(default)]
    pub current_balance: Money,

    /// Day of the month the statement is due; 0 when unknown
    #[serde(default, with = "super::dates::day_of_month")]
    pub due_date: u8,
}

impl CreditCard {
    pub fn available_credit(&self) -> Money {
        self.credit_limit - self.current_balance
    }

    /// Balance as a percentage of the limit
    pub fn utilization(&self) -> f64 {
        self.current_balance.percent_of(self.credit_limit)
    }

    /// The due day, when the record carries a usable one
    pub fn due_day(&self) -> Option<u8> {
        Some(self.due_date).filter(|d| DUE_DAY_RANGE.contains(d))
    }

    /// Estimated minimum payment, rounded up to the next whole unit
    pub fn minimum_due(&self) -> Money {
        if !self.current_balance.is_positive() {
            return Money::zero();
        }
        let cents = self.current_balance.cents() * MINIMUM_DUE_PERCENT;
        let units = (cents + 9_999) / 10_000;
        Money::from_major(units)
    }
}

impl Resource for CreditCard {
    type Id = CreditCardId;
    const LABEL: &'static str = "Credit card";
    const PATH: &'static str = "credit-cards";

    fn id(&self) -> &CreditCardId {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebitCard {
    #[serde(default, skip_serializing_if = "id_unassigned")]
    pub id: DebitCardId,

    pub name: String,

    #[serde(default)]
    pub bank_name: String,

    #[serde(default)]
    pub network: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_four: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_account_id: Option<BankAccountId>,
}

impl Resource for DebitCard {
    type Id = DebitCardId;
    const LABEL: &'static str = "Debit card";
    const PATH: &'static str = "debit-cards";
    const INVALIDATES: &'static [&'static str] = &["accounts", "analytics"];

    fn id(&self) -> &DebitCardId {
        &self.id
    }

    fn title(&self) -> String {
        match &self.last_four {
            Some(last) if !last.is_empty() => format!("{} ••{}", self.name, last),
            _ => self.name.clone(),
        }
    }
}
