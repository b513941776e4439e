//! Investment and SIP models
//!
//! The return percentage of an investment is never trusted from the wire:
//! it is recomputed from the invested and current amounts on every read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates;
use super::ids::{InvestmentId, SipId};
use super::money::Money;
use super::resource::{id_unassigned, Resource};

pub const DEFAULT_INVESTMENT_TYPES: &[&str] =
    &["stocks", "mutual funds", "fixed deposit", "gold", "crypto", "bonds"];

pub const DEFAULT_SIP_FREQUENCIES: &[&str] = &["monthly", "quarterly", "yearly"];

/// `round(((current - invested) / invested) * 100, 1)`, or 0 with nothing invested
pub fn return_percentage(invested: Money, current: Money) -> f64 {
    if !invested.is_positive() {
        return 0.0;
    }
    let gain = (current - invested).cents() as f64;
    let pct = gain / invested.cents() as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    #[serde(default, skip_serializing_if = "id_unassigned")]
    pub id: InvestmentId,

    pub name: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub invested_amount: Money,

    #[serde(default)]
    pub current_value: Money,

    #[serde(default)]
    pub returns: f64,
}

impl Investment {
    pub fn gain(&self) -> Money {
        self.current_value - self.invested_amount
    }
}

impl Resource for Investment {
    type Id = InvestmentId;
    const LABEL: &'static str = "Investment";
    const PATH: &'static str = "investments";

    fn id(&self) -> &InvestmentId {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn normalize(&mut self) {
        self.returns = return_percentage(self.invested_amount, self.current_value);
    }
}

/// Systematic investment plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sip {
    #[serde(default, skip_serializing_if = "id_unassigned")]
    pub id: SipId,

    pub name: String,

    pub amount: Money,

    pub frequency: String,

    #[serde(
        default,
        with = "dates::optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_debit_date: Option<NaiveDate>,

    #[serde(default)]
    pub total_invested: Money,
}

impl Resource for Sip {
    type Id = SipId;
    const LABEL: &'static str = "SIP";
    const PATH: &'static str = "sips";
    const INVALIDATES: &'static [&'static str] = &["investments", "analytics"];

    fn id(&self) -> &SipId {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}
