//! Per-user option lists
//!
//! Free-text fields (investment type, account type, card network, ...) are
//! offered from these lists. A list the backend doesn't return, or returns
//! empty, falls back to the built-in defaults.

use serde::{Deserialize, Serialize};

use super::account::DEFAULT_ACCOUNT_TYPES;
use super::card::DEFAULT_CARD_NETWORKS;
use super::commitment::DEFAULT_COMMITMENT_TYPES;
use super::investment::{DEFAULT_INVESTMENT_TYPES, DEFAULT_SIP_FREQUENCIES};
use super::vault::DEFAULT_VAULT_CATEGORIES;

/// Which option list a form field draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionList {
    InvestmentTypes,
    AccountTypes,
    CommitmentTypes,
    SipFrequencies,
    CardNetworks,
    VaultCategories,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOptions {
    #[serde(default)]
    pub investment_types: Vec<String>,
    #[serde(default)]
    pub account_types: Vec<String>,
    #[serde(default)]
    pub commitment_types: Vec<String>,
    #[serde(default)]
    pub sip_frequencies: Vec<String>,
    #[serde(default)]
    pub card_networks: Vec<String>,
    #[serde(default)]
    pub vault_categories: Vec<String>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for UserOptions {
    fn default() -> Self {
        Self {
            investment_types: owned(DEFAULT_INVESTMENT_TYPES),
            account_types: owned(DEFAULT_ACCOUNT_TYPES),
            commitment_types: owned(DEFAULT_COMMITMENT_TYPES),
            sip_frequencies: owned(DEFAULT_SIP_FREQUENCIES),
            card_networks: owned(DEFAULT_CARD_NETWORKS),
            vault_categories: owned(DEFAULT_VAULT_CATEGORIES),
        }
    }
}

impl UserOptions {
    /// Replace missing or empty lists with the defaults
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        let pairs = [
            (&mut self.investment_types, defaults.investment_types),
            (&mut self.account_types, defaults.account_types),
            (&mut self.commitment_types, defaults.commitment_types),
            (&mut self.sip_frequencies, defaults.sip_frequencies),
            (&mut self.card_networks, defaults.card_networks),
            (&mut self.vault_categories, defaults.vault_categories),
        ];
        for (list, fallback) in pairs {
            list.retain(|v| !v.trim().is_empty());
            if list.is_empty() {
                *list = fallback;
            }
        }
        self
    }

    pub fn list(&self, which: OptionList) -> &[String] {
        match which {
            OptionList::InvestmentTypes => &self.investment_types,
            OptionList::AccountTypes => &self.account_types,
            OptionList::CommitmentTypes => &self.commitment_types,
            OptionList::SipFrequencies => &self.sip_frequencies,
            OptionList::CardNetworks => &self.card_networks,
            OptionList::VaultCategories => &self.vault_categories,
        }
    }

    pub fn list_mut(&mut self, which: OptionList) -> &mut Vec<String> {
        match which {
            OptionList::InvestmentTypes => &mut self.investment_types,
            OptionList::AccountTypes => &mut self.account_types,
            OptionList::CommitmentTypes => &mut self.commitment_types,
            OptionList::SipFrequencies => &mut self.sip_frequencies,
            OptionList::CardNetworks => &mut self.card_networks,
            OptionList::VaultCategories => &mut self.vault_categories,
        }
    }
}

impl OptionList {
    pub const ALL: [OptionList; 6] = [
        Self::InvestmentTypes,
        Self::AccountTypes,
        Self::CommitmentTypes,
        Self::SipFrequencies,
        Self::CardNetworks,
        Self::VaultCategories,
    ];

    /// Parse a list name as typed on the command line
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "investment-types" | "investments" => Some(Self::InvestmentTypes),
            "account-types" | "accounts" => Some(Self::AccountTypes),
            "commitment-types" | "commitments" => Some(Self::CommitmentTypes),
            "sip-frequencies" | "sips" => Some(Self::SipFrequencies),
            "card-networks" | "networks" => Some(Self::CardNetworks),
            "vault-categories" | "vault" => Some(Self::VaultCategories),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::InvestmentTypes => "investment-types",
            Self::AccountTypes => "account-types",
            Self::CommitmentTypes => "commitment-types",
            Self::SipFrequencies => "sip-frequencies",
            Self::CardNetworks => "card-networks",
            Self::VaultCategories => "vault-categories",
        }
    }
}
