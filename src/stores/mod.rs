//! Entity stores
//!
//! Cached, token-gated access to each backend collection.

pub mod automation;
pub mod entity;
pub mod options;

pub use automation::AutomationRules;
pub use entity::EntityStore;
pub use options::OptionsStore;

use crate::models::{
    BankAccount, BudgetCategory, Category, Commitment, CreditCard, DebitCard, Investment, Sip,
    Transaction, VaultEntry,
};

pub type TransactionStore = EntityStore<Transaction>;
pub type BankAccountStore = EntityStore<BankAccount>;
pub type CreditCardStore = EntityStore<CreditCard>;
pub type DebitCardStore = EntityStore<DebitCard>;
pub type BudgetStore = EntityStore<BudgetCategory>;
pub type CommitmentStore = EntityStore<Commitment>;
pub type VaultStore = EntityStore<VaultEntry>;
pub type InvestmentStore = EntityStore<Investment>;
pub type SipStore = EntityStore<Sip>;
pub type CategoryStore = EntityStore<Category>;
