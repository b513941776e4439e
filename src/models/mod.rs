//! Core data models for fintrack
//!
//! Flat records as the backend returns them: transactions, budgets, cards,
//! accounts, investments and the rest. Every collection type implements
//! [`Resource`] so the generic store can handle it.

pub mod account;
pub mod automation;
pub mod budget;
pub mod card;
pub mod category;
pub mod commitment;
pub mod dates;
pub mod ids;
pub mod investment;
pub mod money;
pub mod options;
pub mod resource;
pub mod transaction;
pub mod vault;

pub use account::BankAccount;
pub use automation::AutomationRule;
pub use budget::BudgetCategory;
pub use card::{CreditCard, DebitCard};
pub use category::Category;
pub use commitment::Commitment;
pub use ids::{
    AutomationRuleId, BankAccountId, BudgetId, CategoryId, CommitmentId, CreditCardId,
    DebitCardId, EntityId, InvestmentId, SipId, TransactionId, VaultEntryId,
};
pub use investment::{return_percentage, Investment, Sip};
pub use money::Money;
pub use options::{OptionList, UserOptions};
pub use resource::Resource;
pub use transaction::{Transaction, TransactionType};
pub use vault::VaultEntry;
