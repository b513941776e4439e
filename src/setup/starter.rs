//! Starter data for a fresh account
//!
//! Creates the first bank account and a default set of categories through
//! the normal stores, skipping categories the user already has.

use tracing::info;

use crate::context::FinanceContext;
use crate::error::FinanceResult;
use crate::models::{BankAccount, Category, CategoryId, TransactionType};

/// Categories created by `fintrack setup --defaults`
pub const DEFAULT_CATEGORIES: &[(&str, TransactionType)] = &[
    ("Salary", TransactionType::Income),
    ("Freelance", TransactionType::Income),
    ("Interest", TransactionType::Income),
    ("Rent", TransactionType::Expense),
    ("Groceries", TransactionType::Expense),
    ("Utilities", TransactionType::Expense),
    ("Transport", TransactionType::Expense),
    ("Dining Out", TransactionType::Expense),
    ("Entertainment", TransactionType::Expense),
    ("Shopping", TransactionType::Expense),
    ("Medical", TransactionType::Expense),
    ("Subscriptions", TransactionType::Expense),
];

#[derive(Debug, Clone, Default)]
pub struct StarterPlan {
    pub account: Option<BankAccount>,
    pub default_categories: bool,
}

#[derive(Debug, Clone, Default)]
pub struct StarterResult {
    pub account: Option<BankAccount>,
    pub categories_created: usize,
}

impl StarterPlan {
    pub fn is_empty(&self) -> bool {
        self.account.is_none() && !self.default_categories
    }

    pub async fn apply(&self, ctx: &FinanceContext) -> FinanceResult<StarterResult> {
        let mut result = StarterResult::default();

        if let Some(account) = &self.account {
            result.account = Some(ctx.bank_accounts.add(account).await?);
        }

        if self.default_categories {
            let existing = ctx.categories.try_entities().await?;
            for (name, kind) in DEFAULT_CATEGORIES {
                if existing.iter().any(|c| c.matches(name)) {
                    continue;
                }
                let category = Category {
                    id: CategoryId::unassigned(),
                    name: name.to_string(),
                    kind: *kind,
                    color: None,
                    usage_count: 0,
                };
                ctx.categories.add(&category).await?;
                result.categories_created += 1;
            }
        }

        info!(
            account = result.account.is_some(),
            categories = result.categories_created,
            "starter data applied"
        );
        Ok(result)
    }
}
