//! Budget form

use super::{amount_text, parse_amount, require, EntityForm};
use crate::context::FinanceContext;
use crate::models::{BudgetCategory, BudgetId, Money};
use crate::stores::BudgetStore;

#[derive(Debug, Clone, Default)]
pub struct BudgetForm {
    pub name: String,
    pub limit: String,
    pub icon: String,
    pub color: String,
    /// Spent so far is owned by the backend; carried through edits untouched
    spent: Money,
}

fn optional(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}

impl EntityForm for BudgetForm {
    type Record = BudgetCategory;

    fn from_record(budget: &BudgetCategory) -> Self {
        Self {
            name: budget.name.clone(),
            limit: amount_text(budget.budget_limit),
            icon: budget.icon.clone().unwrap_or_default(),
            color: budget.color.clone().unwrap_or_default(),
            spent: budget.spent,
        }
    }

    fn validate(&self) -> Result<(), String> {
        require("Category name", &self.name)?;
        let limit = parse_amount("Budget limit", &self.limit)?;
        if limit.is_zero() {
            return Err("Budget limit must be greater than zero".into());
        }
        Ok(())
    }

    fn build(&self) -> Result<BudgetCategory, String> {
        self.validate()?;
        Ok(BudgetCategory {
            id: BudgetId::unassigned(),
            name: require("Category name", &self.name)?,
            budget_limit: parse_amount("Budget limit", &self.limit)?,
            spent: self.spent,
            icon: optional(&self.icon),
            color: optional(&self.color),
        })
    }

    fn store(ctx: &FinanceContext) -> &BudgetStore {
        &ctx.budgets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modals::testing::fixture;
    use crate::modals::Modal;
    use serde_json::json;

    #[test]
    fn test_zero_limit_rejected() {
        let form = BudgetForm {
            name: "Food".into(),
            limit: "0".into(),
            ..BudgetForm::default()
        };
        assert_eq!(form.validate().unwrap_err(), "Budget limit must be greater than zero");
    }

    #[tokio::test]
    async fn test_edit_keeps_spent() {
        let fx = fixture();
        fx.backend.seed(
            "budgets",
            vec![json!({"id": "b1", "name": "Food", "budgetLimit": 5000, "spent": 1200})],
        );
        let budgets = fx.ctx.budgets.try_entities().await.unwrap();

        let mut modal = Modal::<BudgetForm>::new();
        modal.open(Some(&budgets[0]));
        assert_eq!(modal.form.limit, "5000");
        modal.form.limit = "6000".into();
        let saved = modal.save(&fx.ctx).await.unwrap();

        assert_eq!(saved.id, BudgetId::from("b1"));
        assert_eq!(saved.budget_limit, Money::from_major(6000));
        assert_eq!(saved.spent, Money::from_major(1200));
    }
}
