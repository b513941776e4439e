//! Budget category model
//!
//! A spending limit for one category. `spent` is maintained by the backend
//! from the user's expense transactions.

use serde::{Deserialize, Serialize};

use super::ids::BudgetId;
use super::money::Money;
use super::resource::{id_unassigned, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    #[serde(default, skip_serializing_if = "id_unassigned")]
    pub id: BudgetId,

    pub name: String,

    #[serde(alias = "limit", alias = "budget")]
    pub budget_limit: Money,

    #[serde(default)]
    pub spent: Money,

    /// Display decoration only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl BudgetCategory {
    /// Limit minus spent; negative when overspent
    pub fn remaining(&self) -> Money {
        self.budget_limit - self.spent
    }

    /// Spent as a percentage of the limit
    pub fn utilization(&self) -> f64 {
        self.spent.percent_of(self.budget_limit)
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget_limit
    }
}

impl Resource for BudgetCategory {
    type Id = BudgetId;
    const LABEL: &'static str = "Budget";
    const PATH: &'static str = "budgets";

    fn id(&self) -> &BudgetId {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(limit: i64, spent: i64) -> BudgetCategory {
        BudgetCategory {
            id: BudgetId::from("b1"),
            name: "Groceries".into(),
            budget_limit: Money::from_major(limit),
            spent: Money::from_major(spent),
            icon: None,
            color: None,
        }
    }

    #[test]
    fn test_remaining_and_utilization() {
        let b = budget(8000, 6000);
        assert_eq!(b.remaining(), Money::from_major(2000));
        assert_eq!(b.utilization(), 75.0);
        assert!(!b.is_over_budget());
    }

    #[test]
    fn test_overspent() {
        let b = budget(1000, 1500);
        assert!(b.is_over_budget());
        assert!(b.remaining().is_negative());
    }

    #[test]
    fn test_limit_aliases() {
        let b: BudgetCategory =
            serde_json::from_str(r#"{"id":"b2","name":"Fuel","limit":3000}"#).unwrap();
        assert_eq!(b.budget_limit, Money::from_major(3000));
        assert!(b.spent.is_zero());
    }
}
