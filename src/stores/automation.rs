//! Automation rules
//!
//! The backend has no automation endpoints. Every operation reports the
//! capability as unsupported instead of pretending to succeed.

use crate::error::{FinanceError, FinanceResult};
use crate::models::{AutomationRule, AutomationRuleId};

const CAPABILITY: &str = "Automation rules";

#[derive(Debug, Default, Clone, Copy)]
pub struct AutomationRules;

impl AutomationRules {
    pub fn new() -> Self {
        Self
    }

    pub fn is_supported(&self) -> bool {
        false
    }

    pub async fn list(&self) -> FinanceResult<Vec<AutomationRule>> {
        Err(FinanceError::Unsupported(CAPABILITY))
    }

    pub async fn create(&self, _rule: &AutomationRule) -> FinanceResult<AutomationRule> {
        Err(FinanceError::Unsupported(CAPABILITY))
    }

    pub async fn toggle(&self, _id: &AutomationRuleId, _enabled: bool) -> FinanceResult<()> {
        Err(FinanceError::Unsupported(CAPABILITY))
    }

    pub async fn delete(&self, _id: &AutomationRuleId) -> FinanceResult<()> {
        Err(FinanceError::Unsupported(CAPABILITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_operation_is_unsupported() {
        let rules = AutomationRules::new();
        assert!(!rules.is_supported());

        let err = rules.list().await.unwrap_err();
        assert_eq!(err.to_string(), "Automation rules are not supported yet");
        assert!(rules.toggle(&AutomationRuleId::from("r1"), true).await.is_err());
        assert!(rules.delete(&AutomationRuleId::from("r1")).await.is_err());
    }
}
