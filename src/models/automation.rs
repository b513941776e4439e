//! Automation rule model
//!
//! The backend has no automation endpoints yet; the type exists so the
//! capability can be represented and reported as unsupported.

use serde::{Deserialize, Serialize};

use super::ids::AutomationRuleId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationRule {
    pub id: AutomationRuleId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub enabled: bool,
}
