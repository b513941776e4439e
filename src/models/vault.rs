//! Vault entries: money set aside for a purpose (emergency fund, travel)

use serde::{Deserialize, Serialize};

use super::ids::VaultEntryId;
use super::money::Money;
use super::resource::{id_unassigned, Resource};

pub const DEFAULT_VAULT_CATEGORIES: &[&str] = &["emergency", "travel", "education", "other"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultEntry {
    #[serde(default, skip_serializing_if = "id_unassigned")]
    pub id: VaultEntryId,

    pub name: String,

    #[serde(default)]
    pub category: String,

    pub amount: Money,

    #[serde(default)]
    pub notes: String,
}

impl Resource for VaultEntry {
    type Id = VaultEntryId;
    const LABEL: &'static str = "Vault entry";
    const PATH: &'static str = "vault";

    fn id(&self) -> &VaultEntryId {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}
