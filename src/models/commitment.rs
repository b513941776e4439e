//! Commitment model
//!
//! Recurring obligations: bills, subscriptions, loan EMIs.

use serde::{Deserialize, Serialize};

use super::ids::CommitmentId;
use super::money::Money;
use super::resource::{id_unassigned, Resource};

/// Types offered before the user customises their list
pub const DEFAULT_COMMITMENT_TYPES: &[&str] = &["bill", "subscription", "loan"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commitment {
    #[serde(default, skip_serializing_if = "id_unassigned")]
    pub id: CommitmentId,

    pub name: String,

    pub amount: Money,

    /// Free text as entered ("5th of every month", "2024-07-01")
    #[serde(default)]
    pub due_date: String,

    /// One of the user's commitment types, or a custom value
    #[serde(rename = "type")]
    pub kind: String,
}

impl Resource for Commitment {
    type Id = CommitmentId;
    const LABEL: &'static str = "Commitment";
    const PATH: &'static str = "commitments";

    fn id(&self) -> &CommitmentId {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}
