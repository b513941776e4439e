//! Strongly-typed ID wrappers for all entity types
//!
//! Identifiers are assigned by the backend and are opaque strings. Wrapping
//! them per entity keeps a card id from being passed where a transaction id
//! is expected.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Behaviour shared by every entity id
pub trait EntityId:
    Clone + fmt::Debug + fmt::Display + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Wrap a raw identifier
    fn from_raw(raw: impl Into<String>) -> Self;

    /// The raw identifier as sent to the backend
    fn as_str(&self) -> &str;

    /// True for records the backend hasn't assigned an id to yet
    fn is_unassigned(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

/// Accept both string ids and integer ids (autoincrement backends)
fn deserialize_raw_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserialize_raw_id(deserializer).map(Self)
            }
        }

        impl $name {
            /// An id the backend hasn't assigned yet
            pub fn unassigned() -> Self {
                Self(String::new())
            }
        }

        impl EntityId for $name {
            fn from_raw(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().to_string()))
            }
        }
    };
}

define_id!(TransactionId);
define_id!(BudgetId);
define_id!(CommitmentId);
define_id!(BankAccountId);
define_id!(CreditCardId);
define_id!(DebitCardId);
define_id!(InvestmentId);
define_id!(SipId);
define_id!(VaultEntryId);
define_id!(CategoryId);
define_id!(AutomationRuleId);
