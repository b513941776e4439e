//! The contract between a record type and the generic entity store

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

use super::ids::EntityId;

/// A backend collection with list/create/update/delete endpoints
pub trait Resource: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Id: EntityId;

    /// Human-readable singular name, used in notifications
    const LABEL: &'static str;

    /// Collection path under `/api` and the cache key of the list
    const PATH: &'static str;

    /// Cache keys whose data depends on this collection
    const INVALIDATES: &'static [&'static str] = &["analytics"];

    fn id(&self) -> &Self::Id;

    /// Short name shown in confirmations ("Salary", "HDFC Millennia")
    fn title(&self) -> String;

    /// Recompute client-side derived fields after a read
    fn normalize(&mut self) {}
}

/// `skip_serializing_if` helper: new records go out without an id
pub fn id_unassigned<I: EntityId>(id: &I) -> bool {
    id.is_unassigned()
}
