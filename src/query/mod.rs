//! Query cache shared by the entity stores and the analytics queries
//!
//! Provides stale-time freshness, prefix invalidation, direct cache writes,
//! per-key in-flight de-duplication and retry policies.

mod cache;
mod key;
mod retry;

pub use cache::QueryClient;
pub use key::QueryKey;
pub use retry::{QueryOptions, RetryPolicy};
