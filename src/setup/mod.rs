//! First-run setup
//!
//! Decides whether the user still needs onboarding and applies the starter
//! data (first bank account, default categories) when they ask for it.

pub mod starter;
pub mod status;

pub use starter::{StarterPlan, StarterResult, DEFAULT_CATEGORIES};
pub use status::{SetupCounts, SetupStatus};
