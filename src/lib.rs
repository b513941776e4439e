//! fintrack - terminal client for a personal finance tracking backend
//!
//! This library holds everything the `fintrack` binary does: a typed client
//! for the backend's `{ success, data, error }` envelopes, a query cache with
//! retry policies, per-collection stores, the aggregate finance context, the
//! record forms and the analytics dashboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, paths and the session token
//! - `error`: Custom error types
//! - `models`: Records as the backend returns them
//! - `api`: HTTP transport and response normalization
//! - `query`: Cache, stale times and retry policies
//! - `stores`: Cached, token-gated access to each collection
//! - `context`: The aggregate view over every store
//! - `modals`: Record forms with validation
//! - `analytics`: Dashboard queries with rate-limit fallback
//! - `setup`: First-run detection and starter data
//! - `admin`: Deployment secrets and data wipe
//! - `export`: JSON, YAML and CSV export
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{paths::FintrackPaths, settings::Settings};
//!
//! let paths = FintrackPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod admin;
pub mod analytics;
pub mod api;
pub mod cli;
pub mod config;
pub mod context;
pub mod display;
pub mod error;
pub mod export;
pub mod modals;
pub mod models;
pub mod notify;
pub mod query;
pub mod setup;
pub mod stores;

pub use error::{FinanceError, FinanceResult};
