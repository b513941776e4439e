//! Configuration module for fintrack
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence
//! - The session access token

pub mod file_io;
pub mod paths;
pub mod session;
pub mod settings;

pub use paths::FintrackPaths;
pub use session::Session;
pub use settings::{ApiSettings, QuerySettings, Settings};
