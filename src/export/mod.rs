//! Export of the loaded data
//!
//! - JSON: every collection, versioned, machine-readable
//! - YAML: the same document for reading by eye
//! - CSV: transactions and balances for spreadsheets

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_balances_csv, export_transactions_csv};
pub use json::{export_full_json, read_json_export, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, read_yaml_export};
