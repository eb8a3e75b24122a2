//! Configuration loading and management for the Payslip Engine.
//!
//! This module provides functionality to load the progressive tax bracket
//! table and the superannuation rate policy from YAML, validating the table
//! for contiguity before any payslip is computed.
//!
//! # Example
//!
//! ```
//! use payslip_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::builtin().unwrap();
//! println!("Loaded table: {}", config.tax_table().name());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{TaxBracket, TaxConfigFile, TaxTable, UpperLimit};
