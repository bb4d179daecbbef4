//! genemap common library
//!
//! Shared types, logging, and error handling for the genemap workspace:
//!
//! - **Error Handling**: the [`GenemapError`] enum and [`Result`] alias
//! - **Logging**: `tracing`-based logging configuration
//! - **Types**: mapping records, table schemas, and the in-memory table
//!
//! # Example
//!
//! ```no_run
//! use genemap_common::types::{MappingRecord, MappingTable, TableSchema};
//!
//! let mut table = MappingTable::new(TableSchema::MGI);
//! table.push(MappingRecord {
//!     source_id: "MGI:1918911".to_string(),
//!     symbol: Some("Pax6".to_string()),
//!     target_id: "18508".to_string(),
//! });
//! assert_eq!(table.len(), 1);
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{GenemapError, Result};
