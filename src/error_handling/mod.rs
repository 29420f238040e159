//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, DNS lookup)
//! - Processing statistics tracking (errors, warnings)
//!
//! Statistics are categorized into:
//! - **Errors**: Lookups that failed, or input that could not be read
//! - **Warnings**: Records a domain does not publish

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{ErrorType, InitializationError, LookupError, QueryType, WarningType};
