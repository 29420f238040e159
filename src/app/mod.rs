//! Main application modules.
//!
//! This module provides the end-of-run statistics printing used by the main
//! application.

pub mod statistics;

// Re-export public API
pub use statistics::{print_error_statistics, print_summary};
