//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger
//! - DNS resolver
//! - Input and output streams
//!
//! All initialization functions return proper error types for error handling.

mod logger;
mod resolver;
mod streams;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;
pub use streams::{open_input, open_output, InputReader, OutputWriter};
