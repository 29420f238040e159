//! CSV report output.
//!
//! Rows are plain comma+space joined fields with no quoting or escaping, so a
//! record containing a comma spans several columns. Consumers of the existing
//! report depend on that layout.

mod csv;

pub use csv::{format_row, write_header, write_row};
