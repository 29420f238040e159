//! CSV row formatting.
//!
//! One header line, then one row per checked domain in input order.

use std::io::{self, Write};

use crate::checker::LookupResult;
use crate::config::CSV_HEADER;

/// Formats a result as a report row (without line terminator).
///
/// Field order: domain, hasMX, hasSPF, spfRecord, hasDMARC, dmarcRecord.
pub fn format_row(result: &LookupResult) -> String {
    format!(
        "{}, {}, {}, {}, {}, {}",
        result.domain,
        result.has_mx(),
        result.has_spf(),
        result.spf_record(),
        result.has_dmarc(),
        result.dmarc_record()
    )
}

/// Writes the fixed header line.
pub fn write_header<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{CSV_HEADER}")
}

/// Writes one report row.
pub fn write_row<W: Write + ?Sized>(out: &mut W, result: &LookupResult) -> io::Result<()> {
    writeln!(out, "{}", format_row(result))
}
